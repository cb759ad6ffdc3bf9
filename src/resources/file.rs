use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

/// One rendition of a file, e.g. the PDF or the ZPL version of a label
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormat {
    pub mime_type: Option<String>,
    pub extension: Option<String>,
}

impl FileFormat {
    pub fn new(mime_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            mime_type: Some(mime_type.into()),
            extension: Some(extension.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct FileAttributes {
    document_type: Option<String>,
    formats: Vec<FileFormat>,
}

/// Document attached to a shipment: label, printcode, invoice
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    id: Option<String>,
    attributes: FileAttributes,
}

impl_resource!(File => Files {
    attributes: FileAttributes,
});

impl File {
    pub const DOCUMENT_TYPE_LABEL: &'static str = "label";
    pub const DOCUMENT_TYPE_PRINTCODE: &'static str = "printcode";
    pub const DOCUMENT_TYPE_INVOICE: &'static str = "invoice";

    pub const MIME_TYPE_PDF: &'static str = "application/pdf";
    pub const MIME_TYPE_PNG: &'static str = "image/png";
    pub const MIME_TYPE_JPG: &'static str = "image/jpeg";
    pub const MIME_TYPE_ZPL: &'static str = "application/zpl";

    pub fn set_document_type(&mut self, document_type: impl Into<String>) -> &mut Self {
        self.attributes.document_type = Some(document_type.into());
        self
    }

    pub fn document_type(&self) -> Option<&str> {
        self.attributes.document_type.as_deref()
    }

    pub fn set_formats(&mut self, formats: Vec<FileFormat>) -> &mut Self {
        self.attributes.formats.clear();
        for format in formats {
            self.add_format(format);
        }
        self
    }

    pub fn add_format(&mut self, format: FileFormat) -> &mut Self {
        self.attributes.formats.push(format);
        self
    }

    pub fn formats(&self) -> &[FileFormat] {
        &self.attributes.formats
    }

    /// First format with the given MIME type
    pub fn format(&self, mime_type: &str) -> Option<&FileFormat> {
        self.attributes
            .formats
            .iter()
            .find(|f| f.mime_type.as_deref() == Some(mime_type))
    }
}
