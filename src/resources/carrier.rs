use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct CarrierAttributes {
    name: Option<String>,
    code: Option<String>,
}

/// A company that physically moves parcels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carrier {
    id: Option<String>,
    attributes: CarrierAttributes,
}

impl_resource!(Carrier => Carriers {
    attributes: CarrierAttributes,
});

impl Carrier {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.attributes.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.attributes.code.as_deref()
    }
}
