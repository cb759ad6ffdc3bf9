use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct StatusAttributes {
    code: Option<String>,
    resource_type: Option<String>,
    level: Option<String>,
    name: Option<String>,
    description: Option<String>,
}

/// Normalized status a shipment can be in, e.g. `shipment-delivered`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    id: Option<String>,
    attributes: StatusAttributes,
}

impl_resource!(Status => Statuses {
    attributes: StatusAttributes,
});

impl Status {
    pub const LEVEL_CONCEPT: &'static str = "concept";
    pub const LEVEL_PENDING: &'static str = "pending";
    pub const LEVEL_SUCCESS: &'static str = "success";
    pub const LEVEL_FAILED: &'static str = "failed";

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.attributes.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.attributes.code.as_deref()
    }

    /// Type of resource this status applies to
    pub fn set_status_resource_type(&mut self, resource_type: impl Into<String>) -> &mut Self {
        self.attributes.resource_type = Some(resource_type.into());
        self
    }

    pub fn status_resource_type(&self) -> Option<&str> {
        self.attributes.resource_type.as_deref()
    }

    pub fn set_level(&mut self, level: impl Into<String>) -> &mut Self {
        self.attributes.level = Some(level.into());
        self
    }

    pub fn level(&self) -> Option<&str> {
        self.attributes.level.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.attributes.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }
}
