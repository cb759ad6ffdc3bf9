use super::Carrier;
use crate::resource::{impl_resource, ToOne};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ContractAttributes {
    name: Option<String>,
    currency: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ContractRelationships {
    carrier: ToOne<Carrier>,
}

/// Agreement with a carrier under which services are booked
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contract {
    id: Option<String>,
    attributes: ContractAttributes,
    relationships: ContractRelationships,
}

impl_resource!(Contract => Contracts {
    attributes: ContractAttributes,
    relationships: ContractRelationships,
});

impl Contract {
    pub const STATUS_ACTIVE: &'static str = "active";
    pub const STATUS_INACTIVE: &'static str = "inactive";

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.attributes.currency = Some(currency.into());
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.attributes.currency.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.attributes.status = Some(status.into());
        self
    }

    pub fn status(&self) -> Option<&str> {
        self.attributes.status.as_deref()
    }

    pub fn set_carrier(&mut self, carrier: Carrier) -> &mut Self {
        self.relationships.carrier.set(carrier);
        self
    }

    pub fn carrier(&self) -> Option<&Carrier> {
        self.relationships.carrier.get()
    }
}
