use super::Region;
use crate::resource::{impl_resource, ToOne};
use crate::values::Address;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShopAttributes {
    name: Option<String>,
    website: Option<String>,
    billing_address: Option<Address>,
    return_address: Option<Address>,
    created_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShopRelationships {
    region: ToOne<Region>,
}

/// Web shop that ships with the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shop {
    id: Option<String>,
    attributes: ShopAttributes,
    relationships: ShopRelationships,
}

impl_resource!(Shop => Shops {
    attributes: ShopAttributes,
    relationships: ShopRelationships,
});

impl Shop {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    pub fn set_website(&mut self, website: impl Into<String>) -> &mut Self {
        self.attributes.website = Some(website.into());
        self
    }

    pub fn website(&self) -> Option<&str> {
        self.attributes.website.as_deref()
    }

    pub fn set_billing_address(&mut self, address: Address) -> &mut Self {
        self.attributes.billing_address = Some(address);
        self
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.attributes.billing_address.as_ref()
    }

    pub fn set_return_address(&mut self, address: Address) -> &mut Self {
        self.attributes.return_address = Some(address);
        self
    }

    pub fn return_address(&self) -> Option<&Address> {
        self.attributes.return_address.as_ref()
    }

    pub fn set_created_at<Tz: TimeZone>(&mut self, at: DateTime<Tz>) -> &mut Self {
        self.attributes.created_at = Some(at.timestamp());
        self
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.attributes
            .created_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn set_region(&mut self, region: Region) -> &mut Self {
        self.relationships.region.set(region);
        self
    }

    pub fn region(&self) -> Option<&Region> {
        self.relationships.region.get()
    }
}
