//! Service options: paid extras such as a signature on delivery

use crate::resource::impl_resource;
use crate::values::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceOptionAttributes {
    name: Option<String>,
    code: Option<String>,
    category: Option<String>,
    price: Money,
}

/// An extra that can be added to a shipment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceOption {
    id: Option<String>,
    attributes: ServiceOptionAttributes,
}

impl_resource!(ServiceOption => ServiceOptions {
    attributes: ServiceOptionAttributes,
});

impl ServiceOption {
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

    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.attributes.category = Some(category.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.attributes.category.as_deref()
    }

    /// Price amount in minor units (cents, øre)
    pub fn set_price(&mut self, price: i64) -> &mut Self {
        self.attributes.price.amount = Some(price);
        self
    }

    pub fn price(&self) -> Option<i64> {
        self.attributes.price.amount
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.attributes.price.currency = Some(currency.into());
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.attributes.price.currency.as_deref()
    }
}
