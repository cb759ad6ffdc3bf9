use super::{ServiceContract, ServiceOption};
use crate::resource::{impl_resource, ToOne};
use crate::values::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceOptionPriceAttributes {
    price: Money,
    required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceOptionPriceRelationships {
    service_option: ToOne<ServiceOption>,
    service_contract: ToOne<ServiceContract>,
}

/// Price of a service option under one service contract
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceOptionPrice {
    id: Option<String>,
    attributes: ServiceOptionPriceAttributes,
    relationships: ServiceOptionPriceRelationships,
}

impl_resource!(ServiceOptionPrice => ServiceOptionPrices {
    attributes: ServiceOptionPriceAttributes,
    relationships: ServiceOptionPriceRelationships,
});

impl ServiceOptionPrice {
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

    /// Whether the option is always applied under this contract
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.attributes.required = Some(required);
        self
    }

    pub fn is_required(&self) -> Option<bool> {
        self.attributes.required
    }

    pub fn set_service_option(&mut self, option: ServiceOption) -> &mut Self {
        self.relationships.service_option.set(option);
        self
    }

    pub fn service_option(&self) -> Option<&ServiceOption> {
        self.relationships.service_option.get()
    }

    pub fn set_service_contract(&mut self, contract: ServiceContract) -> &mut Self {
        self.relationships.service_contract.set(contract);
        self
    }

    pub fn service_contract(&self) -> Option<&ServiceContract> {
        self.relationships.service_contract.get()
    }
}
