use crate::resource::impl_resource;
use crate::values::{Interval, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceGroupAttributes {
    weight: Interval,
    price: Money,
    step_price: Money,
    step_size: Option<i64>,
}

/// Weight bracket of a service contract and its price
///
/// Above `weight.min`, every `step_size` grams adds `step_price`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceGroup {
    id: Option<String>,
    attributes: ServiceGroupAttributes,
}

impl_resource!(ServiceGroup => ServiceGroups {
    attributes: ServiceGroupAttributes,
});

impl ServiceGroup {
    pub fn set_weight_min(&mut self, grams: i64) -> &mut Self {
        self.attributes.weight.min = Some(grams);
        self
    }

    pub fn weight_min(&self) -> Option<i64> {
        self.attributes.weight.min
    }

    pub fn set_weight_max(&mut self, grams: i64) -> &mut Self {
        self.attributes.weight.max = Some(grams);
        self
    }

    pub fn weight_max(&self) -> Option<i64> {
        self.attributes.weight.max
    }

    pub fn set_price(&mut self, price: i64) -> &mut Self {
        self.attributes.price.amount = Some(price);
        self
    }

    pub fn price(&self) -> Option<i64> {
        self.attributes.price.amount
    }

    /// Currency of both the base price and the step price
    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        let currency = currency.into();
        self.attributes.step_price.currency = Some(currency.clone());
        self.attributes.price.currency = Some(currency);
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.attributes.price.currency.as_deref()
    }

    pub fn set_step_price(&mut self, step_price: i64) -> &mut Self {
        self.attributes.step_price.amount = Some(step_price);
        self
    }

    pub fn step_price(&self) -> Option<i64> {
        self.attributes.step_price.amount
    }

    pub fn set_step_size(&mut self, grams: i64) -> &mut Self {
        self.attributes.step_size = Some(grams);
        self
    }

    pub fn step_size(&self) -> Option<i64> {
        self.attributes.step_size
    }
}
