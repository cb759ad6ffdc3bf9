use serde::{Deserialize, Serialize};

/// Amount in minor units plus ISO 4217 currency
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }
}

/// Inclusive `{min, max}` bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Interval {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}
