use super::Money;
use serde::{Deserialize, Serialize};

/// One line of a shipment's contents, used for customs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentItem {
    pub sku: Option<String>,
    pub description: Option<String>,
    pub item_value: Money,
    pub quantity: Option<i64>,
    pub hs_code: Option<String>,
    pub origin_country_code: Option<String>,
}

impl ShipmentItem {
    pub fn new(description: impl Into<String>, quantity: i64) -> Self {
        Self {
            description: Some(description.into()),
            quantity: Some(quantity),
            ..Default::default()
        }
    }
}
