use super::Address;
use serde::{Deserialize, Serialize};

/// Opening window of a pick-up/drop-off location for one day
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHour {
    pub day: Option<String>,
    pub open: Option<String>,
    pub closed: Option<String>,
}

impl OpeningHour {
    pub fn new(day: impl Into<String>, open: impl Into<String>, closed: impl Into<String>) -> Self {
        Self {
            day: Some(day.into()),
            open: Some(open.into()),
            closed: Some(closed.into()),
        }
    }
}

/// Geographic position, with the distance from the searched point
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance: Option<i64>,
    pub unit: Option<String>,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }
}

/// Pick-up point chosen for a shipment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupLocation {
    pub code: Option<String>,
    pub address: Option<Address>,
}
