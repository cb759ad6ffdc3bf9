use serde::{Deserialize, Serialize};

/// Postal address with contact details
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street_1: Option<String>,
    pub street_2: Option<String>,
    pub street_number: Option<i64>,
    pub street_number_suffix: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub country_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl Address {
    /// Create an address from its mandatory postal parts
    pub fn new(
        street_1: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street_1: Some(street_1.into()),
            postal_code: Some(postal_code.into()),
            city: Some(city.into()),
            country_code: Some(country_code.into()),
            ..Default::default()
        }
    }

    /// First and last name joined by a space, when either is present
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}
