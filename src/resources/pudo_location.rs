use crate::resource::impl_resource;
use crate::values::{Address, OpeningHour, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct PickUpDropOffLocationAttributes {
    code: Option<String>,
    address: Option<Address>,
    #[serde(rename = "openingHours")]
    opening_hours: Vec<OpeningHour>,
    position: Option<Position>,
}

/// Service point where parcels can be dropped off or collected
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickUpDropOffLocation {
    id: Option<String>,
    attributes: PickUpDropOffLocationAttributes,
}

impl_resource!(PickUpDropOffLocation => PudoLocations {
    attributes: PickUpDropOffLocationAttributes,
});

impl PickUpDropOffLocation {
    /// Carrier code of the location, used as a shipment's pickup location code
    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.attributes.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.attributes.code.as_deref()
    }

    pub fn set_address(&mut self, address: Address) -> &mut Self {
        self.attributes.address = Some(address);
        self
    }

    pub fn address(&self) -> Option<&Address> {
        self.attributes.address.as_ref()
    }

    pub fn set_opening_hours(&mut self, opening_hours: Vec<OpeningHour>) -> &mut Self {
        self.attributes.opening_hours.clear();
        for opening_hour in opening_hours {
            self.add_opening_hour(opening_hour);
        }
        self
    }

    pub fn add_opening_hour(&mut self, opening_hour: OpeningHour) -> &mut Self {
        self.attributes.opening_hours.push(opening_hour);
        self
    }

    pub fn opening_hours(&self) -> &[OpeningHour] {
        &self.attributes.opening_hours
    }

    pub fn set_position(&mut self, position: Position) -> &mut Self {
        self.attributes.position = Some(position);
        self
    }

    pub fn position(&self) -> Option<&Position> {
        self.attributes.position.as_ref()
    }
}
