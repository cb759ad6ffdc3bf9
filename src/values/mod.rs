//! Value objects nested inside resource attributes
//!
//! These carry no id or type of their own. They are written inline, and the
//! owning resource's compaction drops whatever is left unset.

mod address;
mod customs;
mod location;
mod money;
mod physical_properties;
mod shipment_item;

pub use address::Address;
pub use customs::{ContentType, Customs, Incoterm, NonDelivery};
pub use location::{OpeningHour, PickupLocation, Position};
pub use money::{Interval, Money};
pub use physical_properties::{PhysicalProperties, WeightUnit};
pub use shipment_item::ShipmentItem;
