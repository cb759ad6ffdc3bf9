//! Concrete resources
//!
//! One module per resource type. Each declares private attribute,
//! relationship and meta structs and hands them to `impl_resource!`, which
//! supplies identity, encoding and hydration. Public setters and getters
//! expose the fields.
//!
//! [`AnyResource`] covers the closed set of types for code that handles
//! documents without knowing their content in advance.

mod carrier;
mod contract;
mod file;
mod pudo_location;
mod region;
mod service;
mod service_contract;
mod service_group;
mod service_option;
mod service_option_price;
mod shipment;
mod shipment_status;
mod shop;
mod status;

pub use carrier::Carrier;
pub use contract::Contract;
pub use file::{File, FileFormat};
pub use pudo_location::PickUpDropOffLocation;
pub use region::Region;
pub use service::Service;
pub use service_contract::ServiceContract;
pub use service_group::ServiceGroup;
pub use service_option::ServiceOption;
pub use service_option_price::ServiceOptionPrice;
pub use shipment::{Shipment, StatusHistoryProducer};
pub use shipment_status::ShipmentStatus;
pub use shop::Shop;
pub use status::Status;

use crate::resource::{FromObject, Resource, ResourceObject, ResourceType};
use anyhow::Result;
use serde::{Serialize, Serializer};

/// Any resource, tagged by its type
#[derive(Debug, Clone, PartialEq)]
pub enum AnyResource {
    Shipment(Shipment),
    ServiceOption(ServiceOption),
    ServiceContract(ServiceContract),
    ServiceGroup(ServiceGroup),
    ServiceOptionPrice(ServiceOptionPrice),
    PickUpDropOffLocation(PickUpDropOffLocation),
    Shop(Shop),
    ShipmentStatus(ShipmentStatus),
    Status(Status),
    Service(Service),
    Contract(Contract),
    Carrier(Carrier),
    Region(Region),
    File(File),
}

/// Apply the same expression to whichever resource the enum holds
macro_rules! each_resource {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyResource::Shipment($inner) => $body,
            AnyResource::ServiceOption($inner) => $body,
            AnyResource::ServiceContract($inner) => $body,
            AnyResource::ServiceGroup($inner) => $body,
            AnyResource::ServiceOptionPrice($inner) => $body,
            AnyResource::PickUpDropOffLocation($inner) => $body,
            AnyResource::Shop($inner) => $body,
            AnyResource::ShipmentStatus($inner) => $body,
            AnyResource::Status($inner) => $body,
            AnyResource::Service($inner) => $body,
            AnyResource::Contract($inner) => $body,
            AnyResource::Carrier($inner) => $body,
            AnyResource::Region($inner) => $body,
            AnyResource::File($inner) => $body,
        }
    };
}

impl AnyResource {
    /// Hydrate the resource named by the object's type tag
    pub fn from_object(object: ResourceObject) -> Result<Self> {
        Ok(match object.resource_type {
            ResourceType::Shipments => Self::Shipment(Shipment::from_object(object)?),
            ResourceType::ServiceOptions => Self::ServiceOption(ServiceOption::from_object(object)?),
            ResourceType::ServiceContracts => {
                Self::ServiceContract(ServiceContract::from_object(object)?)
            }
            ResourceType::ServiceGroups => Self::ServiceGroup(ServiceGroup::from_object(object)?),
            ResourceType::ServiceOptionPrices => {
                Self::ServiceOptionPrice(ServiceOptionPrice::from_object(object)?)
            }
            ResourceType::PudoLocations => {
                Self::PickUpDropOffLocation(PickUpDropOffLocation::from_object(object)?)
            }
            ResourceType::Shops => Self::Shop(Shop::from_object(object)?),
            ResourceType::ShipmentStatuses => {
                Self::ShipmentStatus(ShipmentStatus::from_object(object)?)
            }
            ResourceType::Statuses => Self::Status(Status::from_object(object)?),
            ResourceType::Services => Self::Service(Service::from_object(object)?),
            ResourceType::Contracts => Self::Contract(Contract::from_object(object)?),
            ResourceType::Carriers => Self::Carrier(Carrier::from_object(object)?),
            ResourceType::Regions => Self::Region(Region::from_object(object)?),
            ResourceType::Files => Self::File(File::from_object(object)?),
        })
    }

    pub fn id(&self) -> Option<&str> {
        each_resource!(self, resource => resource.id())
    }

    pub fn resource_type(&self) -> ResourceType {
        each_resource!(self, resource => resource.resource_type())
    }

    pub fn to_object(&self) -> ResourceObject {
        each_resource!(self, resource => resource.to_object())
    }
}

impl Serialize for AnyResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

macro_rules! impl_from_resource {
    ($($resource:ident),* $(,)?) => {
        $(
            impl From<$resource> for AnyResource {
                fn from(resource: $resource) -> Self {
                    AnyResource::$resource(resource)
                }
            }
        )*
    };
}

impl_from_resource!(
    Shipment,
    ServiceOption,
    ServiceContract,
    ServiceGroup,
    ServiceOptionPrice,
    PickUpDropOffLocation,
    Shop,
    ShipmentStatus,
    Status,
    Service,
    Contract,
    Carrier,
    Region,
    File,
);
