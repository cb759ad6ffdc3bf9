use super::{Carrier, Region, ServiceContract};
use crate::resource::{impl_resource, ToMany, ToOne};
use crate::values::Interval;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceAttributes {
    name: Option<String>,
    package_type: Option<String>,
    transit_time: Interval,
    handover_method: Option<String>,
    delivery_days: Vec<String>,
    delivery_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceRelationships {
    carrier: ToOne<Carrier>,
    region_from: ToOne<Region>,
    region_to: ToOne<Region>,
    service_contracts: ToMany<ServiceContract>,
}

/// A carrier product between two regions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Service {
    id: Option<String>,
    attributes: ServiceAttributes,
    relationships: ServiceRelationships,
}

impl_resource!(Service => Services {
    attributes: ServiceAttributes,
    relationships: ServiceRelationships,
});

impl Service {
    pub const PACKAGE_TYPE_PARCEL: &'static str = "parcel";
    pub const PACKAGE_TYPE_LETTERBOX: &'static str = "letterbox";
    pub const PACKAGE_TYPE_UNSTAMPED: &'static str = "unstamped";

    pub const HANDOVER_METHOD_COLLECTION: &'static str = "collection";
    pub const HANDOVER_METHOD_DROP_OFF: &'static str = "drop-off";

    pub const DELIVERY_METHOD_DELIVERY: &'static str = "delivery";
    pub const DELIVERY_METHOD_PICKUP: &'static str = "pick-up";

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    pub fn set_package_type(&mut self, package_type: impl Into<String>) -> &mut Self {
        self.attributes.package_type = Some(package_type.into());
        self
    }

    pub fn package_type(&self) -> Option<&str> {
        self.attributes.package_type.as_deref()
    }

    /// Transit time in days
    pub fn set_transit_time(&mut self, min: i64, max: i64) -> &mut Self {
        self.attributes.transit_time = Interval::new(min, max);
        self
    }

    pub fn transit_time_min(&self) -> Option<i64> {
        self.attributes.transit_time.min
    }

    pub fn transit_time_max(&self) -> Option<i64> {
        self.attributes.transit_time.max
    }

    pub fn set_handover_method(&mut self, handover_method: impl Into<String>) -> &mut Self {
        self.attributes.handover_method = Some(handover_method.into());
        self
    }

    pub fn handover_method(&self) -> Option<&str> {
        self.attributes.handover_method.as_deref()
    }

    pub fn set_delivery_days(&mut self, days: Vec<String>) -> &mut Self {
        self.attributes.delivery_days.clear();
        for day in days {
            self.add_delivery_day(day);
        }
        self
    }

    pub fn add_delivery_day(&mut self, day: impl Into<String>) -> &mut Self {
        self.attributes.delivery_days.push(day.into());
        self
    }

    pub fn delivery_days(&self) -> &[String] {
        &self.attributes.delivery_days
    }

    pub fn set_delivery_method(&mut self, delivery_method: impl Into<String>) -> &mut Self {
        self.attributes.delivery_method = Some(delivery_method.into());
        self
    }

    pub fn delivery_method(&self) -> Option<&str> {
        self.attributes.delivery_method.as_deref()
    }

    pub fn set_carrier(&mut self, carrier: Carrier) -> &mut Self {
        self.relationships.carrier.set(carrier);
        self
    }

    pub fn carrier(&self) -> Option<&Carrier> {
        self.relationships.carrier.get()
    }

    pub fn set_region_from(&mut self, region: Region) -> &mut Self {
        self.relationships.region_from.set(region);
        self
    }

    pub fn region_from(&self) -> Option<&Region> {
        self.relationships.region_from.get()
    }

    pub fn set_region_to(&mut self, region: Region) -> &mut Self {
        self.relationships.region_to.set(region);
        self
    }

    pub fn region_to(&self) -> Option<&Region> {
        self.relationships.region_to.get()
    }

    pub fn set_service_contracts(&mut self, contracts: Vec<ServiceContract>) -> &mut Self {
        self.relationships.service_contracts.clear();
        for contract in contracts {
            self.add_service_contract(contract);
        }
        self
    }

    pub fn add_service_contract(&mut self, contract: ServiceContract) -> &mut Self {
        self.relationships.service_contracts.push(contract);
        self
    }

    pub fn service_contracts(&self) -> &[ServiceContract] {
        self.relationships.service_contracts.as_slice()
    }
}
