//! Resource Registry - the closed set of resource type tags
//!
//! Every concrete resource carries exactly one of these tags as its `type`
//! member. The tag is fixed by the Rust type and can never be reassigned.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire `type` tag of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "carriers")]
    Carriers,
    #[serde(rename = "contracts")]
    Contracts,
    #[serde(rename = "files")]
    Files,
    #[serde(rename = "pudo-locations")]
    PudoLocations,
    #[serde(rename = "regions")]
    Regions,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "service-contracts")]
    ServiceContracts,
    #[serde(rename = "service-groups")]
    ServiceGroups,
    #[serde(rename = "service-options")]
    ServiceOptions,
    #[serde(rename = "service-option-prices")]
    ServiceOptionPrices,
    #[serde(rename = "shipments")]
    Shipments,
    #[serde(rename = "shipment-statuses")]
    ShipmentStatuses,
    #[serde(rename = "shops")]
    Shops,
    #[serde(rename = "statuses")]
    Statuses,
}

impl ResourceType {
    /// All known resource types, in tag order
    pub const ALL: [ResourceType; 14] = [
        ResourceType::Carriers,
        ResourceType::Contracts,
        ResourceType::Files,
        ResourceType::PudoLocations,
        ResourceType::Regions,
        ResourceType::Services,
        ResourceType::ServiceContracts,
        ResourceType::ServiceGroups,
        ResourceType::ServiceOptions,
        ResourceType::ServiceOptionPrices,
        ResourceType::Shipments,
        ResourceType::ShipmentStatuses,
        ResourceType::Shops,
        ResourceType::Statuses,
    ];

    /// The tag as it appears on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceType::Carriers => "carriers",
            ResourceType::Contracts => "contracts",
            ResourceType::Files => "files",
            ResourceType::PudoLocations => "pudo-locations",
            ResourceType::Regions => "regions",
            ResourceType::Services => "services",
            ResourceType::ServiceContracts => "service-contracts",
            ResourceType::ServiceGroups => "service-groups",
            ResourceType::ServiceOptions => "service-options",
            ResourceType::ServiceOptionPrices => "service-option-prices",
            ResourceType::Shipments => "shipments",
            ResourceType::ShipmentStatuses => "shipment-statuses",
            ResourceType::Shops => "shops",
            ResourceType::Statuses => "statuses",
        }
    }

    /// Human readable name, used by the CLI
    pub const fn display_name(self) -> &'static str {
        match self {
            ResourceType::Carriers => "Carriers",
            ResourceType::Contracts => "Contracts",
            ResourceType::Files => "Files",
            ResourceType::PudoLocations => "Pick-up/Drop-off Locations",
            ResourceType::Regions => "Regions",
            ResourceType::Services => "Services",
            ResourceType::ServiceContracts => "Service Contracts",
            ResourceType::ServiceGroups => "Service Groups",
            ResourceType::ServiceOptions => "Service Options",
            ResourceType::ServiceOptionPrices => "Service Option Prices",
            ResourceType::Shipments => "Shipments",
            ResourceType::ShipmentStatuses => "Shipment Statuses",
            ResourceType::Shops => "Shops",
            ResourceType::Statuses => "Statuses",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = anyhow::Error;

    fn from_str(tag: &str) -> Result<Self> {
        get_resource_type(tag).ok_or_else(|| anyhow!("Unknown resource type: {}", tag))
    }
}

/// Look up a resource type by its wire tag
pub fn get_resource_type(tag: &str) -> Option<ResourceType> {
    ResourceType::ALL.into_iter().find(|t| t.as_str() == tag)
}

/// Get all resource tags (for listings)
pub fn get_all_resource_tags() -> Vec<&'static str> {
    ResourceType::ALL.iter().map(|t| t.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_round_trips() {
        for resource_type in ResourceType::ALL {
            let parsed: ResourceType = resource_type.as_str().parse().unwrap();
            assert_eq!(parsed, resource_type);
        }
    }

    #[test]
    fn test_serde_tag_matches_as_str() {
        for resource_type in ResourceType::ALL {
            let value = serde_json::to_value(resource_type).unwrap();
            assert_eq!(value, resource_type.as_str());
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "parcels".parse::<ResourceType>().unwrap_err();
        assert!(err.to_string().contains("parcels"));
        assert!(get_resource_type("").is_none());
    }

    #[test]
    fn test_get_all_resource_tags() {
        let tags = get_all_resource_tags();
        assert_eq!(tags.len(), ResourceType::ALL.len());
        assert!(tags.contains(&"shipments"), "Should contain shipments");
        assert!(tags.contains(&"pudo-locations"));
    }
}
