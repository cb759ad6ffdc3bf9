//! Wire Objects
//!
//! The JSON-API shape every resource serializes to, together with the
//! compaction rule applied to attributes and meta before they hit the wire.

use super::registry::ResourceType;
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{id, type}` linkage written for relationship targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl ResourceRef {
    pub fn new(resource_type: ResourceType, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            resource_type,
        }
    }
}

/// A single resource in wire form
///
/// `attributes` and `meta` are stored already compacted. `relationships` is
/// `None` only for resources that declare no relationships at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl ResourceObject {
    /// Create an empty object carrying only identity
    pub fn new(resource_type: ResourceType, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            resource_type,
            attributes: Map::new(),
            relationships: None,
            meta: Map::new(),
        }
    }

    /// The `{id, type}` linkage pointing at this object
    pub fn reference(&self) -> ResourceRef {
        ResourceRef::new(self.resource_type, self.id.as_deref())
    }

    /// Get a single attribute value
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get the `data` member of a relationship
    pub fn relationship_data(&self, name: &str) -> Option<&Value> {
        self.relationships.as_ref()?.get(name)?.get("data")
    }

    /// Fail unless this object carries the expected type tag
    pub fn expect_type(&self, expected: ResourceType) -> Result<()> {
        if self.resource_type != expected {
            bail!(
                "Expected resource of type {}, found {}",
                expected,
                self.resource_type
            );
        }
        Ok(())
    }

    /// Convert into a JSON value following the same omission rules as `Serialize`
    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        if let Some(id) = self.id {
            map.insert("id".to_string(), Value::String(id));
        }
        map.insert(
            "type".to_string(),
            Value::String(self.resource_type.as_str().to_string()),
        );
        if !self.attributes.is_empty() {
            map.insert("attributes".to_string(), Value::Object(self.attributes));
        }
        if let Some(relationships) = self.relationships {
            map.insert("relationships".to_string(), Value::Object(relationships));
        }
        if !self.meta.is_empty() {
            map.insert("meta".to_string(), Value::Object(self.meta));
        }
        Value::Object(map)
    }
}

/// Drop nulls, empty objects and empty arrays, recursively
///
/// Order of the remaining keys is kept. Elements of a non-empty array are
/// compacted but always kept, even when nothing is left of them.
pub fn compact(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| compact_value(value).map(|v| (key, v)))
        .collect()
}

fn compact_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let map = compact(map);
            (!map.is_empty()).then_some(Value::Object(map))
        }
        Value::Array(items) => {
            (!items.is_empty()).then(|| Value::Array(items.into_iter().map(compact_element).collect()))
        }
        other => Some(other),
    }
}

/// List elements are compacted inside but never removed, so positions hold
fn compact_element(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(compact(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(compact_element).collect()),
        other => other,
    }
}

/// Encode an attributes or meta struct into a compacted map
pub fn encode_compacted<T: Serialize>(part: &T) -> Map<String, Value> {
    encode_map(part).map(compact).unwrap_or_default()
}

/// Encode a relationships struct; every declared relationship is kept
pub fn encode_relationships<T: Serialize>(part: &T) -> Map<String, Value> {
    encode_map(part).unwrap_or_default()
}

fn encode_map<T: Serialize>(part: &T) -> Option<Map<String, Value>> {
    match serde_json::to_value(part) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            tracing::warn!("Resource part did not encode to an object: {}", other);
            None
        }
        Err(e) => {
            tracing::warn!("Failed to encode resource part: {}", e);
            None
        }
    }
}

/// Decode one part (attributes, relationships or meta) of a wire object
pub fn decode_part<T: DeserializeOwned>(part: &Map<String, Value>, name: &str) -> Result<T> {
    serde_json::from_value(Value::Object(part.clone()))
        .with_context(|| format!("Invalid resource {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_compact_drops_nulls_and_empties() {
        let compacted = compact(as_map(json!({
            "name": "Sign on delivery",
            "code": null,
            "price": {"amount": null, "currency": null},
            "items": [],
            "address": {"city": "Oslo", "company": null},
        })));

        assert_eq!(
            Value::Object(compacted),
            json!({"name": "Sign on delivery", "address": {"city": "Oslo"}})
        );
    }

    #[test]
    fn test_compact_keeps_every_list_element() {
        let compacted = compact(as_map(json!({
            "openingHours": [
                {"day": "Monday", "open": "08:00"},
                {"day": null, "open": null},
                {"day": "Wednesday", "closed": null},
            ],
        })));

        assert_eq!(
            Value::Object(compacted),
            json!({"openingHours": [
                {"day": "Monday", "open": "08:00"},
                {},
                {"day": "Wednesday"},
            ]})
        );
    }

    #[test]
    fn test_compact_keeps_falsy_scalars() {
        let compacted = compact(as_map(json!({
            "required": false,
            "amount": 0,
            "street_2": "",
        })));
        assert_eq!(compacted.len(), 3);
    }

    #[test]
    fn test_compact_preserves_key_order() {
        let compacted = compact(as_map(json!({
            "zeta": 1,
            "drop": null,
            "alpha": 2,
        })));
        let keys: Vec<&str> = compacted.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_into_value_omits_unassigned_parts() {
        let object = ResourceObject::new(ResourceType::Carriers, None);
        assert_eq!(object.into_value(), json!({"type": "carriers"}));
    }

    #[test]
    fn test_into_value_matches_serialize() {
        let mut object = ResourceObject::new(ResourceType::Shops, Some("shop-id"));
        object
            .attributes
            .insert("name".to_string(), json!("Parcel Shop"));
        object.relationships = Some(as_map(json!({"region": {"data": null}})));

        let serialized = serde_json::to_value(&object).unwrap();
        assert_eq!(object.into_value(), serialized);
    }

    #[test]
    fn test_relationship_data_lookup() {
        let object: ResourceObject = serde_json::from_value(json!({
            "id": "shipment-id",
            "type": "shipments",
            "relationships": {
                "shop": {"data": {"id": "shop-id", "type": "shops"}},
            },
        }))
        .unwrap();

        assert_eq!(
            object.relationship_data("shop"),
            Some(&json!({"id": "shop-id", "type": "shops"}))
        );
        assert!(object.relationship_data("contract").is_none());
    }

    #[test]
    fn test_expect_type() {
        let object = ResourceObject::new(ResourceType::Files, Some("file-id"));
        assert!(object.expect_type(ResourceType::Files).is_ok());

        let err = object.expect_type(ResourceType::Shops).unwrap_err();
        assert!(err.to_string().contains("shops"));
    }
}
