//! Relationship Links
//!
//! [`ToOne`] and [`ToMany`] own their target resources, but on the wire they
//! only ever write the targets' `{id, type}` linkage, wrapped in a `data`
//! member that is present even when the link is empty.

use super::contract::Resource;
use super::object::ResourceRef;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::slice;

/// Link to at most one related resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToOne<T>(Option<Box<T>>);

impl<T> ToOne<T> {
    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_deref_mut()
    }

    pub fn set(&mut self, target: T) {
        self.0 = Some(Box::new(target));
    }

    pub fn take(&mut self) -> Option<T> {
        self.0.take().map(|target| *target)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<T: Resource> ToOne<T> {
    /// Linkage written for this relationship
    pub fn linkage(&self) -> Option<ResourceRef> {
        self.get().map(Resource::reference)
    }
}

impl<T> Default for ToOne<T> {
    fn default() -> Self {
        Self(None)
    }
}

/// Ordered links to related resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToMany<T>(Vec<T>);

impl<T> ToMany<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn push(&mut self, target: T) {
        self.0.push(target);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Resource> ToMany<T> {
    pub fn linkage(&self) -> Vec<ResourceRef> {
        self.0.iter().map(Resource::reference).collect()
    }
}

impl<T> Default for ToMany<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'a, T> IntoIterator for &'a ToMany<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Resource> Serialize for ToOne<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Relationship", 1)?;
        state.serialize_field("data", &self.linkage())?;
        state.end()
    }
}

impl<T: Resource> Serialize for ToMany<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Relationship", 1)?;
        state.serialize_field("data", &self.linkage())?;
        state.end()
    }
}

/// Incoming `{data: ...}` wrapper; a missing `data` reads as empty
#[derive(Deserialize)]
struct Linkage<D> {
    #[serde(default = "Option::default")]
    data: Option<D>,
}

impl<'de, T: Resource + Default> Deserialize<'de> for ToOne<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let linkage = Linkage::<ResourceRef>::deserialize(deserializer)?;
        let target = linkage.data.map(placeholder::<T, D::Error>).transpose()?;
        Ok(Self(target.map(Box::new)))
    }
}

impl<'de, T: Resource + Default> Deserialize<'de> for ToMany<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let linkage = Linkage::<Vec<ResourceRef>>::deserialize(deserializer)?;
        let targets = linkage
            .data
            .unwrap_or_default()
            .into_iter()
            .map(placeholder::<T, D::Error>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(targets))
    }
}

/// Build an empty target resource that carries only the linked id
fn placeholder<T: Resource + Default, E: de::Error>(reference: ResourceRef) -> Result<T, E> {
    if reference.resource_type != T::TYPE {
        return Err(E::custom(format!(
            "expected relationship to {}, found {}",
            T::TYPE,
            reference.resource_type
        )));
    }

    let mut target = T::default();
    if let Some(id) = reference.id {
        target.set_id(id);
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{File, Shop};
    use serde_json::json;

    #[test]
    fn test_empty_to_one_writes_null_data() {
        let link: ToOne<Shop> = ToOne::default();
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({"data": null}));
    }

    #[test]
    fn test_empty_to_many_writes_empty_data() {
        let link: ToMany<File> = ToMany::default();
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({"data": []}));
    }

    #[test]
    fn test_to_one_writes_reference_only() {
        let mut shop = Shop::default();
        shop.set_id("shop-id").set_name("Parcel Shop");

        let mut link = ToOne::default();
        link.set(shop);

        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"data": {"id": "shop-id", "type": "shops"}})
        );
    }

    #[test]
    fn test_to_one_reads_placeholder() {
        let link: ToOne<Shop> =
            serde_json::from_value(json!({"data": {"id": "shop-id", "type": "shops"}})).unwrap();

        let shop = link.get().unwrap();
        assert_eq!(shop.id(), Some("shop-id"));
        assert!(shop.name().is_none());
    }

    #[test]
    fn test_to_one_rejects_wrong_type() {
        let result: Result<ToOne<Shop>, _> =
            serde_json::from_value(json!({"data": {"id": "x", "type": "files"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_to_many_reads_null_and_missing_data() {
        let link: ToMany<File> = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(link.is_empty());

        let link: ToMany<File> = serde_json::from_value(json!({})).unwrap();
        assert!(link.is_empty());
    }

    #[test]
    fn test_to_many_keeps_order() {
        let link: ToMany<File> = serde_json::from_value(json!({"data": [
            {"id": "b", "type": "files"},
            {"id": "a", "type": "files"},
        ]}))
        .unwrap();

        let ids: Vec<_> = link.iter().filter_map(|f| f.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
