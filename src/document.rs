//! Document envelope
//!
//! Request and response bodies wrap resources in `{"data": ...}`, holding a
//! single object or a list of them. Compound documents may also carry an
//! `included` list of related objects.

use crate::resource::{Resource, ResourceObject};
use crate::resources::AnyResource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primary data: nothing, one resource object, or a list
///
/// `Null` is an empty to-one answer such as `{"data": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Null,
    One(ResourceObject),
    Many(Vec<ResourceObject>),
}

impl PrimaryData {
    pub fn len(&self) -> usize {
        match self {
            PrimaryData::Null => 0,
            PrimaryData::One(_) => 1,
            PrimaryData::Many(objects) => objects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A JSON-API document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: PrimaryData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
}

impl Document {
    /// Document with null primary data
    pub fn empty() -> Self {
        Self {
            data: PrimaryData::Null,
            included: Vec::new(),
        }
    }

    /// Wrap a single resource for sending
    pub fn single<R: Resource>(resource: &R) -> Self {
        Self {
            data: PrimaryData::One(resource.to_object()),
            included: Vec::new(),
        }
    }

    /// Wrap a list of resources for sending
    pub fn collection<'a, R, I>(resources: I) -> Self
    where
        R: Resource + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        Self {
            data: PrimaryData::Many(resources.into_iter().map(Resource::to_object).collect()),
            included: Vec::new(),
        }
    }

    /// Wrap already hydrated resources of mixed types
    pub fn from_resources(resources: &[AnyResource]) -> Self {
        Self {
            data: PrimaryData::Many(resources.iter().map(AnyResource::to_object).collect()),
            included: Vec::new(),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("Invalid JSON-API document")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid JSON-API document")
    }

    /// Primary data objects in document order
    pub fn objects(&self) -> &[ResourceObject] {
        match &self.data {
            PrimaryData::Null => &[],
            PrimaryData::One(object) => std::slice::from_ref(object),
            PrimaryData::Many(objects) => objects,
        }
    }

    /// Hydrate the primary data, stopping at the first invalid object
    pub fn resources(&self) -> Result<Vec<AnyResource>> {
        self.objects()
            .iter()
            .enumerate()
            .map(|(index, object)| {
                AnyResource::from_object(object.clone())
                    .with_context(|| format!("Invalid resource at index {}", index))
            })
            .collect()
    }

    /// Hydrate the `included` objects
    pub fn included_resources(&self) -> Result<Vec<AnyResource>> {
        self.included
            .iter()
            .enumerate()
            .map(|(index, object)| {
                AnyResource::from_object(object.clone())
                    .with_context(|| format!("Invalid included resource at index {}", index))
            })
            .collect()
    }

    /// Re-encode every object through its typed resource
    ///
    /// Unknown members are dropped and attributes are compacted again, so
    /// the output is what this crate would have sent itself.
    pub fn normalized(&self) -> Result<Self> {
        let data = match &self.data {
            PrimaryData::Null => PrimaryData::Null,
            PrimaryData::One(object) => {
                PrimaryData::One(AnyResource::from_object(object.clone())?.to_object())
            }
            PrimaryData::Many(_) => PrimaryData::Many(
                self.resources()?
                    .iter()
                    .map(AnyResource::to_object)
                    .collect(),
            ),
        };
        let included = self
            .included_resources()?
            .iter()
            .map(AnyResource::to_object)
            .collect();
        Ok(Self { data, included })
    }

    /// Encode as a JSON value with the same omission rules as the resources
    pub fn into_value(self) -> Value {
        let mut map = serde_json::Map::new();
        let data = match self.data {
            PrimaryData::Null => Value::Null,
            PrimaryData::One(object) => object.into_value(),
            PrimaryData::Many(objects) => {
                Value::Array(objects.into_iter().map(ResourceObject::into_value).collect())
            }
        };
        map.insert("data".to_string(), data);
        if !self.included.is_empty() {
            map.insert(
                "included".to_string(),
                Value::Array(self.included.into_iter().map(ResourceObject::into_value).collect()),
            );
        }
        Value::Object(map)
    }
}
