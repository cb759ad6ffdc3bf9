//! Resource Contract
//!
//! The base capability shared by every resource: an optional server-assigned
//! id, an immutable type tag, and an encoding into a [`ResourceObject`].

use super::object::{ResourceObject, ResourceRef};
use super::registry::ResourceType;
use anyhow::Result;
use serde_json::Value;

/// A server-identified domain entity
pub trait Resource {
    /// Type tag shared by every instance
    const TYPE: ResourceType;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: impl Into<String>) -> &mut Self;

    fn resource_type(&self) -> ResourceType {
        Self::TYPE
    }

    /// The `{id, type}` pair other resources use to point at this one
    fn reference(&self) -> ResourceRef {
        ResourceRef::new(Self::TYPE, self.id())
    }

    /// Encode the full wire object
    fn to_object(&self) -> ResourceObject;

    fn to_json(&self) -> Value {
        self.to_object().into_value()
    }
}

/// Rebuild a resource from its wire object
pub trait FromObject: Sized {
    fn from_object(object: ResourceObject) -> Result<Self>;
}

/// Implement [`Resource`], [`FromObject`] and serde for a resource struct.
///
/// The struct must have `id: Option<String>` and `attributes` fields, plus the
/// optional `relationships` and `meta` fields named in the invocation, and
/// must implement `Default`.
macro_rules! impl_resource {
    (
        $resource:ident => $kind:ident {
            attributes: $attributes:ty
            $(, relationships: $relationships:ty)?
            $(, meta: $meta:ty)?
            $(,)?
        }
    ) => {
        impl $crate::resource::Resource for $resource {
            const TYPE: $crate::resource::ResourceType = $crate::resource::ResourceType::$kind;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
                self.id = Some(id.into());
                self
            }

            fn to_object(&self) -> $crate::resource::ResourceObject {
                let mut object = $crate::resource::ResourceObject::new(
                    <Self as $crate::resource::Resource>::TYPE,
                    self.id.as_deref(),
                );
                object.attributes =
                    $crate::resource::encode_compacted::<$attributes>(&self.attributes);
                $(
                    object.relationships = Some(
                        $crate::resource::encode_relationships::<$relationships>(&self.relationships),
                    );
                )?
                $(
                    object.meta = $crate::resource::encode_compacted::<$meta>(&self.meta);
                )?
                object
            }
        }

        impl $crate::resource::FromObject for $resource {
            fn from_object(object: $crate::resource::ResourceObject) -> ::anyhow::Result<Self> {
                object.expect_type(<Self as $crate::resource::Resource>::TYPE)?;
                ::tracing::debug!("Hydrating {} {:?}", object.resource_type, object.id);

                let mut resource = Self::default();
                resource.attributes =
                    $crate::resource::decode_part::<$attributes>(&object.attributes, "attributes")?;
                $(
                    resource.relationships = $crate::resource::decode_part::<$relationships>(
                        object.relationships.as_ref().unwrap_or(&::serde_json::Map::new()),
                        "relationships",
                    )?;
                )?
                $(
                    resource.meta = $crate::resource::decode_part::<$meta>(&object.meta, "meta")?;
                )?
                resource.id = object.id;
                Ok(resource)
            }
        }

        impl ::serde::Serialize for $resource {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                let object = $crate::resource::Resource::to_object(self);
                ::serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $resource {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let object =
                    <$crate::resource::ResourceObject as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::resource::FromObject>::from_object(object)
                    .map_err(|e| <D::Error as ::serde::de::Error>::custom(format!("{:#}", e)))
            }
        }
    };
}

pub(crate) use impl_resource;
