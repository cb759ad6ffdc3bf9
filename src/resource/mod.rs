//! Resource abstraction layer
//!
//! This module holds the convention every concrete resource follows: how it
//! is identified, how it is written to the JSON-API wire format, and how it
//! is read back.
//!
//! # Architecture
//!
//! - [`registry`] - The closed set of resource type tags
//! - [`object`] - Wire objects and the attribute compaction rule
//! - [`relation`] - To-one and to-many relationship links
//! - [`contract`] - The [`Resource`] and [`FromObject`] traits
//!
//! # Wire format
//!
//! ```text
//! { id?, type, attributes?: {...}, relationships?: {name: {data: ref|[refs]|null}}, meta?: {...} }
//! ```
//!
//! Null attribute and meta values are left out. Declared relationships are
//! always written with a `data` member, and relationship targets are written
//! as `{id, type}` only.
//!
//! # Example
//!
//! ```ignore
//! use parcel_resources::prelude::*;
//!
//! let mut option = ServiceOption::default();
//! option.set_id("service-option-id").set_name("Sign on delivery");
//! let json = option.to_json();
//! ```

mod contract;
mod object;
mod registry;
mod relation;

pub(crate) use contract::impl_resource;
pub use contract::{FromObject, Resource};
pub use object::{
    compact, decode_part, encode_compacted, encode_relationships, ResourceObject, ResourceRef,
};
pub use registry::*;
pub use relation::{ToMany, ToOne};
