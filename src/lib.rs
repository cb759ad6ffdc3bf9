//! Typed JSON-API resources for a parcel shipping API
//!
//! Shipments, services, contracts, pick-up points and the rest of the API's
//! resources as plain Rust values. Each one knows its wire `type`, can be
//! written to the JSON-API object form, and can be rebuilt from it.
//!
//! # Architecture
//!
//! - [`resource`] - The resource contract, wire objects, relationship links
//! - [`resources`] - The concrete resource types
//! - [`values`] - Value objects nested in attributes (addresses, money, ...)
//! - [`document`] - The `{"data": ...}` envelope
//!
//! # Example
//!
//! ```
//! use parcel_resources::prelude::*;
//!
//! let mut option = ServiceOption::default();
//! option.set_id("service-option-id").set_name("Sign on delivery");
//!
//! let json = option.to_json();
//! assert_eq!(json["type"], "service-options");
//! assert_eq!(json["attributes"]["name"], "Sign on delivery");
//! ```

pub mod document;
pub mod resource;
pub mod resources;
pub mod values;

/// Commonly used types and traits
pub mod prelude {
    pub use crate::document::{Document, PrimaryData};
    pub use crate::resource::{FromObject, Resource, ResourceObject, ResourceRef, ResourceType};
    pub use crate::resources::*;
    pub use crate::values::*;
}
