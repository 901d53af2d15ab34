//! SCIM schema documents and bidirectional schema reflection.
//!
//! [`types`] reifies RFC 7643 §7 `Schema`/`Attribute` documents as serde
//! structs; [`reflection`] maps between those documents and runtime
//! [`ModelShape`](crate::model::ModelShape)s in both directions.

pub mod reflection;
pub mod types;

pub use reflection::{from_schema, to_schema};
pub use types::{Attribute, AttributeType, Schema};
