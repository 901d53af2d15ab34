//! Generic model engine operating on annotated runtime shapes.
//!
//! A [`ModelShape`] describes a resource or complex attribute as an ordered list
//! of fields, each carrying the five RFC 7643 attribute characteristics. The
//! engine validates JSON payloads into [`ScimObject`] instances and dumps them
//! back to wire form, enforcing per-field characteristics according to the
//! active [`ScimContext`](crate::context::ScimContext).
//!
//! Statically-known resources (User, Group, ...) and models synthesized at
//! runtime from a `Schema` document both describe themselves through the same
//! shape interface, so validation, serialization and schema reflection share
//! one code path.

pub mod encoding;
pub mod engine;
pub mod filter;
pub mod object;
pub mod shape;

pub use filter::AttributeFilter;
pub use object::{ScimObject, StaticShape};
pub use shape::{FieldDescriptor, FieldKind, ModelShape, ModelShapeBuilder};
