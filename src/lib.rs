//! # SCIM Model
//!
//! A data-modeling library for SCIM 2.0 (RFC 7643/7644) resources. Every model
//! is described by runtime attribute metadata (a [`ModelShape`] of
//! [`FieldDescriptor`]s), and a single engine drives validation, context-aware
//! serialization, schema reflection and attribute URN resolution off that
//! metadata. The fixed resource set (User, Group, EnterpriseUser, Schema,
//! ResourceType, ServiceProviderConfig) ships as pre-built shapes; shapes
//! synthesized from `Schema` documents at runtime flow through the same engine.
//!
//! ## Validation and context enforcement
//!
//! [`validate`] checks a JSON payload against a shape and yields a
//! [`ScimObject`]. Passing a [`ScimContext`] additionally enforces the
//! mutability and returnability rules that apply at that point in a resource's
//! lifecycle:
//!
//! ```
//! use scim_model::resources::User;
//! use scim_model::{ScimContext, StaticShape, validate};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
//!     "userName": "bjensen",
//!     "password": "t1meMa$heen"
//! });
//! let user = validate(
//!     &User::shape(),
//!     &payload,
//!     Some(ScimContext::ResourceCreationRequest),
//!     None,
//! )?;
//! assert_eq!(user.get_str("userName"), Some("bjensen"));
//!
//! // password is writeOnly and never returned: accepted above, withheld here
//! let body = user.dump(Some(ScimContext::ResourceCreationResponse), None, None)?;
//! assert!(body.get("password").is_none());
//! # Ok::<(), scim_model::ScimError>(())
//! ```
//!
//! ## Schema reflection
//!
//! [`to_schema`] renders any shape as an RFC 7643 `Schema` document for a
//! `/Schemas` endpoint; [`from_schema`] synthesizes a working shape from a
//! `Schema` document discovered at runtime, so foreign resource types can be
//! validated and serialized without compile-time definitions.
//!
//! ## Extensions
//!
//! Schema extensions are shapes without envelope attributes, composed onto a
//! resource shape with [`ModelShape::extended`]. On the wire an extension's
//! attributes nest under its URN and the URN joins the resource's `schemas`
//! list; in code they are reached through
//! [`ScimObject::extension`] keyed by marker type.

pub mod characteristics;
pub mod context;
pub mod error;
pub mod messages;
pub mod model;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod urn;

pub use characteristics::{
    AttributeCharacteristics, CaseExact, Mutability, Required, Returned, Uniqueness,
};
pub use context::ScimContext;
pub use error::{ScimError, ScimResult, UrnError, ValidationError, ValidationErrors};
pub use model::engine::validate;
pub use model::{
    AttributeFilter, FieldDescriptor, FieldKind, ModelShape, ModelShapeBuilder, ScimObject,
    StaticShape,
};
pub use registry::SchemaRegistry;
pub use schema::{from_schema, to_schema, Attribute, AttributeType, Schema};
pub use urn::validate_attribute_urn;
