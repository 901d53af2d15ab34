//! SCIM protocol message envelopes (RFC 7644 §3).
//!
//! These are plain serde types, not shape-driven models: their layouts are
//! fixed by the protocol rather than by attribute metadata. Each carries its
//! `schemas` URN as a serde default so deserializing a bare body still yields
//! a well-formed message.

pub mod bulk;
pub mod error;
pub mod list_response;
pub mod patch_op;
pub mod search_request;

pub use bulk::{BulkOperation, BulkRequest, BulkResponse};
pub use error::{ErrorResponse, ScimType};
pub use list_response::ListResponse;
pub use patch_op::{PatchOp, PatchOperation, PatchOperationKind};
pub use search_request::{SearchRequest, SortOrder};

/// Message URNs for the RFC 7644 envelope set.
pub mod urns {
    pub const LIST_RESPONSE: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";
    pub const SEARCH_REQUEST: &str = "urn:ietf:params:scim:api:messages:2.0:SearchRequest";
    pub const PATCH_OP: &str = "urn:ietf:params:scim:api:messages:2.0:PatchOp";
    pub const BULK_REQUEST: &str = "urn:ietf:params:scim:api:messages:2.0:BulkRequest";
    pub const BULK_RESPONSE: &str = "urn:ietf:params:scim:api:messages:2.0:BulkResponse";
    pub const ERROR: &str = "urn:ietf:params:scim:api:messages:2.0:Error";
}
