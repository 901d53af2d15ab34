//! SCIM validation and serialization contexts.
//!
//! A context identifies which SCIM protocol exchange a value is being validated
//! into or dumped from. The engine uses it to decide which attribute
//! characteristics to enforce; see RFC 7644 §3.3–§3.5.
//!
//! The absent-context case is expressed as `Option<ScimContext>` = `None`: like
//! [`ScimContext::Default`] it disables all context-driven enforcement, and it
//! additionally disables wire-name aliasing on serialization, which is useful
//! for diagnostic dumps.

use serde::{Deserialize, Serialize};

/// The SCIM protocol exchange a validation or dump call is operating in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScimContext {
    /// No context-driven enforcement; full read/write
    #[default]
    Default,
    /// Resource creation request (POST body)
    ResourceCreationRequest,
    /// Resource creation response
    ResourceCreationResponse,
    /// Resource query request (GET)
    ResourceQueryRequest,
    /// Resource query response
    ResourceQueryResponse,
    /// Resource replacement request (PUT body)
    ResourceReplacementRequest,
    /// Resource replacement response
    ResourceReplacementResponse,
    /// Search request (POST /.search body)
    SearchRequest,
    /// Search response
    SearchResponse,
}

impl ScimContext {
    /// True for the four request-side contexts.
    pub fn is_request(self) -> bool {
        matches!(
            self,
            Self::ResourceCreationRequest
                | Self::ResourceQueryRequest
                | Self::ResourceReplacementRequest
                | Self::SearchRequest
        )
    }

    /// True for the four resource response contexts and the search response.
    pub fn is_response(self) -> bool {
        matches!(
            self,
            Self::ResourceCreationResponse
                | Self::ResourceQueryResponse
                | Self::ResourceReplacementResponse
                | Self::SearchResponse
        )
    }

    /// True for contexts where clients supply new or replacement resource state.
    pub fn is_mutation_request(self) -> bool {
        matches!(
            self,
            Self::ResourceCreationRequest | Self::ResourceReplacementRequest
        )
    }

    /// True for contexts where clients only read.
    pub fn is_read_request(self) -> bool {
        matches!(self, Self::ResourceQueryRequest | Self::SearchRequest)
    }
}
