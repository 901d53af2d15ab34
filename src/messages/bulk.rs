//! The bulk request and response envelopes (RFC 7644 §3.7).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::status_string;
use super::urns;

/// One operation within a bulk request or response.
///
/// Request operations carry `method`, `path` and usually `data`; response
/// operations carry `status` and, on failure, an Error body in `response`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperation {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(
        default,
        with = "status_string::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// A bulk request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    #[serde(default = "request_schemas")]
    pub schemas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_errors: Option<u32>,
    #[serde(rename = "Operations")]
    pub operations: Vec<BulkOperation>,
}

/// A bulk response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkResponse {
    #[serde(default = "response_schemas")]
    pub schemas: Vec<String>,
    #[serde(rename = "Operations")]
    pub operations: Vec<BulkOperation>,
}

fn request_schemas() -> Vec<String> {
    vec![urns::BULK_REQUEST.to_string()]
}

fn response_schemas() -> Vec<String> {
    vec![urns::BULK_RESPONSE.to_string()]
}
