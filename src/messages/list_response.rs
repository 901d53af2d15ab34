//! The ListResponse envelope returned by query and search operations.

use crate::error::ScimResult;
use crate::model::object::ScimObject;
use crate::registry::SchemaRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::urns;

/// Paged collection of resources (RFC 7644 §3.4.2).
///
/// `resources` holds raw payloads; [`ListResponse::validated_resources`]
/// resolves each against a registry when typed access is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
    pub total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,
    #[serde(rename = "Resources", default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Value>,
}

fn default_schemas() -> Vec<String> {
    vec![urns::LIST_RESPONSE.to_string()]
}

impl ListResponse {
    /// An empty page reporting the given total.
    pub fn empty(total_results: u64) -> Self {
        Self {
            schemas: default_schemas(),
            total_results,
            items_per_page: None,
            start_index: None,
            resources: Vec::new(),
        }
    }

    /// A page of raw resource payloads.
    pub fn of(resources: Vec<Value>, total_results: u64, start_index: u64) -> Self {
        Self {
            schemas: default_schemas(),
            total_results,
            items_per_page: Some(resources.len() as u64),
            start_index: Some(start_index),
            resources,
        }
    }

    /// Validate each carried payload against its shape, resolved through the
    /// registry via each payload's `schemas[0]`.
    pub fn validated_resources(&self, registry: &SchemaRegistry) -> ScimResult<Vec<ScimObject>> {
        self.resources
            .iter()
            .map(|payload| {
                let shape = registry.get_by_payload(payload)?;
                crate::model::engine::validate(&shape, payload, None, None)
            })
            .collect()
    }
}
