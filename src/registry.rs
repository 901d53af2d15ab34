//! Registry resolving schema URNs and payloads to model shapes.
//!
//! The registry owns the candidate shapes for a deployment: the fixed resource
//! set by default, plus any shapes synthesized from `Schema` documents at load
//! time. Resolution by URN is case-insensitive and optionally searches each
//! candidate's registered extensions; resolution by payload reads `schemas[0]`.

use crate::error::{ScimError, ScimResult, ValidationError};
use crate::model::object::StaticShape;
use crate::model::shape::ModelShape;
use crate::resources::{
    EnterpriseUser, Group, ResourceType, SchemaResource, ServiceProviderConfig, User,
};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Registry of resource shapes with URN- and payload-based lookup.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    shapes: Vec<Arc<ModelShape>>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with the fixed resource set; the User shape is
    /// composed with the EnterpriseUser extension.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.add_shape(User::shape().extended(EnterpriseUser::shape()));
        registry.add_shape(Group::shape());
        registry.add_shape(SchemaResource::shape());
        registry.add_shape(ResourceType::shape());
        registry.add_shape(ServiceProviderConfig::shape());
        registry
    }

    /// Register a shape. Replaces any previous shape with the same URN.
    pub fn add_shape(&mut self, shape: Arc<ModelShape>) {
        if let Some(urn) = shape.schema_urn.as_deref() {
            self.shapes.retain(|existing| {
                existing
                    .schema_urn
                    .as_deref()
                    .is_none_or(|candidate| !candidate.eq_ignore_ascii_case(urn))
            });
        }
        debug!("registering shape '{}'", shape.name);
        self.shapes.push(shape);
    }

    /// All registered shapes, in registration order.
    pub fn shapes(&self) -> &[Arc<ModelShape>] {
        &self.shapes
    }

    /// Resolve a schema URN to a shape, optionally searching each candidate's
    /// registered extensions. Matching is case-insensitive.
    pub fn get_by_schema(&self, urn: &str, with_extensions: bool) -> Option<Arc<ModelShape>> {
        for shape in &self.shapes {
            if shape
                .schema_urn
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(urn))
            {
                return Some(shape.clone());
            }
            if with_extensions {
                if let Some(extension) = shape.find_extension(urn) {
                    return Some(extension.clone());
                }
            }
        }
        None
    }

    /// Resolve a raw payload to its resource shape via `schemas[0]`.
    pub fn get_by_payload(&self, payload: &Value) -> ScimResult<Arc<ModelShape>> {
        let schemas = payload
            .get("schemas")
            .and_then(Value::as_array)
            .ok_or(ValidationError::MissingSchemas)?;
        let primary = schemas
            .first()
            .and_then(Value::as_str)
            .ok_or(ValidationError::EmptySchemas)?;
        self.get_by_schema(primary, false)
            .ok_or_else(|| ScimError::invalid_schema(format!("unknown schema '{primary}'")))
    }

    /// The extension URN to extension shape mapping for a composed shape.
    pub fn get_extension_models(shape: &ModelShape) -> Vec<(String, Arc<ModelShape>)> {
        shape
            .extension_models()
            .into_iter()
            .map(|(urn, extension)| (urn.to_string(), extension.clone()))
            .collect()
    }
}
