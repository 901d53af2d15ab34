//! Validated model instances and the static-shape contract.
//!
//! A [`ScimObject`] is the result of validating a JSON payload against a
//! [`ModelShape`]: an immutable value object holding normalized values keyed by
//! declared field name, plus one nested object per populated extension, keyed
//! by the extension's schema URN. Assignment through [`ScimObject::set`] re-runs
//! the name and type checks that apply at construction.

use crate::error::{ScimError, ScimResult, ValidationErrors};
use crate::model::engine;
use crate::model::shape::ModelShape;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Ties a compile-time marker type to its runtime shape.
///
/// The fixed resource set (User, Group, EnterpriseUser, ...) implements this
/// trait with `LazyLock`-built shapes, so compile-time types and schema-
/// synthesized shapes flow through the same engine. The marker type doubles as
/// the lookup key for extension access.
pub trait StaticShape {
    /// The shape describing this model. Built once and shared.
    fn shape() -> Arc<ModelShape>;

    /// The model's primary schema URN.
    fn schema_urn() -> String {
        Self::shape()
            .schema_urn
            .clone()
            .unwrap_or_default()
    }
}

/// A validated instance of a model shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ScimObject {
    shape: Arc<ModelShape>,
    /// Normalized values keyed by declared field name; nulls are never stored
    values: Map<String, Value>,
    /// Populated extension payloads keyed by lowercase schema URN
    extensions: HashMap<String, ScimObject>,
}

impl ScimObject {
    pub(crate) fn new(
        shape: Arc<ModelShape>,
        values: Map<String, Value>,
        extensions: HashMap<String, ScimObject>,
    ) -> Self {
        Self {
            shape,
            values,
            extensions,
        }
    }

    /// An empty instance of the shape.
    pub fn empty(shape: Arc<ModelShape>) -> Self {
        Self {
            shape,
            values: Map::new(),
            extensions: HashMap::new(),
        }
    }

    pub fn shape(&self) -> &Arc<ModelShape> {
        &self.shape
    }

    /// Get a field value by name (case-insensitive, wire or declared spelling).
    pub fn get(&self, name: &str) -> Option<&Value> {
        let field = self.shape.find_field(name)?;
        self.values.get(&field.name)
    }

    /// Get a field's string value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Assign a field value, re-running the name and type checks that apply at
    /// construction. `Null` removes the value.
    pub fn set(&mut self, name: &str, value: Value) -> ScimResult<()> {
        let field = self
            .shape
            .find_field(name)
            .ok_or_else(|| {
                ScimError::from(crate::error::ValidationError::unknown_attribute(
                    name,
                    self.shape.name.clone(),
                ))
            })?
            .clone();
        if value.is_null() {
            self.values.remove(&field.name);
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        let normalized = engine::normalize_field_value(&field, value, None, &mut errors);
        let normalized = errors.into_result(normalized)?;
        if let Some(normalized) = normalized {
            self.values.insert(field.name.clone(), normalized);
        }
        Ok(())
    }

    /// Values keyed by declared field name.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// The extension payload for the given extension type, if populated.
    ///
    /// Fails with [`ScimError::ExtensionKey`] when the type is not registered
    /// on this object's shape.
    pub fn extension<E: StaticShape>(&self) -> ScimResult<Option<&ScimObject>> {
        let urn = E::schema_urn();
        if self.shape.find_extension(&urn).is_none() {
            return Err(ScimError::extension_key(
                self.shape.name.clone(),
                E::shape().name.clone(),
            ));
        }
        Ok(self.extensions.get(&urn.to_ascii_lowercase()))
    }

    /// Attach or replace the extension payload for the given extension type.
    pub fn set_extension<E: StaticShape>(&mut self, payload: ScimObject) -> ScimResult<()> {
        let urn = E::schema_urn();
        if self.shape.find_extension(&urn).is_none() {
            return Err(ScimError::extension_key(
                self.shape.name.clone(),
                E::shape().name.clone(),
            ));
        }
        self.extensions.insert(urn.to_ascii_lowercase(), payload);
        Ok(())
    }

    /// The extension payload under the given schema URN, if populated.
    pub fn extension_by_urn(&self, urn: &str) -> Option<&ScimObject> {
        self.extensions.get(&urn.to_ascii_lowercase())
    }

    pub(crate) fn extensions(&self) -> &HashMap<String, ScimObject> {
        &self.extensions
    }
}
