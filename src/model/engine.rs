//! Context-driven validation and serialization over model shapes.
//!
//! [`validate`] turns a JSON payload into a [`ScimObject`], binding attribute
//! names case-insensitively, enforcing the mutability/returnability/required
//! characteristics that apply in the active context, and collecting all
//! attribute-level failures before raising. [`ScimObject::dump`] is the inverse
//! direction: it emits the wire representation, omitting fields the context or
//! the attribute filters disqualify.

use crate::characteristics::{Mutability, Returned};
use crate::context::ScimContext;
use crate::error::{ScimResult, ValidationError, ValidationErrors};
use crate::model::encoding;
use crate::model::filter::AttributeFilter;
use crate::model::object::ScimObject;
use crate::model::shape::{FieldDescriptor, FieldKind, ModelShape};
use chrono::{DateTime, FixedOffset};
use log::{debug, trace};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Validate a payload against a shape in the given context.
///
/// `original` is the currently stored resource and is consulted for the
/// immutability comparison in [`ScimContext::ResourceReplacementRequest`];
/// it is required in that context whenever an immutable field is populated.
///
/// All field-level violations for the call are collected and surfaced as one
/// [`ValidationErrors`] aggregate.
pub fn validate(
    shape: &Arc<ModelShape>,
    payload: &Value,
    context: Option<ScimContext>,
    original: Option<&ScimObject>,
) -> ScimResult<ScimObject> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationError::invalid_type(
            shape.name.clone(),
            "object",
            value_type_name(payload),
        )
        .into());
    };
    debug!(
        "validating payload against shape '{}' in context {:?}",
        shape.name, context
    );

    let mut errors = ValidationErrors::new();
    let (values, extensions) = validate_object(
        shape,
        obj,
        context,
        original.map(|o| o.values()),
        original.map(|o| o.extensions()),
        &mut errors,
    );
    errors.into_result(ScimObject::new(shape.clone(), values, extensions))
}

fn validate_object(
    shape: &Arc<ModelShape>,
    obj: &Map<String, Value>,
    context: Option<ScimContext>,
    original_values: Option<&Map<String, Value>>,
    original_extensions: Option<&HashMap<String, ScimObject>>,
    errors: &mut ValidationErrors,
) -> (Map<String, Value>, HashMap<String, ScimObject>) {
    let mut bound: Map<String, Value> = Map::new();
    let mut extensions: HashMap<String, ScimObject> = HashMap::new();

    // Bind payload keys to declared fields; URN-qualified keys address extensions.
    for (key, value) in obj {
        if key.contains(':') {
            let Some(extension_shape) = shape.find_extension(key).cloned() else {
                errors.push(ValidationError::unknown_attribute(key, shape.name.clone()));
                continue;
            };
            if value.is_null() {
                continue;
            }
            let Some(extension_obj) = value.as_object() else {
                errors.push(ValidationError::invalid_type(
                    key,
                    "object",
                    value_type_name(value),
                ));
                continue;
            };
            let urn_key = key.to_ascii_lowercase();
            let original_extension = original_extensions.and_then(|map| map.get(&urn_key));
            let mut extension_errors = ValidationErrors::new();
            let (ext_values, _) = validate_object(
                &extension_shape,
                extension_obj,
                context,
                original_extension.map(|o| o.values()),
                None,
                &mut extension_errors,
            );
            errors.extend(extension_errors);
            extensions.insert(
                urn_key,
                ScimObject::new(extension_shape, ext_values, HashMap::new()),
            );
            continue;
        }

        match shape.find_field(key) {
            Some(field) => {
                if !value.is_null() {
                    bound.insert(field.name.clone(), value.clone());
                }
            }
            None => errors.push(ValidationError::unknown_attribute(key, shape.name.clone())),
        }
    }

    let mut values: Map<String, Value> = Map::new();
    for field in &shape.fields {
        let raw = bound
            .remove(&field.name)
            .or_else(|| field.default.clone());

        // Type normalization happens first so context checks compare
        // canonical forms.
        let mut value = match raw {
            Some(raw) => normalize_value(field, raw, context, original_values, errors),
            None => None,
        };

        if let Some(ctx) = context {
            value = enforce_context(field, value, ctx, original_values, errors);
        }

        if field.name == "schemas" {
            if let Some(Value::Array(schemas)) = &value {
                match schemas.first() {
                    None => errors.push(ValidationError::EmptySchemas),
                    Some(primary) => {
                        // schemas[0] is always the resource's own primary URN;
                        // extension URNs follow it
                        if let Some(expected) = shape.schema_urn.as_deref() {
                            let primary = primary.as_str().unwrap_or_default();
                            if !primary.eq_ignore_ascii_case(expected) {
                                errors.push(ValidationError::PrimarySchemaMismatch {
                                    expected: expected.to_string(),
                                    actual: primary.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        }

        if let Some(value) = value {
            values.insert(field.name.clone(), value);
        }
    }

    (values, extensions)
}

/// Apply request/response characteristic enforcement to one field value.
fn enforce_context(
    field: &FieldDescriptor,
    value: Option<Value>,
    context: ScimContext,
    original_values: Option<&Map<String, Value>>,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let characteristics = field.characteristics();

    if context.is_request() {
        if characteristics.mutability == Mutability::WriteOnly
            && context.is_read_request()
            && value.is_some()
        {
            errors.push(ValidationError::WriteOnlyInReadContext {
                attribute: field.wire_name.clone(),
                context,
            });
            return None;
        }

        if characteristics.mutability == Mutability::ReadOnly && context.is_mutation_request() {
            // Client-supplied read-only values are dropped, not rejected.
            if value.is_some() {
                trace!("dropping read-only attribute '{}'", field.wire_name);
            }
            return None;
        }

        if characteristics.mutability == Mutability::Immutable
            && context == ScimContext::ResourceReplacementRequest
            && value.is_some()
        {
            match original_values {
                None => {
                    errors.push(ValidationError::ImmutabilityViolation {
                        attribute: field.wire_name.clone(),
                    });
                    return None;
                }
                Some(original) => {
                    // A previously unset immutable value may be set once.
                    if let Some(previous) = original.get(&field.name) {
                        if value.as_ref() != Some(previous) {
                            errors.push(ValidationError::ImmutabilityViolation {
                                attribute: field.wire_name.clone(),
                            });
                            return None;
                        }
                    }
                }
            }
        }

        if characteristics.is_required() && context.is_mutation_request() && value.is_none() {
            errors.push(ValidationError::missing_required(&field.wire_name));
        }
    }

    if context.is_response() {
        if characteristics.returned == Returned::Never && value.is_some() {
            errors.push(ValidationError::NeverReturnedPresent {
                attribute: field.wire_name.clone(),
                context,
            });
            return None;
        }
        if characteristics.returned == Returned::Always && value.is_none() {
            errors.push(ValidationError::AlwaysReturnedMissing {
                attribute: field.wire_name.clone(),
                context,
            });
        }
    }

    value
}

/// Normalize a raw field value against its descriptor, honouring multiplicity.
fn normalize_value(
    field: &FieldDescriptor,
    value: Value,
    context: Option<ScimContext>,
    original_values: Option<&Map<String, Value>>,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    if field.multi_valued {
        let Value::Array(items) = value else {
            errors.push(ValidationError::ExpectedMultiValue {
                attribute: field.wire_name.clone(),
            });
            return None;
        };
        let normalized: Vec<Value> = items
            .into_iter()
            .filter(|item| !item.is_null())
            .filter_map(|item| normalize_single(field, item, context, None, errors))
            .collect();
        Some(Value::Array(normalized))
    } else {
        if value.is_array() {
            errors.push(ValidationError::ExpectedSingleValue {
                attribute: field.wire_name.clone(),
            });
            return None;
        }
        let original_sub = original_values
            .and_then(|map| map.get(&field.name))
            .and_then(Value::as_object);
        normalize_single(field, value, context, original_sub, errors)
    }
}

/// Normalize and type-check one scalar or nested value.
fn normalize_single(
    field: &FieldDescriptor,
    value: Value,
    context: Option<ScimContext>,
    original_sub: Option<&Map<String, Value>>,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    match &field.kind {
        FieldKind::String => {
            let Some(s) = value.as_str() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "string",
                    value_type_name(&value),
                ));
                return None;
            };
            if !field.canonical_values.is_empty() {
                let matches = field.canonical_values.iter().any(|allowed| {
                    if field.characteristics().is_case_exact() {
                        allowed == s
                    } else {
                        allowed.eq_ignore_ascii_case(s)
                    }
                });
                if !matches {
                    errors.push(ValidationError::InvalidCanonicalValue {
                        attribute: field.wire_name.clone(),
                        value: s.to_string(),
                        allowed: field.canonical_values.clone(),
                    });
                    return None;
                }
            }
            Some(value)
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "boolean",
                    value_type_name(&value),
                ));
                return None;
            }
            Some(value)
        }
        FieldKind::Integer => {
            let Some(n) = value.as_i64() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "integer",
                    value_type_name(&value),
                ));
                return None;
            };
            if n < i32::MIN as i64 || n > i32::MAX as i64 {
                errors.push(ValidationError::InvalidIntegerValue {
                    attribute: field.wire_name.clone(),
                    value: n.to_string(),
                });
                return None;
            }
            Some(value)
        }
        FieldKind::Decimal => {
            if !value.is_f64() && !value.is_i64() {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "decimal",
                    value_type_name(&value),
                ));
                return None;
            }
            Some(value)
        }
        FieldKind::DateTime => {
            let Some(s) = value.as_str() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "dateTime",
                    value_type_name(&value),
                ));
                return None;
            };
            if DateTime::<FixedOffset>::parse_from_rfc3339(s).is_err() {
                errors.push(ValidationError::InvalidDateTimeFormat {
                    attribute: field.wire_name.clone(),
                    value: s.to_string(),
                });
                return None;
            }
            Some(value)
        }
        FieldKind::Binary => {
            let Some(s) = value.as_str() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "binary",
                    value_type_name(&value),
                ));
                return None;
            };
            match encoding::canonicalize(&field.wire_name, s) {
                Ok(canonical) => Some(Value::String(canonical)),
                Err(error) => {
                    errors.push(error);
                    None
                }
            }
        }
        FieldKind::Reference { .. } => {
            let Some(s) = value.as_str() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "reference",
                    value_type_name(&value),
                ));
                return None;
            };
            if !is_valid_reference_uri(s) {
                errors.push(ValidationError::InvalidReferenceUri {
                    attribute: field.wire_name.clone(),
                    uri: s.to_string(),
                });
                return None;
            }
            Some(value)
        }
        FieldKind::Complex { shape } => {
            let Some(obj) = value.as_object() else {
                errors.push(ValidationError::invalid_type(
                    &field.wire_name,
                    "complex",
                    value_type_name(&value),
                ));
                return None;
            };
            let mut nested_errors = ValidationErrors::new();
            let (values, _) = validate_object(
                shape,
                obj,
                context,
                original_sub.or(Some(&EMPTY_ORIGINAL)),
                None,
                &mut nested_errors,
            );
            errors.extend(nested_errors);
            if values.is_empty() {
                None
            } else {
                Some(Value::Object(values))
            }
        }
    }
}

// Nested complex values without a corresponding original sub-object are
// treated as first-time sets for the immutability comparison.
static EMPTY_ORIGINAL: std::sync::LazyLock<Map<String, Value>> =
    std::sync::LazyLock::new(Map::new);

/// Normalization entry point for single-field assignment.
pub(crate) fn normalize_field_value(
    field: &FieldDescriptor,
    value: Value,
    context: Option<ScimContext>,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    normalize_value(field, value, context, None, errors)
}

// References are strings on the wire and any non-empty value may be a valid
// URI reference (absolute with or without an authority, relative, or a URN),
// so only the empty string is rejected.
fn is_valid_reference_uri(value: &str) -> bool {
    !value.is_empty()
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ScimObject {
    /// Serialize this instance to its wire representation.
    ///
    /// Fields disqualified by the context's mutability or returnability rules
    /// are omitted; `attributes`/`excluded_attributes` narrow `Returned::Default`
    /// and `Returned::Request` fields with transitive ancestor matching.
    /// Null-valued fields are never emitted. With `context = None` the declared
    /// field names are used instead of the camelCase wire names.
    pub fn dump(
        &self,
        context: Option<ScimContext>,
        attributes: Option<&[&str]>,
        excluded_attributes: Option<&[&str]>,
    ) -> ScimResult<Value> {
        let shape = self.shape().clone();
        let filter = AttributeFilter::from_lists(
            attributes,
            excluded_attributes,
            Some(shape.as_ref()),
            &[shape.as_ref()],
        )?;

        let schema_urn = shape.schema_urn.clone().unwrap_or_default();
        let mut map = dump_object(self, &shape, context, &filter, &schema_urn, "");

        // Extension payloads nest under their schema URN key; the schemas list
        // is rewritten to mention every populated extension exactly once.
        let mut extension_urns: Vec<String> = Vec::new();
        for extension_shape in &shape.extensions {
            let Some(urn) = extension_shape.schema_urn.as_deref() else {
                continue;
            };
            let Some(extension_obj) = self.extension_by_urn(urn) else {
                continue;
            };
            let extension_map =
                dump_object(extension_obj, extension_shape, context, &filter, urn, "");
            if !extension_map.is_empty() {
                map.insert(urn.to_string(), Value::Object(extension_map));
                extension_urns.push(urn.to_string());
            }
        }

        if !extension_urns.is_empty() {
            // declared and wire spellings agree for `schemas`
            let schemas_key = "schemas";
            let mut schemas = match map.remove(schemas_key) {
                Some(Value::Array(existing)) => existing,
                _ => shape
                    .schema_urn
                    .iter()
                    .map(|urn| Value::String(urn.clone()))
                    .collect(),
            };
            for urn in extension_urns {
                let present = schemas
                    .iter()
                    .any(|s| s.as_str().is_some_and(|s| s.eq_ignore_ascii_case(&urn)));
                if !present {
                    schemas.push(Value::String(urn));
                }
            }
            map.insert(schemas_key.to_string(), Value::Array(schemas));
        }

        Ok(Value::Object(map))
    }
}

fn dump_object(
    object: &ScimObject,
    shape: &ModelShape,
    context: Option<ScimContext>,
    filter: &AttributeFilter,
    schema_urn: &str,
    path_prefix: &str,
) -> Map<String, Value> {
    let mut map = Map::new();
    for field in &shape.fields {
        let Some(value) = object.values().get(&field.name) else {
            continue;
        };
        let path = if path_prefix.is_empty() {
            field.wire_name.clone()
        } else {
            format!("{path_prefix}.{}", field.wire_name)
        };
        let urn_path = format!("{schema_urn}:{path}");

        if let Some(ctx) = context {
            if !field_dumpable(field, ctx, filter, &urn_path) {
                continue;
            }
        }

        let rendered = render_value(field, value, context, filter, schema_urn, &path);
        let Some(rendered) = rendered else { continue };

        let key = if context.is_some() {
            field.wire_name.clone()
        } else {
            field.name.clone()
        };
        map.insert(key, rendered);
    }
    map
}

/// The per-context dump admission table for one populated field.
fn field_dumpable(
    field: &FieldDescriptor,
    context: ScimContext,
    filter: &AttributeFilter,
    urn_path: &str,
) -> bool {
    let characteristics = field.characteristics();

    if context.is_request() {
        return match characteristics.mutability {
            Mutability::ReadOnly => !context.is_mutation_request(),
            Mutability::Immutable => context != ScimContext::ResourceReplacementRequest,
            Mutability::WriteOnly => !context.is_read_request(),
            Mutability::ReadWrite => true,
        };
    }

    if context.is_response() {
        return match characteristics.returned {
            Returned::Never => false,
            Returned::Always => true,
            Returned::Default => {
                !filter.is_excluded(urn_path)
                    && (!filter.has_inclusions() || filter.is_included(urn_path))
            }
            Returned::Request => filter.is_included(urn_path),
        };
    }

    true
}

fn render_value(
    field: &FieldDescriptor,
    value: &Value,
    context: Option<ScimContext>,
    filter: &AttributeFilter,
    schema_urn: &str,
    path: &str,
) -> Option<Value> {
    match (&field.kind, value) {
        (FieldKind::Complex { shape }, Value::Object(_)) if !field.multi_valued => {
            let nested = ScimObject::new(
                shape.clone(),
                value.as_object().cloned().unwrap_or_default(),
                HashMap::new(),
            );
            let map = dump_object(&nested, shape, context, filter, schema_urn, path);
            if map.is_empty() {
                None
            } else {
                Some(Value::Object(map))
            }
        }
        (FieldKind::Complex { shape }, Value::Array(items)) => {
            let rendered: Vec<Value> = items
                .iter()
                .filter_map(|item| {
                    let obj = item.as_object()?;
                    let nested = ScimObject::new(shape.clone(), obj.clone(), HashMap::new());
                    let map = dump_object(&nested, shape, context, filter, schema_urn, path);
                    if map.is_empty() {
                        None
                    } else {
                        Some(Value::Object(map))
                    }
                })
                .collect();
            if rendered.is_empty() {
                None
            } else {
                Some(Value::Array(rendered))
            }
        }
        (_, Value::Array(items)) if items.is_empty() => None,
        _ => Some(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScimError;
    use crate::model::shape::{FieldDescriptor, multi_valued_shape};
    use serde_json::json;

    fn probe_shape() -> Arc<ModelShape> {
        ModelShape::resource("Probe", "urn:example:2.0:Probe")
            .field(FieldDescriptor::string("user_name").required(true))
            .field(FieldDescriptor::string("password").mutability(Mutability::WriteOnly).returned(Returned::Never))
            .field(FieldDescriptor::string("badge").mutability(Mutability::Immutable))
            .field(FieldDescriptor::integer("login_count").mutability(Mutability::ReadOnly))
            .field(FieldDescriptor::complex("emails", multi_valued_shape("Email", ["work", "home"])).multi_valued())
            .build()
    }

    #[test]
    fn test_case_insensitive_binding() {
        let shape = probe_shape();
        for key in ["userName", "username", "USERNAME", "user_name"] {
            let object =
                validate(&shape, &json!({ key: "bjensen" }), None, None).unwrap();
            assert_eq!(object.get_str("user_name"), Some("bjensen"));
        }
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let shape = probe_shape();
        let result = validate(&shape, &json!({"nonesuch": 1}), None, None);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("nonesuch"));
    }

    #[test]
    fn test_read_only_dropped_on_creation() {
        let shape = probe_shape();
        let object = validate(
            &shape,
            &json!({"userName": "bjensen", "loginCount": 7}),
            Some(ScimContext::ResourceCreationRequest),
            None,
        )
        .unwrap();
        assert!(object.get("login_count").is_none());
    }

    #[test]
    fn test_write_only_rejected_in_query_request() {
        let shape = probe_shape();
        let result = validate(
            &shape,
            &json!({"userName": "bjensen", "password": "secret"}),
            Some(ScimContext::ResourceQueryRequest),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("writeOnly"));
    }

    #[test]
    fn test_required_missing_on_creation() {
        let shape = probe_shape();
        let result = validate(
            &shape,
            &json!({}),
            Some(ScimContext::ResourceCreationRequest),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("userName"));
        // same payload passes without a context
        assert!(validate(&shape, &json!({}), None, None).is_ok());
    }

    #[test]
    fn test_immutable_must_match_original() {
        let shape = probe_shape();
        let original = validate(&shape, &json!({"badge": "A-1"}), None, None).unwrap();

        let unchanged = validate(
            &shape,
            &json!({"userName": "b", "badge": "A-1"}),
            Some(ScimContext::ResourceReplacementRequest),
            Some(&original),
        );
        assert!(unchanged.is_ok());

        let changed = validate(
            &shape,
            &json!({"userName": "b", "badge": "B-2"}),
            Some(ScimContext::ResourceReplacementRequest),
            Some(&original),
        );
        assert!(changed.unwrap_err().to_string().contains("immutable"));
    }

    #[test]
    fn test_immutable_first_set_allowed() {
        let shape = probe_shape();
        let original = validate(&shape, &json!({"userName": "b"}), None, None).unwrap();
        let result = validate(
            &shape,
            &json!({"userName": "b", "badge": "A-1"}),
            Some(ScimContext::ResourceReplacementRequest),
            Some(&original),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_response_returnability_enforced() {
        let shape = probe_shape();
        // never-returned populated
        let result = validate(
            &shape,
            &json!({"id": "1", "userName": "b", "password": "x"}),
            Some(ScimContext::ResourceQueryResponse),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("never"));

        // always-returned (id) missing
        let result = validate(
            &shape,
            &json!({"userName": "b"}),
            Some(ScimContext::ResourceQueryResponse),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("id"));
    }

    #[test]
    fn test_primary_schema_must_name_the_resource() {
        let shape = probe_shape();
        let result = validate(
            &shape,
            &json!({"schemas": ["urn:example:2.0:Other"], "userName": "b"}),
            None,
            None,
        );
        assert!(result.unwrap_err().to_string().contains("urn:example:2.0:Probe"));

        // case differences are not a mismatch
        let spelled = validate(
            &shape,
            &json!({"schemas": ["URN:EXAMPLE:2.0:PROBE"]}),
            None,
            None,
        );
        assert!(spelled.is_ok());
    }

    #[test]
    fn test_reference_accepts_schemes_without_authority() {
        use crate::model::object::StaticShape;
        let shape = crate::resources::User::shape();
        for uri in [
            "mailto:bjensen@example.com",
            "tel:+1-201-555-0123",
            "https://photos.example.com/profile.jpg",
            "../Users/2819c223",
        ] {
            let object = validate(&shape, &json!({"profileUrl": uri}), None, None).unwrap();
            assert_eq!(object.get_str("profileUrl"), Some(uri));
        }
        let empty = validate(&shape, &json!({"profileUrl": ""}), None, None);
        assert!(empty.unwrap_err().to_string().contains("reference"));
    }

    #[test]
    fn test_errors_are_aggregated() {
        let shape = probe_shape();
        let result = validate(
            &shape,
            &json!({"bogus": 1, "alsoBogus": 2}),
            None,
            None,
        );
        match result.unwrap_err() {
            ScimError::Validation(errors) => assert_eq!(errors.errors.len(), 2),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_canonical_values_checked_in_nested_complex() {
        let shape = probe_shape();
        let result = validate(
            &shape,
            &json!({"emails": [{"value": "b@example.com", "type": "imaginary"}]}),
            None,
            None,
        );
        assert!(result.unwrap_err().to_string().contains("imaginary"));
    }

    #[test]
    fn test_dump_mutability_table() {
        let shape = probe_shape();
        let payload = json!({
            "id": "1",
            "userName": "b",
            "badge": "A-1",
            "loginCount": 7,
            "password": "secret"
        });
        let object = validate(&shape, &payload, None, None).unwrap();

        let creation = object
            .dump(Some(ScimContext::ResourceCreationRequest), None, None)
            .unwrap();
        assert!(creation.get("loginCount").is_none());
        assert!(creation.get("badge").is_some());

        let replacement = object
            .dump(Some(ScimContext::ResourceReplacementRequest), None, None)
            .unwrap();
        assert!(replacement.get("loginCount").is_none());
        assert!(replacement.get("badge").is_none());

        let query = object
            .dump(Some(ScimContext::ResourceQueryRequest), None, None)
            .unwrap();
        assert!(query.get("password").is_none());
        assert!(query.get("loginCount").is_some());

        let diagnostic = object.dump(None, None, None).unwrap();
        assert!(diagnostic.get("login_count").is_some());
        assert!(diagnostic.get("password").is_some());
    }

    #[test]
    fn test_dump_without_context_uses_declared_names() {
        let shape = probe_shape();
        let object = validate(&shape, &json!({"userName": "b"}), None, None).unwrap();
        let diagnostic = object.dump(None, None, None).unwrap();
        assert!(diagnostic.get("user_name").is_some());
        assert!(diagnostic.get("userName").is_none());
    }

    #[test]
    fn test_binary_values_canonicalized() {
        let shape = ModelShape::complex("Blob")
            .field(FieldDescriptor::binary("data"))
            .build();
        let object = validate(&shape, &json!({"data": "aGVs\nbG8"}), None, None).unwrap();
        assert_eq!(object.get_str("data"), Some("aGVsbG8="));
    }
}
