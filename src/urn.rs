//! Attribute URN resolution per RFC 7644 §3.10.
//!
//! An attribute URN addresses one (sub-)attribute within a resource:
//! `schema-urn:attr[.subattr]*`, case-insensitive, with the schema prefix
//! omittable when a default resource is known. Resolution walks the dotted
//! sub-attribute path through the resource's declared fields (including
//! registered extensions) and returns the fully qualified canonical spelling.

use crate::error::UrnError;
use crate::model::shape::{FieldKind, ModelShape};
use log::trace;

/// Split an attribute URN into its schema part and attribute base.
///
/// Everything before the last `:` is the schema; the last segment is the
/// attribute base, which may itself be a dotted sub-attribute path.
///
/// ```
/// use scim_model::urn::extract_schema_and_attribute_base;
///
/// let (schema, base) =
///     extract_schema_and_attribute_base("urn:ietf:params:scim:schemas:core:2.0:User:name.givenName");
/// assert_eq!(schema, Some("urn:ietf:params:scim:schemas:core:2.0:User"));
/// assert_eq!(base, "name.givenName");
///
/// assert_eq!(extract_schema_and_attribute_base("userName"), (None, "userName"));
/// ```
pub fn extract_schema_and_attribute_base(urn: &str) -> (Option<&str>, &str) {
    match urn.rfind(':') {
        Some(index) => (Some(&urn[..index]), &urn[index + 1..]),
        None => (None, urn),
    }
}

/// Validate and canonicalize an attribute path against a set of resource types.
///
/// When `name` has no schema prefix, `default_shape`'s primary schema is
/// assumed. The schema is resolved against `candidates` (and their registered
/// extensions), then the dotted path is walked through nested complex types.
/// The returned string uses the canonical schema URN and wire attribute
/// spellings.
pub fn validate_attribute_urn(
    name: &str,
    default_shape: Option<&ModelShape>,
    candidates: &[&ModelShape],
) -> Result<String, UrnError> {
    let (schema, base) = extract_schema_and_attribute_base(name);

    let schema = match schema {
        Some(schema) => schema.to_string(),
        None => default_shape
            .and_then(|shape| shape.schema_urn.clone())
            .ok_or_else(|| UrnError::MissingDefaultSchema {
                path: name.to_string(),
            })?,
    };

    let shape = resolve_schema(&schema, default_shape, candidates).ok_or_else(|| {
        UrnError::UnknownSchema {
            schema: schema.clone(),
        }
    })?;
    let canonical_schema = shape
        .schema_urn
        .clone()
        .unwrap_or(schema);

    let mut current = shape;
    let mut canonical_segments: Vec<String> = Vec::new();
    let segments: Vec<&str> = base.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(UrnError::UnknownAttribute {
            schema: canonical_schema,
            attribute: base.to_string(),
        });
    }

    for (index, segment) in segments.iter().enumerate() {
        let field = current
            .find_field(segment)
            .ok_or_else(|| UrnError::UnknownAttribute {
                schema: canonical_schema.clone(),
                attribute: segment.to_string(),
            })?;
        canonical_segments.push(field.wire_name.clone());

        let terminal = index == segments.len() - 1;
        if !terminal {
            match &field.kind {
                FieldKind::Complex { shape } => current = shape,
                _ => {
                    return Err(UrnError::NotTraversable {
                        schema: canonical_schema,
                        attribute: field.wire_name.clone(),
                    });
                }
            }
        }
    }

    let canonical = format!("{}:{}", canonical_schema, canonical_segments.join("."));
    trace!("resolved attribute path '{}' to '{}'", name, canonical);
    Ok(canonical)
}

/// Find the shape declaring `schema` among the default, the candidates and
/// their extensions. Matching is case-insensitive on the URN string.
fn resolve_schema<'a>(
    schema: &str,
    default_shape: Option<&'a ModelShape>,
    candidates: &[&'a ModelShape],
) -> Option<&'a ModelShape> {
    let matches_urn = |shape: &ModelShape| {
        shape
            .schema_urn
            .as_deref()
            .is_some_and(|urn| urn.eq_ignore_ascii_case(schema))
    };

    if let Some(shape) = default_shape {
        if matches_urn(shape) {
            return Some(shape);
        }
        if let Some(extension) = shape.find_extension(schema) {
            return Some(extension);
        }
    }
    for candidate in candidates {
        if matches_urn(candidate) {
            return Some(candidate);
        }
        if let Some(extension) = candidate.find_extension(schema) {
            return Some(extension);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shape::{FieldDescriptor, ModelShape};

    fn foo_shape() -> std::sync::Arc<ModelShape> {
        let nested = ModelShape::complex("Bar")
            .field(FieldDescriptor::string("given_name"))
            .build();
        ModelShape::resource("Foo", "urn:example:2.0:Foo")
            .field(FieldDescriptor::string("bar"))
            .field(FieldDescriptor::complex("name", nested))
            .build()
    }

    #[test]
    fn test_split() {
        assert_eq!(
            extract_schema_and_attribute_base("urn:example:2.0:Foo:bar"),
            (Some("urn:example:2.0:Foo"), "bar")
        );
        assert_eq!(extract_schema_and_attribute_base("bar"), (None, "bar"));
        assert_eq!(
            extract_schema_and_attribute_base("urn:example:2.0:Foo:bar.baz"),
            (Some("urn:example:2.0:Foo"), "bar.baz")
        );
    }

    #[test]
    fn test_default_schema_applied() {
        let shape = foo_shape();
        let canonical = validate_attribute_urn("bar", Some(&shape), &[]).unwrap();
        assert_eq!(canonical, "urn:example:2.0:Foo:bar");
    }

    #[test]
    fn test_missing_default_schema() {
        let result = validate_attribute_urn("bar", None, &[]);
        assert!(matches!(
            result,
            Err(UrnError::MissingDefaultSchema { .. })
        ));
    }

    #[test]
    fn test_unknown_schema() {
        let shape = foo_shape();
        let result =
            validate_attribute_urn("urn:example:2.0:Nonesuch:bar", Some(&shape), &[]);
        assert!(matches!(result, Err(UrnError::UnknownSchema { .. })));
    }

    #[test]
    fn test_unknown_attribute() {
        let shape = foo_shape();
        let result = validate_attribute_urn("nonesuch", Some(&shape), &[]);
        assert!(matches!(result, Err(UrnError::UnknownAttribute { .. })));
    }

    #[test]
    fn test_not_traversable() {
        let shape = foo_shape();
        let result = validate_attribute_urn("bar.invalid", Some(&shape), &[]);
        assert!(matches!(result, Err(UrnError::NotTraversable { .. })));
    }

    #[test]
    fn test_sub_attribute_canonicalized() {
        let shape = foo_shape();
        let canonical =
            validate_attribute_urn("NAME.GIVENNAME", Some(&shape), &[]).unwrap();
        assert_eq!(canonical, "urn:example:2.0:Foo:name.givenName");
    }

    #[test]
    fn test_case_insensitive_schema_match() {
        let shape = foo_shape();
        let canonical =
            validate_attribute_urn("URN:EXAMPLE:2.0:FOO:bar", Some(&shape), &[]).unwrap();
        assert_eq!(canonical, "urn:example:2.0:Foo:bar");
    }
}
