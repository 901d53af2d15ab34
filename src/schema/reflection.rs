//! Bidirectional mapping between model shapes and `Schema` documents.
//!
//! [`to_schema`] walks a shape's own declared fields (skipping the common
//! resource envelope, which every resource shares) and emits an `Attribute`
//! per field from its characteristic record. [`from_schema`] is the reverse:
//! it synthesizes a runtime shape from a `Schema` payload, deriving declared
//! field names by identifier sanitization while preserving the original wire
//! spelling as the serialization alias, so values like `$ref` round-trip
//! exactly.
//!
//! Schema-driven shape synthesis is a one-time construction step; callers are
//! expected to cache the resulting shape rather than rebuild it per request.

use crate::characteristics::{CaseExact, Required};
use crate::error::{ScimError, ScimResult};
use crate::model::shape::{FieldDescriptor, FieldKind, ModelShape};
use crate::schema::types::{Attribute, AttributeType, Schema};
use log::debug;
use std::sync::Arc;

/// Reify a shape as a `Schema` document.
pub fn to_schema(shape: &ModelShape) -> Schema {
    Schema {
        id: shape.schema_urn.clone().unwrap_or_default(),
        name: shape.name.clone(),
        description: String::new(),
        attributes: shape
            .fields
            .iter()
            .filter(|field| !field.common)
            .map(attribute_from_field)
            .collect(),
    }
}

fn attribute_from_field(field: &FieldDescriptor) -> Attribute {
    let characteristics = field.characteristics();
    let (data_type, reference_types, sub_attributes) = match &field.kind {
        FieldKind::String => (AttributeType::String, Vec::new(), Vec::new()),
        FieldKind::Boolean => (AttributeType::Boolean, Vec::new(), Vec::new()),
        FieldKind::Decimal => (AttributeType::Decimal, Vec::new(), Vec::new()),
        FieldKind::Integer => (AttributeType::Integer, Vec::new(), Vec::new()),
        FieldKind::DateTime => (AttributeType::DateTime, Vec::new(), Vec::new()),
        FieldKind::Binary => (AttributeType::Binary, Vec::new(), Vec::new()),
        FieldKind::Reference { reference_types } => {
            (AttributeType::Reference, reference_types.clone(), Vec::new())
        }
        FieldKind::Complex { shape } => (
            AttributeType::Complex,
            Vec::new(),
            shape.fields.iter().map(attribute_from_field).collect(),
        ),
    };

    Attribute {
        name: field.wire_name.clone(),
        data_type,
        multi_valued: field.multi_valued,
        description: field.description.clone(),
        required: characteristics.is_required(),
        canonical_values: field.canonical_values.clone(),
        case_exact: characteristics.is_case_exact(),
        mutability: characteristics.mutability,
        returned: characteristics.returned,
        uniqueness: characteristics.uniqueness,
        reference_types,
        sub_attributes,
    }
}

/// Synthesize a resource shape from a `Schema` document.
///
/// The resulting shape carries the common resource envelope (with `schemas`
/// defaulting to `[schema.id]`) plus one field per declared attribute, and
/// satisfies the same introspection contract as statically built shapes.
pub fn from_schema(schema: &Schema) -> ScimResult<Arc<ModelShape>> {
    if schema.id.is_empty() {
        return Err(ScimError::invalid_schema("schema document has no id"));
    }
    let name = if schema.name.is_empty() {
        derive_name_from_urn(&schema.id)
    } else {
        schema.name.clone()
    };

    let mut builder = ModelShape::resource(name.clone(), schema.id.clone());
    for attribute in &schema.attributes {
        if is_common_attribute(&attribute.name) {
            // the envelope descriptors take precedence over restatements
            debug!(
                "skipping common attribute '{}' while synthesizing '{}'",
                attribute.name, name
            );
            continue;
        }
        builder = builder.field(field_from_attribute(attribute)?);
    }
    Ok(builder.build())
}

fn is_common_attribute(name: &str) -> bool {
    matches!(
        crate::model::shape::normalize_attr_name(name).as_str(),
        "schemas" | "id" | "externalid" | "meta"
    )
}

fn field_from_attribute(attribute: &Attribute) -> ScimResult<FieldDescriptor> {
    let kind = match attribute.data_type {
        AttributeType::String => FieldKind::String,
        AttributeType::Boolean => FieldKind::Boolean,
        AttributeType::Decimal => FieldKind::Decimal,
        AttributeType::Integer => FieldKind::Integer,
        AttributeType::DateTime => FieldKind::DateTime,
        AttributeType::Binary => FieldKind::Binary,
        AttributeType::Reference => FieldKind::Reference {
            reference_types: attribute.reference_types.clone(),
        },
        AttributeType::Complex => {
            if attribute.sub_attributes.is_empty() {
                return Err(ScimError::invalid_schema(format!(
                    "complex attribute '{}' has no subAttributes",
                    attribute.name
                )));
            }
            let mut nested = ModelShape::complex(type_name(&attribute.name));
            for sub_attribute in &attribute.sub_attributes {
                nested = nested.field(field_from_attribute(sub_attribute)?);
            }
            FieldKind::Complex {
                shape: nested.build(),
            }
        }
    };

    let mut field = FieldDescriptor::new(sanitize_identifier(&attribute.name), kind)
        .wire_name(attribute.name.clone())
        .mutability(attribute.mutability)
        .returned(attribute.returned)
        .uniqueness(attribute.uniqueness)
        .description(attribute.description.clone())
        .canonical_values(attribute.canonical_values.clone());
    field.characteristics.required = Required::from(attribute.required);
    field.characteristics.case_exact = CaseExact::from(attribute.case_exact);
    if attribute.multi_valued {
        field = field.multi_valued();
    }
    Ok(field)
}

/// Rust keywords that need escaping when derived from attribute names.
const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Derive a declared identifier from a wire attribute name: strip non-word
/// characters, convert camelCase to snake_case, escape reserved words.
pub(crate) fn sanitize_identifier(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    let mut snake = String::with_capacity(cleaned.len() + 2);
    let mut prev_breaks = false;
    for c in cleaned.chars() {
        if c.is_ascii_uppercase() {
            if prev_breaks {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
            prev_breaks = false;
        } else {
            snake.push(c);
            prev_breaks = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    if snake.is_empty() {
        snake.push('_');
    } else if snake.as_bytes()[0].is_ascii_digit() {
        snake.insert(0, '_');
    }
    if RESERVED.contains(&snake.as_str()) {
        snake.push('_');
    }
    snake
}

/// Upper-camel type name for a synthesized nested shape.
fn type_name(attribute_name: &str) -> String {
    let sanitized = sanitize_identifier(attribute_name);
    let mut result = String::with_capacity(sanitized.len());
    let mut upper_next = true;
    for c in sanitized.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

fn derive_name_from_urn(urn: &str) -> String {
    urn.rsplit(':').next().unwrap_or(urn).to_string()
}
