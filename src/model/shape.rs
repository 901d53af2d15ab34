//! Runtime shape descriptions for SCIM models.
//!
//! A shape is the runtime value describing a model's fields and their attribute
//! characteristics. Shapes are built once, either statically for the fixed
//! resource set or from a `Schema` document at load time, and are immutable
//! afterwards; the engine treats them as shared, read-only metadata.

use crate::characteristics::{
    AttributeCharacteristics, CaseExact, Mutability, Required, Returned, Uniqueness,
};
use serde_json::Value;
use std::sync::Arc;

/// The data type of a model field, mirroring the RFC 7643 attribute types.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Boolean,
    Decimal,
    Integer,
    DateTime,
    /// Base64-encoded binary content
    Binary,
    /// String-valued reference; the listed reference types constrain what the
    /// value may point to ("uri", "external", or concrete resource type names)
    Reference { reference_types: Vec<String> },
    /// Nested object described by its own shape
    Complex { shape: Arc<ModelShape> },
}

impl FieldKind {
    /// Reference kind pointing at arbitrary URIs.
    pub fn uri_reference() -> Self {
        Self::Reference {
            reference_types: vec!["uri".to_string()],
        }
    }

    /// Reference kind pointing outside the service provider.
    pub fn external_reference() -> Self {
        Self::Reference {
            reference_types: vec!["external".to_string()],
        }
    }

    /// Reference kind constrained to concrete resource types.
    pub fn resource_reference<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Reference {
            reference_types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// The wire name of the type, as used in `Attribute.type`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "dateTime",
            Self::Binary => "binary",
            Self::Reference { .. } => "reference",
            Self::Complex { .. } => "complex",
        }
    }
}

/// A single field of a model shape.
///
/// Carries the declared (identifier-safe) name, the exact wire spelling, the
/// data type, multiplicity and the five-characteristic record. The wire name is
/// preserved verbatim so reserved spellings like `$ref` round-trip exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Declared field name (`user_name`, `ref_`)
    pub name: String,
    /// Exact wire spelling (`userName`, `$ref`)
    pub wire_name: String,
    pub kind: FieldKind,
    pub multi_valued: bool,
    pub characteristics: AttributeCharacteristics,
    /// Allowed values for string fields, empty when unconstrained
    pub canonical_values: Vec<String>,
    pub description: String,
    /// Default value bound when the payload omits the field
    pub default: Option<Value>,
    /// True for the common Resource envelope fields (schemas, id, externalId,
    /// meta), which schema reflection skips
    pub common: bool,
}

impl FieldDescriptor {
    /// Create a field with an explicit kind. The wire name is derived from the
    /// declared name by camel-casing; use [`wire_name`](Self::wire_name) to
    /// override it for reserved spellings.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let wire_name = camel_case(&name);
        Self {
            name,
            wire_name,
            kind,
            multi_valued: false,
            characteristics: AttributeCharacteristics::default(),
            canonical_values: Vec::new(),
            description: String::new(),
            default: None,
            common: false,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Decimal)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Binary)
    }

    pub fn reference<I, S>(name: impl Into<String>, reference_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            FieldKind::Reference {
                reference_types: reference_types.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn complex(name: impl Into<String>, shape: Arc<ModelShape>) -> Self {
        Self::new(name, FieldKind::Complex { shape })
    }

    /// Override the wire spelling (e.g. `$ref`).
    pub fn wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = wire_name.into();
        self
    }

    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.characteristics.mutability = mutability;
        self
    }

    pub fn returned(mut self, returned: Returned) -> Self {
        self.characteristics.returned = returned;
        self
    }

    pub fn uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.characteristics.uniqueness = uniqueness;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.characteristics.required = Required::from(required);
        self
    }

    pub fn case_exact(mut self, case_exact: bool) -> Self {
        self.characteristics.case_exact = CaseExact::from(case_exact);
        self
    }

    pub fn canonical_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.canonical_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub(crate) fn common(mut self) -> Self {
        self.common = true;
        self
    }

    /// The five-characteristic record for this field.
    ///
    /// Identical contract for statically declared and schema-synthesized
    /// fields; this is the per-field annotation lookup.
    pub fn characteristics(&self) -> &AttributeCharacteristics {
        &self.characteristics
    }

    /// The nested shape for complex fields.
    pub fn complex_shape(&self) -> Option<&Arc<ModelShape>> {
        match &self.kind {
            FieldKind::Complex { shape } => Some(shape),
            _ => None,
        }
    }
}

/// A runtime description of a SCIM model: a resource, an extension, or a
/// nested complex attribute type.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelShape {
    /// Model name (`User`, `EnterpriseUser`, `Name`)
    pub name: String,
    /// Primary schema URN; `None` for schema-less complex attribute types
    pub schema_urn: Option<String>,
    /// Ordered field list
    pub fields: Vec<FieldDescriptor>,
    /// Registered extensions, in registration order
    pub extensions: Vec<Arc<ModelShape>>,
}

impl ModelShape {
    /// Start building a schema-less complex attribute type.
    pub fn complex(name: impl Into<String>) -> ModelShapeBuilder {
        ModelShapeBuilder {
            shape: ModelShape {
                name: name.into(),
                schema_urn: None,
                fields: Vec::new(),
                extensions: Vec::new(),
            },
        }
    }

    /// Start building a top-level resource shape.
    ///
    /// Pre-populates the common envelope fields of RFC 7643 §3.1: `schemas`
    /// (required, defaulting to the primary URN), `id` (readOnly, always
    /// returned, globally unique), `externalId` and `meta` (readOnly complex).
    pub fn resource(name: impl Into<String>, schema_urn: impl Into<String>) -> ModelShapeBuilder {
        let schema_urn = schema_urn.into();
        let mut builder = ModelShapeBuilder {
            shape: ModelShape {
                name: name.into(),
                schema_urn: Some(schema_urn.clone()),
                fields: Vec::new(),
                extensions: Vec::new(),
            },
        };
        builder = builder
            .field(
                FieldDescriptor::string("schemas")
                    .multi_valued()
                    .required(true)
                    .case_exact(true)
                    .returned(Returned::Always)
                    .default_value(Value::Array(vec![Value::String(schema_urn)]))
                    .common(),
            )
            .field(
                FieldDescriptor::string("id")
                    .mutability(Mutability::ReadOnly)
                    .returned(Returned::Always)
                    .uniqueness(Uniqueness::Global)
                    .case_exact(true)
                    .common(),
            )
            .field(
                FieldDescriptor::string("external_id")
                    .case_exact(true)
                    .common(),
            )
            .field(
                FieldDescriptor::complex("meta", meta_shape())
                    .mutability(Mutability::ReadOnly)
                    .common(),
            );
        builder
    }

    /// Start building an extension shape.
    ///
    /// Extensions carry their own schema URN but none of the resource envelope
    /// fields; their payload is serialized nested under the URN key.
    pub fn extension(name: impl Into<String>, schema_urn: impl Into<String>) -> ModelShapeBuilder {
        ModelShapeBuilder {
            shape: ModelShape {
                name: name.into(),
                schema_urn: Some(schema_urn.into()),
                fields: Vec::new(),
                extensions: Vec::new(),
            },
        }
    }

    /// Clone this shape with an additional registered extension.
    pub fn extended(&self, extension: Arc<ModelShape>) -> Arc<ModelShape> {
        let mut shape = self.clone();
        let urn = extension
            .schema_urn
            .as_deref()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !shape.extensions.iter().any(|existing| {
            existing
                .schema_urn
                .as_deref()
                .unwrap_or_default()
                .eq_ignore_ascii_case(&urn)
        }) {
            shape.extensions.push(extension);
        }
        Arc::new(shape)
    }

    /// Find a field by payload key, using SCIM's case-insensitive matching.
    pub fn find_field(&self, key: &str) -> Option<&FieldDescriptor> {
        let normalized = normalize_attr_name(key);
        self.fields.iter().find(|field| {
            normalize_attr_name(&field.wire_name) == normalized
                || normalize_attr_name(&field.name) == normalized
        })
    }

    /// Find a field by its declared name (exact match).
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Find a registered extension by schema URN (case-insensitive).
    pub fn find_extension(&self, urn: &str) -> Option<&Arc<ModelShape>> {
        self.extensions.iter().find(|extension| {
            extension
                .schema_urn
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(urn))
        })
    }

    /// Mapping from extension URN to extension shape, in registration order.
    pub fn extension_models(&self) -> Vec<(&str, &Arc<ModelShape>)> {
        self.extensions
            .iter()
            .filter_map(|extension| {
                extension
                    .schema_urn
                    .as_deref()
                    .map(|urn| (urn, extension))
            })
            .collect()
    }
}

/// Builder for [`ModelShape`].
pub struct ModelShapeBuilder {
    shape: ModelShape,
}

impl ModelShapeBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.shape.fields.push(field);
        self
    }

    pub fn extension(mut self, extension: Arc<ModelShape>) -> Self {
        self.shape.extensions.push(extension);
        self
    }

    pub fn build(self) -> Arc<ModelShape> {
        Arc::new(self.shape)
    }
}

/// Normalize a payload key for case-insensitive attribute matching.
///
/// Plain attribute names have non-alphanumeric characters stripped before
/// lowercasing, so `userName`, `user_name` and `USERNAME` all bind to the same
/// field. Keys containing `:` are extension URNs and are matched verbatim
/// (lowercased only); this asymmetry is intentional.
pub(crate) fn normalize_attr_name(key: &str) -> String {
    if key.contains(':') {
        key.to_ascii_lowercase()
    } else {
        key.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase()
    }
}

/// Convert a declared snake_case field name to its camelCase wire spelling.
pub(crate) fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
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

/// The shared `meta` complex attribute shape.
fn meta_shape() -> Arc<ModelShape> {
    ModelShape::complex("Meta")
        .field(
            FieldDescriptor::string("resource_type")
                .mutability(Mutability::ReadOnly)
                .case_exact(true),
        )
        .field(FieldDescriptor::date_time("created").mutability(Mutability::ReadOnly))
        .field(FieldDescriptor::date_time("last_modified").mutability(Mutability::ReadOnly))
        .field(FieldDescriptor::reference("location", ["uri"]).mutability(Mutability::ReadOnly))
        .field(FieldDescriptor::string("version").mutability(Mutability::ReadOnly))
        .build()
}

/// Build the canonical multi-valued complex sub-shape of RFC 7643 §2.4
/// (`value`, `display`, `type`, `primary`, `$ref`).
pub fn multi_valued_shape<I, S>(name: impl Into<String>, type_values: I) -> Arc<ModelShape>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    multi_valued_shape_with(name, type_values, FieldKind::String, FieldKind::uri_reference())
}

/// Like [`multi_valued_shape`] with explicit kinds for `value` and `$ref`.
pub fn multi_valued_shape_with<I, S>(
    name: impl Into<String>,
    type_values: I,
    value_kind: FieldKind,
    ref_kind: FieldKind,
) -> Arc<ModelShape>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ModelShape::complex(name)
        .field(FieldDescriptor::new("value", value_kind))
        .field(FieldDescriptor::string("display").mutability(Mutability::Immutable))
        .field(FieldDescriptor::string("type").canonical_values(type_values))
        .field(FieldDescriptor::boolean("primary"))
        .field(FieldDescriptor::new("ref_", ref_kind).wire_name("$ref"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("x509_certificates"), "x509Certificates");
        assert_eq!(camel_case("id"), "id");
    }

    #[test]
    fn test_normalize_strips_plain_names() {
        assert_eq!(normalize_attr_name("userName"), "username");
        assert_eq!(normalize_attr_name("user_name"), "username");
        assert_eq!(normalize_attr_name("USERNAME"), "username");
        assert_eq!(normalize_attr_name("$ref"), "ref");
    }

    #[test]
    fn test_normalize_preserves_urn_keys() {
        let urn = "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";
        assert_eq!(normalize_attr_name(urn), urn.to_ascii_lowercase());
        // the colon and dots survive verbatim
        assert!(normalize_attr_name(urn).contains(':'));
    }

    #[test]
    fn test_find_field_case_insensitive() {
        let shape = ModelShape::complex("Test")
            .field(FieldDescriptor::string("user_name"))
            .build();
        assert!(shape.find_field("userName").is_some());
        assert!(shape.find_field("USERNAME").is_some());
        assert!(shape.find_field("user-name").is_some());
        assert!(shape.find_field("displayName").is_none());
    }

    #[test]
    fn test_resource_builder_has_common_fields() {
        let shape = ModelShape::resource("Thing", "urn:example:2.0:Thing").build();
        for name in ["schemas", "id", "externalId", "meta"] {
            let field = shape.find_field(name).unwrap_or_else(|| panic!("{name}"));
            assert!(field.common);
        }
        assert_eq!(
            shape.find_field("id").unwrap().characteristics().mutability,
            Mutability::ReadOnly
        );
        assert_eq!(
            shape.find_field("schemas").unwrap().default,
            Some(serde_json::json!(["urn:example:2.0:Thing"]))
        );
    }

    #[test]
    fn test_extended_does_not_duplicate() {
        let extension = ModelShape::extension("Ext", "urn:example:2.0:Ext").build();
        let base = ModelShape::resource("Thing", "urn:example:2.0:Thing").build();
        let once = base.extended(extension.clone());
        let twice = once.extended(extension);
        assert_eq!(twice.extensions.len(), 1);
    }

    #[test]
    fn test_reference_constructor_builds_reference_kind() {
        let field = FieldDescriptor::reference("profile_url", ["external"]);
        assert_eq!(
            field.kind,
            FieldKind::Reference {
                reference_types: vec!["external".to_string()]
            }
        );
    }

    #[test]
    fn test_multi_valued_shape_ref_spelling() {
        let shape = multi_valued_shape("Email", ["work", "home"]);
        let ref_field = shape.field_by_name("ref_").unwrap();
        assert_eq!(ref_field.wire_name, "$ref");
        let type_field = shape.field_by_name("type").unwrap();
        assert_eq!(type_field.canonical_values, vec!["work", "home"]);
        let display = shape.field_by_name("display").unwrap();
        assert_eq!(display.characteristics().mutability, Mutability::Immutable);
    }
}
