//! The Schema meta-resource shape (RFC 7643 §7), used to serve `/Schemas`.

use crate::characteristics::Mutability;
use crate::model::object::StaticShape;
use crate::model::shape::{FieldDescriptor, ModelShape};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the Schema meta-resource.
pub struct SchemaResource;

impl StaticShape for SchemaResource {
    fn shape() -> Arc<ModelShape> {
        SCHEMA_SHAPE.clone()
    }
}

static SCHEMA_SHAPE: LazyLock<Arc<ModelShape>> = LazyLock::new(build_schema_shape);

const TYPE_VALUES: [&str; 8] = [
    "string",
    "boolean",
    "decimal",
    "integer",
    "dateTime",
    "reference",
    "binary",
    "complex",
];
const MUTABILITY_VALUES: [&str; 4] = ["readOnly", "readWrite", "immutable", "writeOnly"];
const RETURNED_VALUES: [&str; 4] = ["always", "never", "default", "request"];
const UNIQUENESS_VALUES: [&str; 3] = ["none", "server", "global"];

/// Scalar attribute-definition fields, shared between the top level and the
/// one permitted level of subAttributes.
fn attribute_definition_fields(builder: crate::model::shape::ModelShapeBuilder)
-> crate::model::shape::ModelShapeBuilder {
    builder
        .field(
            FieldDescriptor::string("name")
                .required(true)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("type")
                .required(true)
                .canonical_values(TYPE_VALUES)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::boolean("multi_valued")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(FieldDescriptor::string("description").mutability(Mutability::ReadOnly))
        .field(
            FieldDescriptor::boolean("required")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("canonical_values")
                .multi_valued()
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::boolean("case_exact")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("mutability")
                .required(true)
                .canonical_values(MUTABILITY_VALUES)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("returned")
                .required(true)
                .canonical_values(RETURNED_VALUES)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("uniqueness")
                .required(true)
                .canonical_values(UNIQUENESS_VALUES)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("reference_types")
                .multi_valued()
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
}

fn build_schema_shape() -> Arc<ModelShape> {
    let sub_attribute_shape =
        attribute_definition_fields(ModelShape::complex("SubAttributeDefinition")).build();

    let attribute_shape = attribute_definition_fields(ModelShape::complex("AttributeDefinition"))
        .field(
            FieldDescriptor::complex("sub_attributes", sub_attribute_shape)
                .multi_valued()
                .mutability(Mutability::ReadOnly),
        )
        .build();

    ModelShape::resource("Schema", urns::SCHEMA)
        .field(
            FieldDescriptor::string("name")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(FieldDescriptor::string("description").mutability(Mutability::ReadOnly))
        .field(
            FieldDescriptor::complex("attributes", attribute_shape)
                .multi_valued()
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build()
}
