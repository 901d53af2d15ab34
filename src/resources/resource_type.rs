//! The ResourceType configuration resource shape (RFC 7643 §6).

use crate::characteristics::Mutability;
use crate::model::object::StaticShape;
use crate::model::shape::{FieldDescriptor, ModelShape};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the ResourceType configuration resource.
pub struct ResourceType;

impl StaticShape for ResourceType {
    fn shape() -> Arc<ModelShape> {
        RESOURCE_TYPE_SHAPE.clone()
    }
}

static RESOURCE_TYPE_SHAPE: LazyLock<Arc<ModelShape>> = LazyLock::new(build_resource_type_shape);

fn build_resource_type_shape() -> Arc<ModelShape> {
    let extension_shape = ModelShape::complex("SchemaExtension")
        .field(
            FieldDescriptor::reference("schema", ["uri"])
                .required(true)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::boolean("required")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build();

    ModelShape::resource("ResourceType", urns::RESOURCE_TYPE)
        .field(
            FieldDescriptor::string("name")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(FieldDescriptor::string("description").mutability(Mutability::ReadOnly))
        .field(
            FieldDescriptor::reference("endpoint", ["uri"])
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::reference("schema", ["uri"])
                .required(true)
                .case_exact(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("schema_extensions", extension_shape)
                .multi_valued()
                .mutability(Mutability::ReadOnly),
        )
        .build()
}
