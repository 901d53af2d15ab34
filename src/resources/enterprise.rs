//! The enterprise User schema extension (RFC 7643 §4.3).

use crate::characteristics::Mutability;
use crate::model::object::StaticShape;
use crate::model::shape::{FieldDescriptor, FieldKind, ModelShape};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the EnterpriseUser extension.
///
/// Compose it onto a User shape with
/// [`ModelShape::extended`](crate::model::ModelShape::extended); its payload
/// then nests under [`urns::ENTERPRISE_USER`](super::urns::ENTERPRISE_USER)
/// on the wire.
pub struct EnterpriseUser;

impl StaticShape for EnterpriseUser {
    fn shape() -> Arc<ModelShape> {
        ENTERPRISE_USER_SHAPE.clone()
    }
}

static ENTERPRISE_USER_SHAPE: LazyLock<Arc<ModelShape>> =
    LazyLock::new(build_enterprise_user_shape);

fn build_enterprise_user_shape() -> Arc<ModelShape> {
    let manager_shape = ModelShape::complex("Manager")
        .field(FieldDescriptor::string("value"))
        .field(
            FieldDescriptor::new("ref_", FieldKind::resource_reference(["User"]))
                .wire_name("$ref"),
        )
        .field(FieldDescriptor::string("display_name").mutability(Mutability::ReadOnly))
        .build();

    ModelShape::extension("EnterpriseUser", urns::ENTERPRISE_USER)
        .field(FieldDescriptor::string("employee_number"))
        .field(FieldDescriptor::string("cost_center"))
        .field(FieldDescriptor::string("organization"))
        .field(FieldDescriptor::string("division"))
        .field(FieldDescriptor::string("department"))
        .field(FieldDescriptor::complex("manager", manager_shape))
        .build()
}
