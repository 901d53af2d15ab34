//! The core Group resource shape (RFC 7643 §4.2).

use crate::characteristics::Mutability;
use crate::model::object::StaticShape;
use crate::model::shape::{FieldDescriptor, FieldKind, ModelShape};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the core Group resource.
pub struct Group;

impl StaticShape for Group {
    fn shape() -> Arc<ModelShape> {
        GROUP_SHAPE.clone()
    }
}

static GROUP_SHAPE: LazyLock<Arc<ModelShape>> = LazyLock::new(build_group_shape);

fn build_group_shape() -> Arc<ModelShape> {
    // membership entries are added and removed wholesale, never edited
    let member_shape = ModelShape::complex("GroupMember")
        .field(FieldDescriptor::string("value").mutability(Mutability::Immutable))
        .field(
            FieldDescriptor::new("ref_", FieldKind::resource_reference(["User", "Group"]))
                .wire_name("$ref")
                .mutability(Mutability::Immutable),
        )
        .field(FieldDescriptor::string("display").mutability(Mutability::Immutable))
        .field(
            FieldDescriptor::string("type")
                .canonical_values(["User", "Group"])
                .mutability(Mutability::Immutable),
        )
        .build();

    ModelShape::resource("Group", urns::GROUP)
        .field(
            FieldDescriptor::string("display_name")
                .required(true)
                .description("A human-readable name for the Group"),
        )
        .field(FieldDescriptor::complex("members", member_shape).multi_valued())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_shape() {
        let shape = Group::shape();
        assert_eq!(shape.schema_urn.as_deref(), Some(urns::GROUP));
        assert!(shape.find_field("displayName").unwrap().characteristics().is_required());

        let members = shape.find_field("members").unwrap();
        let member_shape = members.complex_shape().unwrap();
        assert_eq!(
            member_shape.find_field("value").unwrap().characteristics().mutability,
            Mutability::Immutable
        );
        assert_eq!(member_shape.find_field("$ref").unwrap().wire_name, "$ref");
    }
}
