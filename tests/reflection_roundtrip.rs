//! Schema reflection round-trips: a shape reified as a `Schema` document and
//! synthesized back must preserve every attribute's type, multiplicity,
//! characteristics, reference targets and nesting.

use proptest::prelude::*;
use scim_model::characteristics::{Mutability, Returned, Uniqueness};
use scim_model::resources::{
    EnterpriseUser, Group, ResourceType, SchemaResource, ServiceProviderConfig, User,
};
use scim_model::schema::{Attribute, AttributeType, Schema};
use scim_model::{from_schema, to_schema, StaticShape};

#[test]
fn built_in_shapes_survive_round_trip() {
    let shapes = [
        User::shape(),
        Group::shape(),
        EnterpriseUser::shape(),
        ResourceType::shape(),
        ServiceProviderConfig::shape(),
        SchemaResource::shape(),
    ];
    for shape in shapes {
        let document = to_schema(&shape);
        let synthesized = from_schema(&document)
            .unwrap_or_else(|e| panic!("synthesizing '{}' failed: {e}", shape.name));
        assert_eq!(
            to_schema(&synthesized),
            document,
            "round trip changed '{}'",
            shape.name
        );
    }
}

#[test]
fn dollar_ref_spelling_survives_round_trip() {
    let document = to_schema(&User::shape());
    let synthesized = from_schema(&document).unwrap();
    let emails = synthesized.find_field("emails").unwrap();
    let email_shape = emails.complex_shape().unwrap();
    assert_eq!(email_shape.find_field("$ref").unwrap().wire_name, "$ref");
}

#[test]
fn synthesized_shape_validates_payloads() {
    // a shape discovered from a schema document must drive the engine like a
    // statically defined one
    let document: Schema = serde_json::from_value(serde_json::json!({
        "id": "urn:example:params:scim:schemas:2.0:Device",
        "name": "Device",
        "attributes": [
            {"name": "serialNumber", "type": "string", "required": true, "caseExact": true},
            {"name": "lastSeen", "type": "dateTime"}
        ]
    }))
    .unwrap();
    let shape = from_schema(&document).unwrap();

    let payload = serde_json::json!({
        "schemas": ["urn:example:params:scim:schemas:2.0:Device"],
        "serialNumber": "QX-42",
        "lastSeen": "2011-05-13T04:42:34Z"
    });
    let device = scim_model::validate(
        &shape,
        &payload,
        Some(scim_model::ScimContext::ResourceCreationRequest),
        None,
    )
    .unwrap();
    assert_eq!(device.get_str("serialNumber"), Some("QX-42"));

    let missing = scim_model::validate(
        &shape,
        &serde_json::json!({"lastSeen": "2011-05-13T04:42:34Z"}),
        Some(scim_model::ScimContext::ResourceCreationRequest),
        None,
    );
    assert!(missing.unwrap_err().to_string().contains("serialNumber"));
}

type AttributeParts = (
    AttributeType,
    bool,
    bool,
    bool,
    Mutability,
    Returned,
    Uniqueness,
);

fn arb_attribute_parts() -> impl Strategy<Value = AttributeParts> {
    (
        prop_oneof![
            Just(AttributeType::String),
            Just(AttributeType::Boolean),
            Just(AttributeType::Decimal),
            Just(AttributeType::Integer),
            Just(AttributeType::DateTime),
            Just(AttributeType::Binary),
            Just(AttributeType::Reference),
        ],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(Mutability::ReadOnly),
            Just(Mutability::ReadWrite),
            Just(Mutability::Immutable),
            Just(Mutability::WriteOnly),
        ],
        prop_oneof![
            Just(Returned::Always),
            Just(Returned::Never),
            Just(Returned::Default),
            Just(Returned::Request),
        ],
        prop_oneof![
            Just(Uniqueness::None),
            Just(Uniqueness::Server),
            Just(Uniqueness::Global),
        ],
    )
}

fn attribute_from_parts(name: String, parts: AttributeParts) -> Attribute {
    let (data_type, multi_valued, required, case_exact, mutability, returned, uniqueness) = parts;
    Attribute {
        name,
        data_type,
        multi_valued,
        required,
        case_exact,
        mutability,
        returned,
        uniqueness,
        reference_types: if data_type == AttributeType::Reference {
            vec!["User".to_string()]
        } else {
            Vec::new()
        },
        ..Default::default()
    }
}

fn arb_attributes(max: usize) -> impl Strategy<Value = Vec<Attribute>> {
    // distinct lowercase names; the common envelope spellings are reserved
    prop::collection::btree_set("[a-z]{5,9}", 1..max)
        .prop_filter("reserved name", |names| !names.contains("schemas"))
        .prop_flat_map(|names| {
            let count = names.len();
            (
                Just(names),
                prop::collection::vec(arb_attribute_parts(), count),
            )
        })
        .prop_map(|(names, parts)| {
            names
                .into_iter()
                .zip(parts)
                .map(|(name, parts)| attribute_from_parts(name, parts))
                .collect()
        })
}

proptest! {
    #[test]
    fn scalar_attributes_round_trip(attributes in arb_attributes(5)) {
        let document = Schema {
            id: "urn:example:params:scim:schemas:2.0:Generated".to_string(),
            name: "Generated".to_string(),
            description: String::new(),
            attributes,
        };
        let synthesized = from_schema(&document).unwrap();
        prop_assert_eq!(to_schema(&synthesized), document);
    }

    #[test]
    fn complex_attributes_round_trip(sub_attributes in arb_attributes(4)) {
        let document = Schema {
            id: "urn:example:params:scim:schemas:2.0:Generated".to_string(),
            name: "Generated".to_string(),
            description: String::new(),
            attributes: vec![Attribute {
                name: "container".to_string(),
                data_type: AttributeType::Complex,
                multi_valued: true,
                sub_attributes,
                ..Default::default()
            }],
        };
        let synthesized = from_schema(&document).unwrap();
        prop_assert_eq!(to_schema(&synthesized), document);
    }
}
