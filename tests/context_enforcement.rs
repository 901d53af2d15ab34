//! Lifecycle-context enforcement over the User resource: mutability rules on
//! requests, returnability rules and attribute filters on responses.

use scim_model::resources::{urns, User};
use scim_model::{ScimContext, ScimError, StaticShape, validate};
use serde_json::json;

fn creation_payload() -> serde_json::Value {
    json!({
        "schemas": [urns::USER],
        "userName": "bjensen",
        "displayName": "Babs Jensen",
        "password": "t1meMa$heen",
        "emails": [
            {"value": "bjensen@example.com", "type": "work", "primary": true},
            {"value": "babs@jensen.org", "type": "home"}
        ]
    })
}

#[test]
fn creation_accepts_write_only_and_drops_read_only() {
    let mut payload = creation_payload();
    payload["id"] = json!("client-chosen");

    let user = validate(
        &User::shape(),
        &payload,
        Some(ScimContext::ResourceCreationRequest),
        None,
    )
    .unwrap();

    // the client-supplied id is silently discarded, the password kept
    assert!(user.get("id").is_none());
    assert_eq!(user.get_str("password"), Some("t1meMa$heen"));
}

#[test]
fn creation_requires_user_name() {
    let result = validate(
        &User::shape(),
        &json!({"schemas": [urns::USER], "displayName": "Babs"}),
        Some(ScimContext::ResourceCreationRequest),
        None,
    );
    assert!(result.unwrap_err().to_string().contains("userName"));
}

#[test]
fn primary_schema_must_name_the_resource() {
    let result = validate(
        &User::shape(),
        &json!({"schemas": [urns::GROUP], "userName": "bjensen"}),
        Some(ScimContext::ResourceCreationRequest),
        None,
    );
    assert!(result.unwrap_err().to_string().contains(urns::USER));
}

#[test]
fn query_request_rejects_write_only() {
    let result = validate(
        &User::shape(),
        &json!({"userName": "bjensen", "password": "t1meMa$heen"}),
        Some(ScimContext::ResourceQueryRequest),
        None,
    );
    match result.unwrap_err() {
        ScimError::Validation(errors) => {
            assert!(errors.to_string().contains("password"));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn response_rejects_never_returned_and_missing_always() {
    // password may not appear in any response
    let present = validate(
        &User::shape(),
        &json!({
            "schemas": [urns::USER],
            "id": "2819c223",
            "userName": "bjensen",
            "password": "t1meMa$heen"
        }),
        Some(ScimContext::ResourceQueryResponse),
        None,
    );
    assert!(present.unwrap_err().to_string().contains("password"));

    // id must appear in every response
    let missing = validate(
        &User::shape(),
        &json!({"schemas": [urns::USER], "userName": "bjensen"}),
        Some(ScimContext::ResourceQueryResponse),
        None,
    );
    assert!(missing.unwrap_err().to_string().contains("id"));
}

#[test]
fn absent_context_disables_enforcement() {
    let mut payload = creation_payload();
    payload["id"] = json!("kept-without-context");
    let user = validate(&User::shape(), &payload, None, None).unwrap();
    assert_eq!(user.get_str("id"), Some("kept-without-context"));
    assert!(validate(&User::shape(), &json!({}), None, None).is_ok());
}

#[test]
fn response_dump_withholds_never_returned() {
    let user = validate(&User::shape(), &creation_payload(), None, None).unwrap();
    let body = user
        .dump(Some(ScimContext::ResourceCreationResponse), None, None)
        .unwrap();
    assert!(body.get("password").is_none());
    assert_eq!(body["userName"], "bjensen");
}

#[test]
fn attributes_filter_narrows_default_returned() {
    let mut payload = creation_payload();
    payload["id"] = json!("2819c223");
    let user = validate(&User::shape(), &payload, None, None).unwrap();

    let body = user
        .dump(
            Some(ScimContext::ResourceQueryResponse),
            Some(&["userName", "emails.value"]),
            None,
        )
        .unwrap();

    // requested attributes plus the always-returned envelope
    assert_eq!(body["userName"], "bjensen");
    assert_eq!(body["id"], "2819c223");
    assert!(body.get("displayName").is_none());

    // a requested sub-attribute keeps its ancestor but prunes siblings
    let emails = body["emails"].as_array().unwrap();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0]["value"], "bjensen@example.com");
    assert!(emails[0].get("type").is_none());
    assert!(emails[0].get("primary").is_none());
}

#[test]
fn excluded_attributes_filter() {
    let mut payload = creation_payload();
    payload["id"] = json!("2819c223");
    let user = validate(&User::shape(), &payload, None, None).unwrap();

    let body = user
        .dump(
            Some(ScimContext::ResourceQueryResponse),
            None,
            Some(&["emails"]),
        )
        .unwrap();
    assert!(body.get("emails").is_none());
    assert_eq!(body["displayName"], "Babs Jensen");
    // always-returned fields cannot be excluded
    assert_eq!(body["id"], "2819c223");
}

#[test]
fn contradictory_filters_conflict() {
    let user = validate(&User::shape(), &creation_payload(), None, None).unwrap();
    let result = user.dump(
        Some(ScimContext::ResourceQueryResponse),
        Some(&["userName"]),
        Some(&["userName"]),
    );
    assert!(matches!(result, Err(ScimError::SchemaConflict { .. })));
}

#[test]
fn replacement_dump_drops_immutable_and_read_only() {
    use scim_model::resources::Group;
    let group = validate(
        &Group::shape(),
        &json!({
            "schemas": [urns::GROUP],
            "id": "e9e30dba",
            "displayName": "Tour Guides",
            "members": [{"value": "2819c223", "display": "Babs Jensen"}]
        }),
        None,
        None,
    )
    .unwrap();

    let body = group
        .dump(Some(ScimContext::ResourceReplacementRequest), None, None)
        .unwrap();
    assert!(body.get("id").is_none());
    assert_eq!(body["displayName"], "Tour Guides");
    // member sub-attributes are immutable and are not resubmitted
    assert!(body.get("members").is_none());
}
