//! The core User resource shape (RFC 7643 §4.1).

use crate::characteristics::{Mutability, Returned, Uniqueness};
use crate::model::object::StaticShape;
use crate::model::shape::{
    FieldDescriptor, FieldKind, ModelShape, multi_valued_shape, multi_valued_shape_with,
};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the core User resource.
pub struct User;

impl StaticShape for User {
    fn shape() -> Arc<ModelShape> {
        USER_SHAPE.clone()
    }
}

static USER_SHAPE: LazyLock<Arc<ModelShape>> = LazyLock::new(build_user_shape);

fn build_user_shape() -> Arc<ModelShape> {
    let name_shape = ModelShape::complex("Name")
        .field(FieldDescriptor::string("formatted"))
        .field(FieldDescriptor::string("family_name"))
        .field(FieldDescriptor::string("given_name"))
        .field(FieldDescriptor::string("middle_name"))
        .field(FieldDescriptor::string("honorific_prefix"))
        .field(FieldDescriptor::string("honorific_suffix"))
        .build();

    let address_shape = ModelShape::complex("Address")
        .field(FieldDescriptor::string("formatted"))
        .field(FieldDescriptor::string("street_address"))
        .field(FieldDescriptor::string("locality"))
        .field(FieldDescriptor::string("region"))
        .field(FieldDescriptor::string("postal_code"))
        .field(FieldDescriptor::string("country"))
        .field(FieldDescriptor::string("type").canonical_values(["work", "home", "other"]))
        .field(FieldDescriptor::boolean("primary"))
        .build();

    // group membership is asserted by the server, never by the client
    let group_shape = ModelShape::complex("GroupMembership")
        .field(FieldDescriptor::string("value").mutability(Mutability::ReadOnly))
        .field(
            FieldDescriptor::new(
                "ref_",
                FieldKind::resource_reference(["User", "Group"]),
            )
            .wire_name("$ref")
            .mutability(Mutability::ReadOnly),
        )
        .field(FieldDescriptor::string("display").mutability(Mutability::ReadOnly))
        .field(
            FieldDescriptor::string("type")
                .canonical_values(["direct", "indirect"])
                .mutability(Mutability::ReadOnly),
        )
        .build();

    let certificate_shape = multi_valued_shape_with(
        "X509Certificate",
        Vec::<String>::new(),
        FieldKind::Binary,
        FieldKind::uri_reference(),
    );

    ModelShape::resource("User", urns::USER)
        .field(
            FieldDescriptor::string("user_name")
                .required(true)
                .uniqueness(Uniqueness::Server)
                .description("Unique identifier for the User, typically used to directly authenticate"),
        )
        .field(FieldDescriptor::complex("name", name_shape))
        .field(FieldDescriptor::string("display_name"))
        .field(FieldDescriptor::string("nick_name"))
        .field(FieldDescriptor::reference("profile_url", ["external"]))
        .field(FieldDescriptor::string("title"))
        .field(FieldDescriptor::string("user_type"))
        .field(FieldDescriptor::string("preferred_language"))
        .field(FieldDescriptor::string("locale"))
        .field(FieldDescriptor::string("timezone"))
        .field(FieldDescriptor::boolean("active"))
        .field(
            FieldDescriptor::string("password")
                .mutability(Mutability::WriteOnly)
                .returned(Returned::Never),
        )
        .field(
            FieldDescriptor::complex("emails", multi_valued_shape("Email", ["work", "home", "other"]))
                .multi_valued(),
        )
        .field(
            FieldDescriptor::complex(
                "phone_numbers",
                multi_valued_shape(
                    "PhoneNumber",
                    ["work", "home", "mobile", "fax", "pager", "other"],
                ),
            )
            .multi_valued(),
        )
        .field(
            FieldDescriptor::complex(
                "ims",
                multi_valued_shape(
                    "Im",
                    ["aim", "gtalk", "icq", "xmpp", "msn", "skype", "qq", "yahoo"],
                ),
            )
            .multi_valued(),
        )
        .field(
            FieldDescriptor::complex(
                "photos",
                multi_valued_shape_with(
                    "Photo",
                    ["photo", "thumbnail"],
                    FieldKind::external_reference(),
                    FieldKind::uri_reference(),
                ),
            )
            .multi_valued(),
        )
        .field(FieldDescriptor::complex("addresses", address_shape).multi_valued())
        .field(
            FieldDescriptor::complex("groups", group_shape)
                .multi_valued()
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex(
                "entitlements",
                multi_valued_shape("Entitlement", Vec::<String>::new()),
            )
            .multi_valued(),
        )
        .field(
            FieldDescriptor::complex("roles", multi_valued_shape("Role", Vec::<String>::new()))
                .multi_valued(),
        )
        .field(
            FieldDescriptor::complex("x509_certificates", certificate_shape).multi_valued(),
        )
        .build()
}
