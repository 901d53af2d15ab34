//! The ServiceProviderConfig resource shape (RFC 7643 §5).

use crate::characteristics::Mutability;
use crate::model::object::StaticShape;
use crate::model::shape::{FieldDescriptor, ModelShape};
use std::sync::{Arc, LazyLock};

use super::urns;

/// Marker type for the ServiceProviderConfig resource.
pub struct ServiceProviderConfig;

impl StaticShape for ServiceProviderConfig {
    fn shape() -> Arc<ModelShape> {
        SERVICE_PROVIDER_CONFIG_SHAPE.clone()
    }
}

static SERVICE_PROVIDER_CONFIG_SHAPE: LazyLock<Arc<ModelShape>> =
    LazyLock::new(build_service_provider_config_shape);

fn supported_shape(name: &str) -> Arc<ModelShape> {
    ModelShape::complex(name)
        .field(
            FieldDescriptor::boolean("supported")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build()
}

fn build_service_provider_config_shape() -> Arc<ModelShape> {
    let bulk_shape = ModelShape::complex("BulkSupport")
        .field(
            FieldDescriptor::boolean("supported")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::integer("max_operations")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::integer("max_payload_size")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build();

    let filter_shape = ModelShape::complex("FilterSupport")
        .field(
            FieldDescriptor::boolean("supported")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::integer("max_results")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build();

    let authentication_scheme_shape = ModelShape::complex("AuthenticationScheme")
        .field(
            FieldDescriptor::string("type")
                .required(true)
                .canonical_values([
                    "oauth",
                    "oauth2",
                    "oauthbearertoken",
                    "httpbasic",
                    "httpdigest",
                ])
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("name")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::string("description")
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::reference("spec_uri", ["external"]).mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::reference("documentation_uri", ["external"])
                .mutability(Mutability::ReadOnly),
        )
        .field(FieldDescriptor::boolean("primary").mutability(Mutability::ReadOnly))
        .build();

    ModelShape::resource("ServiceProviderConfig", urns::SERVICE_PROVIDER_CONFIG)
        .field(
            FieldDescriptor::reference("documentation_uri", ["external"])
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("patch", supported_shape("PatchSupport"))
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("bulk", bulk_shape)
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("filter", filter_shape)
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("change_password", supported_shape("ChangePasswordSupport"))
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("sort", supported_shape("SortSupport"))
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("etag", supported_shape("EtagSupport"))
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .field(
            FieldDescriptor::complex("authentication_schemes", authentication_scheme_shape)
                .multi_valued()
                .required(true)
                .mutability(Mutability::ReadOnly),
        )
        .build()
}
