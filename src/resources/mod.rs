//! The fixed SCIM resource set, expressed as static shapes.
//!
//! Each RFC 7643 core resource (User, Group) and configuration resource
//! (Schema, ResourceType, ServiceProviderConfig), plus the enterprise User
//! extension, is described by a shape built once behind a `LazyLock` and
//! exposed through a marker type implementing [`StaticShape`]. The marker
//! types double as lookup keys for extension access on composed resources.

pub mod enterprise;
pub mod group;
pub mod resource_type;
pub mod schema_resource;
pub mod service_provider_config;
pub mod user;

pub use enterprise::EnterpriseUser;
pub use group::Group;
pub use resource_type::ResourceType;
pub use schema_resource::SchemaResource;
pub use service_provider_config::ServiceProviderConfig;
pub use user::User;

/// Schema URNs for the fixed resource set.
pub mod urns {
    pub const USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
    pub const GROUP: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
    pub const ENTERPRISE_USER: &str =
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";
    pub const SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Schema";
    pub const RESOURCE_TYPE: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
    pub const SERVICE_PROVIDER_CONFIG: &str =
        "urn:ietf:params:scim:schemas:core:2.0:ServiceProviderConfig";
}
