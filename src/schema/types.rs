//! Core schema document types for SCIM resources.
//!
//! These are the reified attribute descriptions of RFC 7643 §7: a `Schema`
//! document lists `Attribute` definitions carrying the full characteristic
//! metadata, recursively for complex types.

use crate::characteristics::{Mutability, Returned, Uniqueness};
use serde::{Deserialize, Serialize};

/// A SCIM schema definition.
///
/// Represents a complete schema with its metadata and attribute definitions,
/// as served from the `/Schemas` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Unique schema identifier (URN)
    pub id: String,
    /// Human-readable schema name
    #[serde(default)]
    pub name: String,
    /// Schema description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Ordered attribute definitions
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Definition of a single SCIM attribute with its characteristics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute wire name
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type", default)]
    pub data_type: AttributeType,
    /// Whether this attribute can have multiple values
    #[serde(default)]
    pub multi_valued: bool,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Whether this attribute is required
    #[serde(default)]
    pub required: bool,
    /// Allowed values for string attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub canonical_values: Vec<String>,
    /// Whether string comparison is case-sensitive
    #[serde(default)]
    pub case_exact: bool,
    /// Mutability characteristics
    #[serde(default)]
    pub mutability: Mutability,
    /// How the attribute is returned in responses
    #[serde(default)]
    pub returned: Returned,
    /// Uniqueness constraints
    #[serde(default)]
    pub uniqueness: Uniqueness,
    /// What a reference attribute may point to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_types: Vec<String>,
    /// Sub-attributes for complex types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_attributes: Vec<Attribute>,
}

impl Default for Attribute {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: AttributeType::String,
            multi_valued: false,
            description: String::new(),
            required: false,
            canonical_values: Vec::new(),
            case_exact: false,
            mutability: Mutability::ReadWrite,
            returned: Returned::Default,
            uniqueness: Uniqueness::None,
            reference_types: Vec::new(),
            sub_attributes: Vec::new(),
        }
    }
}

/// SCIM attribute data types as defined in RFC 7643 §2.3.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    #[default]
    String,
    Boolean,
    Decimal,
    Integer,
    DateTime,
    /// Binary data (base64 encoded)
    Binary,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}
