//! Attribute characteristic enumerations from RFC 7643 §2.2 and §7.
//!
//! Every model field carries a fixed record of five characteristics that drive
//! context-dependent validation and serialization: mutability, returnability,
//! uniqueness, required-ness and case sensitivity. Characteristics describe the
//! schema, not a particular value, and are fixed at model-definition time.

use serde::{Deserialize, Serialize};

/// Attribute mutability characteristics.
///
/// Defines whether and when a client may set an attribute's value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    /// Read-only attribute (managed by the server)
    ReadOnly,
    /// Read-write attribute (can be modified by clients)
    #[default]
    ReadWrite,
    /// Immutable attribute (set once, never modified)
    Immutable,
    /// Write-only attribute (passwords, etc.)
    WriteOnly,
}

/// Attribute returnability characteristics.
///
/// Defines whether and when an attribute's value appears in a response payload.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Returned {
    /// Always returned, regardless of attribute selection
    Always,
    /// Never returned
    Never,
    /// Returned unless excluded by the request
    #[default]
    Default,
    /// Returned only when explicitly requested
    Request,
}

/// Attribute uniqueness constraints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Uniqueness {
    /// No uniqueness constraint
    #[default]
    None,
    /// Unique within the server
    Server,
    /// Globally unique
    Global,
}

/// Whether an attribute must be present in creation and replacement requests.
///
/// Boolean-valued enumeration so it can be attached and introspected like the
/// other characteristics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Required {
    True,
    #[default]
    False,
}

/// Whether string comparison for the attribute is case-sensitive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CaseExact {
    True,
    #[default]
    False,
}

impl From<bool> for Required {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Required> for bool {
    fn from(value: Required) -> Self {
        value == Required::True
    }
}

impl From<bool> for CaseExact {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<CaseExact> for bool {
    fn from(value: CaseExact) -> Self {
        value == CaseExact::True
    }
}

/// The fixed five-characteristic record attached to every model field.
///
/// Fields that omit a characteristic get that characteristic's declared
/// default. The record is identical in shape for statically declared fields
/// and fields synthesized at runtime from a `Schema` document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeCharacteristics {
    pub mutability: Mutability,
    pub returned: Returned,
    pub uniqueness: Uniqueness,
    pub required: Required,
    pub case_exact: CaseExact,
}

impl AttributeCharacteristics {
    pub fn is_required(&self) -> bool {
        self.required == Required::True
    }

    pub fn is_case_exact(&self) -> bool {
        self.case_exact == CaseExact::True
    }
}
