//! Error types for SCIM model operations.
//!
//! This module provides structured error handling for validation, serialization,
//! attribute URN resolution and extension access, following the taxonomy of
//! RFC 7643 §7 attribute characteristics.

use crate::context::ScimContext;

/// Main error type for SCIM model operations.
///
/// Validation failures are aggregated into [`ValidationErrors`] so that a single
/// `validate` call reports every offending field at once. URN-resolution and
/// extension-key errors are raised individually since they indicate a caller-side
/// programming error rather than a data-quality issue.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// One or more attribute-level validation failures
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Attribute URN could not be resolved against the given resource types
    #[error("URN resolution error: {0}")]
    Urn(#[from] UrnError),

    /// Extension accessed or set via a type that is not registered on the resource
    #[error("Extension '{extension}' is not registered on resource '{resource}'")]
    ExtensionKey { resource: String, extension: String },

    /// Merging attribute-inclusion trees produced contradictory leaf values
    #[error("Conflicting attribute filters for path '{path}'")]
    SchemaConflict { path: String },

    /// Schema document could not be turned into a model shape
    #[error("Invalid schema document: {message}")]
    InvalidSchema { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single attribute-level validation failure.
///
/// Each variant identifies the offending attribute, the characteristic that was
/// violated and, where relevant, the context the value was validated into.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Payload references a field name not declared in the target model
    #[error("Unknown attribute '{attribute}' in model '{model}'")]
    UnknownAttribute { attribute: String, model: String },

    /// Write-only value supplied in a read context
    #[error("Attribute '{attribute}' has mutability 'writeOnly' and cannot appear in {context:?}")]
    WriteOnlyInReadContext {
        attribute: String,
        context: ScimContext,
    },

    /// Immutable value changed without matching the original resource
    #[error("Attribute '{attribute}' is immutable and does not match the original value")]
    ImmutabilityViolation { attribute: String },

    /// Never-returned field populated in a response context
    #[error("Attribute '{attribute}' has returnability 'never' and cannot appear in {context:?}")]
    NeverReturnedPresent {
        attribute: String,
        context: ScimContext,
    },

    /// Always-returned field missing in a response context
    #[error("Attribute '{attribute}' has returnability 'always' but is missing in {context:?}")]
    AlwaysReturnedMissing {
        attribute: String,
        context: ScimContext,
    },

    /// Required attribute is null in a creation or replacement request
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute value doesn't match the declared type
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// Multi-valued attribute provided as single value
    #[error("Attribute '{attribute}' must be multi-valued (array)")]
    ExpectedMultiValue { attribute: String },

    /// Single-valued attribute provided as array
    #[error("Attribute '{attribute}' must be single-valued (not array)")]
    ExpectedSingleValue { attribute: String },

    /// Value outside the declared canonical values
    #[error("Attribute '{attribute}' has invalid value '{value}', allowed values: {allowed:?}")]
    InvalidCanonicalValue {
        attribute: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Invalid RFC3339 datetime
    #[error("Attribute '{attribute}' has invalid datetime format: {value}")]
    InvalidDateTimeFormat { attribute: String, value: String },

    /// Invalid base64 payload for a binary attribute
    #[error("Attribute '{attribute}' has invalid binary data: {details}")]
    InvalidBinaryData { attribute: String, details: String },

    /// Invalid reference URI
    #[error("Attribute '{attribute}' has invalid reference URI: {uri}")]
    InvalidReferenceUri { attribute: String, uri: String },

    /// Integer outside the supported range
    #[error("Attribute '{attribute}' has invalid integer value: {value}")]
    InvalidIntegerValue { attribute: String, value: String },

    /// Missing 'schemas' attribute on a resource payload
    #[error("Missing required 'schemas' attribute")]
    MissingSchemas,

    /// 'schemas[0]' does not name the resource's own schema
    #[error("'schemas[0]' must be the resource schema '{expected}', got '{actual}'")]
    PrimarySchemaMismatch { expected: String, actual: String },

    /// Empty 'schemas' array
    #[error("'schemas' array cannot be empty")]
    EmptySchemas,
}

/// The aggregate of all validation failures for one `validate` call.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Fold another collection of failures into this one.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a `Result`, returning `Ok(value)` when no failure was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ScimError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(ScimError::Validation(self))
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<ValidationError> for ScimError {
    fn from(error: ValidationError) -> Self {
        ScimError::Validation(error.into())
    }
}

/// Errors raised while resolving an attribute URN against a set of resource types.
///
/// The three resolution failure modes of RFC 7644 §3.10 are kept distinct so
/// that callers can react to them individually.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrnError {
    /// The path had no schema prefix and no default resource was supplied
    #[error("Attribute path '{path}' has no schema prefix and no default resource was given")]
    MissingDefaultSchema { path: String },

    /// No candidate resource type (or extension) declares the schema URN
    #[error("No known resource declares schema '{schema}'")]
    UnknownSchema { schema: String },

    /// A path segment does not name a declared attribute
    #[error("Schema '{schema}' has no attribute '{attribute}'")]
    UnknownAttribute { schema: String, attribute: String },

    /// A non-terminal path segment names a non-complex attribute
    #[error("Attribute '{attribute}' of schema '{schema}' is not complex and cannot be traversed")]
    NotTraversable { schema: String, attribute: String },
}

impl ScimError {
    /// Create an extension-key error.
    pub fn extension_key(resource: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::ExtensionKey {
            resource: resource.into(),
            extension: extension.into(),
        }
    }

    /// Create an invalid-schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }
}

impl ValidationError {
    /// Create a missing required attribute error.
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an unknown attribute error.
    pub fn unknown_attribute(attribute: impl Into<String>, model: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
            model: model.into(),
        }
    }

    /// Create an invalid type error.
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::missing_required("userName");
        assert!(error.to_string().contains("userName"));
    }

    #[test]
    fn test_error_aggregation() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::missing_required("userName"));
        errors.push(ValidationError::unknown_attribute("bogus", "User"));
        assert_eq!(errors.errors.len(), 2);

        let result: Result<(), _> = errors.into_result(());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("userName"));
        assert!(message.contains("bogus"));
    }

    #[test]
    fn test_empty_aggregate_is_ok() {
        let errors = ValidationErrors::new();
        assert!(errors.into_result(42).is_ok());
    }

    #[test]
    fn test_urn_error_kinds_are_distinct() {
        let missing = UrnError::MissingDefaultSchema {
            path: "bar".into(),
        };
        let unknown = UrnError::UnknownSchema {
            schema: "urn:example:2.0:Foo".into(),
        };
        assert_ne!(missing, unknown);
        assert!(missing.to_string().contains("no schema prefix"));
    }
}
