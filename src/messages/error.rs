//! The Error response envelope (RFC 7644 §3.12).

use serde::{Deserialize, Serialize};

use super::urns;

/// SCIM-specific error detail keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScimType {
    InvalidFilter,
    TooMany,
    Uniqueness,
    Mutability,
    InvalidSyntax,
    InvalidPath,
    NoTarget,
    InvalidValue,
    InvalidVers,
    Sensitive,
}

/// An error response body. The HTTP status is carried as a JSON string on the
/// wire, per the RFC's examples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
    #[serde(with = "status_string")]
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scim_type: Option<ScimType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

fn default_schemas() -> Vec<String> {
    vec![urns::ERROR.to_string()]
}

impl ErrorResponse {
    pub fn new(status: u16) -> Self {
        Self {
            schemas: default_schemas(),
            status,
            scim_type: None,
            detail: None,
        }
    }

    pub fn with_scim_type(mut self, scim_type: ScimType) -> Self {
        self.scim_type = Some(scim_type);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// HTTP status codes as JSON strings, accepting numbers on input for
/// interoperability with lax producers.
pub(crate) mod status_string {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(status: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&status.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(status) => Ok(status),
            Raw::Text(text) => text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid status '{text}'"))),
        }
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            status: &Option<u16>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match status {
                Some(status) => super::serialize(status, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u16>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] u16);
            Option::<Wrapper>::deserialize(deserializer)
                .map(|wrapped| wrapped.map(|Wrapper(status)| status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_as_string() {
        let error = ErrorResponse::new(400)
            .with_scim_type(ScimType::InvalidValue)
            .with_detail("Attribute 'userName' is required");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["status"], "400");
        assert_eq!(value["scimType"], "invalidValue");
    }

    #[test]
    fn test_status_accepts_number_on_input() {
        let error: ErrorResponse =
            serde_json::from_value(json!({"status": 404})).unwrap();
        assert_eq!(error.status, 404);
        let error: ErrorResponse =
            serde_json::from_value(json!({"status": "409", "scimType": "uniqueness"})).unwrap();
        assert_eq!(error.status, 409);
        assert_eq!(error.scim_type, Some(ScimType::Uniqueness));
    }
}
