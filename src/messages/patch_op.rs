//! The PatchOp envelope for PATCH requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::urns;

/// One of the three PATCH verbs (RFC 7644 §3.5.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperationKind {
    Add,
    Remove,
    Replace,
}

/// A single operation within a PatchOp body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatchOperation {
    pub op: PatchOperationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// A PATCH request body (RFC 7644 §3.5.2).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatchOp {
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
    #[serde(rename = "Operations")]
    pub operations: Vec<PatchOperation>,
}

fn default_schemas() -> Vec<String> {
    vec![urns::PATCH_OP.to_string()]
}

impl PatchOp {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self {
            schemas: default_schemas(),
            operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let patch: PatchOp = serde_json::from_value(json!({
            "schemas": [urns::PATCH_OP],
            "Operations": [
                {"op": "replace", "path": "active", "value": false},
                {"op": "remove", "path": "nickName"}
            ]
        }))
        .unwrap();
        assert_eq!(patch.operations.len(), 2);
        assert_eq!(patch.operations[0].op, PatchOperationKind::Replace);
        assert!(patch.operations[1].value.is_none());

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["Operations"][0]["op"], "replace");
        assert!(value["Operations"][1].get("value").is_none());
    }
}
