//! Response schema - JSON envelope returned by every boundary operation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::TabloError;

/// Structured result of a workflow action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,

    /// HTTP-like status code
    pub status: u16,

    /// Hungarian message for the guest user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Machine-readable error or reason code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    #[serde(default)]
    pub data: Value,
}

impl ActionResponse {
    /// Create a successful response carrying `data`
    pub fn success(data: Value) -> Self {
        ActionResponse {
            success: true,
            status: 200,
            error: None,
            error_code: None,
            data,
        }
    }

    /// Fold an error into a failed response
    pub fn failure(error: &TabloError) -> Self {
        let error_code = match error {
            TabloError::InvalidState { reason, .. } => reason.code().to_string(),
            other => other.code().to_string(),
        };
        ActionResponse {
            success: false,
            status: error.status(),
            error: Some(error.user_message()),
            error_code: Some(error_code),
            data: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<crate::errors::Result<Value>> for ActionResponse {
    fn from(result: crate::errors::Result<Value>) -> Self {
        match result {
            Ok(data) => ActionResponse::success(data),
            Err(e) => ActionResponse::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidStateReason;
    use serde_json::json;

    #[test]
    fn test_success_response_omits_error_fields() {
        let response = ActionResponse::success(json!({"claimed_count": 2}));
        let json = serde_json::to_string(&response).unwrap();

        assert!(response.is_success());
        assert!(json.contains("\"success\":true"));
        assert!(!json.contains("\"error\":"));
        assert!(!json.contains("\"error_code\":"));
    }

    #[test]
    fn test_failure_uses_reason_code_for_invalid_state() {
        let err = TabloError::invalid_state(InvalidStateReason::NoClaimedPhotos);
        let response = ActionResponse::failure(&err);

        assert!(!response.is_success());
        assert_eq!(response.status, 409);
        assert_eq!(response.error_code.as_deref(), Some("no_claimed_photos"));
        assert_eq!(response.data, Value::Null);
    }

    #[test]
    fn test_failure_from_forbidden() {
        let response = ActionResponse::failure(&TabloError::Forbidden("finalized".into()));
        assert_eq!(response.status, 403);
        assert_eq!(response.error_code.as_deref(), Some("FORBIDDEN"));
        assert!(response.error.is_some());
    }
}
