use serde::Deserialize;
use serde::Serialize;

/// Envelope the API wraps around every non-2xx response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub const ERROR_CODE_NOT_FOUND: &str = "not_found";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_without_details() {
        let resp: ErrorResponse = serde_json::from_value(json!({
            "error": {"code": "not_found", "message": "load balancer with ID '1' not found"}
        }))
        .unwrap();
        assert_eq!(resp.error.code, ERROR_CODE_NOT_FOUND);
        assert!(resp.error.details.is_none());
        let encoded = serde_json::to_value(&resp).unwrap();
        assert!(encoded["error"].get("details").is_none());
    }

    #[test]
    fn test_error_with_details_round_trip() {
        let resp = ErrorResponse {
            error: ApiError {
                code: "invalid_input".to_string(),
                message: "invalid input in field 'name'".to_string(),
                details: Some(json!({
                    "fields": [{"name": "name", "messages": ["is too long"]}]
                })),
            },
        };
        let decoded: ErrorResponse =
            serde_json::from_value(serde_json::to_value(&resp).unwrap()).unwrap();
        assert_eq!(decoded, resp);
    }
}
