use thiserror::Error;

pub type HcloudResult<T> = Result<T, HcloudError>;

#[derive(Debug, Error)]
pub enum HcloudError {
    /// The API answered with a documented error body.
    #[error("Hetzner Cloud API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Unexpected status {status} for {path}: {body}")]
    UnexpectedStatus {
        status: u16,
        path: String,
        body: String,
    },

    #[error("Action {id} ({command}) failed with {code}: {message}")]
    ActionFailed {
        id: i64,
        command: String,
        code: String,
        message: String,
    },

    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl HcloudError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HcloudError::Api { code, .. } if code == hcloud_schema::ERROR_CODE_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = HcloudError::Api {
            status: 409,
            code: "conflict".to_string(),
            message: "resource is locked".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("409"));
        assert!(msg.contains("resource is locked"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = HcloudError::Api {
            status: 404,
            code: "not_found".to_string(),
            message: "load balancer not found".to_string(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_action_failed_message() {
        let err = HcloudError::ActionFailed {
            id: 13,
            command: "add_target".to_string(),
            code: "action_failed".to_string(),
            message: "target is already assigned".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Action 13 (add_target) failed with action_failed: target is already assigned"
        );
    }
}
