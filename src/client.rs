//! Async client for the Hetzner Cloud load balancer endpoints.
//!
//! The client only moves `hcloud_schema` types over the wire; it does not
//! validate payloads before sending them and never retries a failed call.

pub mod actions;
pub mod http;
pub mod load_balancers;

use std::time::Duration;

use hcloud_schema::ErrorResponse;
use log::error;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{HcloudError, HcloudResult};
pub use http::{HttpBackend, RawResponse, ReqwestBackend};
pub use load_balancers::LoadBalancerListOpts;

pub type DefaultClient = Client<ReqwestBackend>;

pub struct Client<B: HttpBackend> {
    backend: B,
    poll_interval: Duration,
}

impl DefaultClient {
    pub fn new(config: &ClientConfig) -> HcloudResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            poll_interval: config.poll_interval(),
        })
    }
}

impl<B: HttpBackend> Client<B> {
    pub fn with_backend(backend: B, poll_interval: Duration) -> Self {
        Self {
            backend,
            poll_interval,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Sends a request and fails on any non-2xx status.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> HcloudResult<RawResponse> {
        let raw = self.backend.request(method, path, query, body).await?;
        if raw.is_success() {
            Ok(raw)
        } else {
            Err(error_from_response(path, raw))
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> HcloudResult<T> {
        let raw = self.execute(method, path, query, body).await?;
        Ok(serde_json::from_str(&raw.body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> HcloudResult<T> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post<R: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &R,
    ) -> HcloudResult<T> {
        let body = serde_json::to_value(request)?;
        self.send(Method::POST, path, &[], Some(body)).await
    }

    async fn put<R: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &R,
    ) -> HcloudResult<T> {
        let body = serde_json::to_value(request)?;
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> HcloudResult<()> {
        self.execute(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

fn error_from_response(path: &str, raw: RawResponse) -> HcloudError {
    match serde_json::from_str::<ErrorResponse>(&raw.body) {
        Ok(resp) => {
            error!(
                "Request to {} failed with {}: {}",
                path, resp.error.code, resp.error.message
            );
            HcloudError::Api {
                status: raw.status,
                code: resp.error.code,
                message: resp.error.message,
            }
        }
        Err(_) => {
            error!("Request to {} failed with status {}", path, raw.status);
            HcloudError::UnexpectedStatus {
                status: raw.status,
                path: path.to_string(),
                body: raw.body,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_api_body() {
        let raw = RawResponse {
            status: 422,
            body: r#"{"error": {"code": "invalid_input", "message": "invalid input in field 'name'"}}"#
                .to_string(),
        };
        match error_from_response("/load_balancers", raw) {
            HcloudError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 422);
                assert_eq!(code, "invalid_input");
                assert!(message.contains("name"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_from_unknown_body() {
        let raw = RawResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert!(matches!(
            error_from_response("/load_balancers", raw),
            HcloudError::UnexpectedStatus { status: 502, .. }
        ));
    }

    #[test]
    fn test_default_client_creation() {
        let config = ClientConfig::new("token");
        assert!(DefaultClient::new(&config).is_ok());
    }
}
