use async_trait::async_trait;
use log::{debug, error};
use reqwest::Method;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{HcloudError, HcloudResult};

/// Status and undecoded body of an API response.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request to the API. `path` is relative to the endpoint, e.g.
/// `/load_balancers/42`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> HcloudResult<RawResponse>;
}

/// Adds a scheme to proxy settings like `proxy.local:3128`.
pub fn parse_proxy_url(raw: &str) -> HcloudResult<Url> {
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        error!("Configured proxy did not specify a scheme - falling back to HTTP.");
        format!("http://{}", raw)
    };
    Ok(Url::parse(&with_scheme)?)
}

/// Returns a `reqwest::Proxy` if env. variable 'https_proxy' is set
pub fn determine_proxy() -> HcloudResult<Option<reqwest::Proxy>> {
    let Some(raw) = std::env::var("HTTPS_PROXY")
        .or_else(|_v| std::env::var("https_proxy"))
        .ok()
    else {
        return Ok(None);
    };
    let proxy_url = parse_proxy_url(&raw)?;
    let mut proxy = reqwest::Proxy::https(proxy_url.as_str())
        .map_err(|e| HcloudError::InvalidProxy(e.to_string()))?;
    if let Some(password) = proxy_url.password() {
        proxy = proxy.basic_auth(proxy_url.username(), password);
    }
    Ok(Some(proxy))
}

pub struct ReqwestBackend {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ReqwestBackend {
    /// Will setup the client with a proxy if needed.
    pub fn new(config: &ClientConfig) -> HcloudResult<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone());
        if let Some(proxy) = determine_proxy()? {
            debug!("Using proxy");
            builder = builder.proxy(proxy);
        } else {
            debug!("Not using a proxy");
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> HcloudResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.endpoint, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> HcloudResult<RawResponse> {
        let url = self.url(path, query)?;
        debug!("{} {}", method, url);
        let mut request = self.client.request(method, url).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Response status {}: {}", status, body);
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
    }

    /// Answers requests from queued canned responses and records every
    /// request it sees. Unknown routes get a `not_found` error body.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Mutex<HashMap<(Method, String), VecDeque<RawResponse>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(
            self,
            method: Method,
            path: &str,
            status: u16,
            body: serde_json::Value,
        ) -> Self {
            let body = if body.is_null() {
                String::new()
            } else {
                body.to_string()
            };
            self.responses
                .lock()
                .unwrap()
                .entry((method, path.to_string()))
                .or_default()
                .push_back(RawResponse { status, body });
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn request(
            &self,
            method: Method,
            path: &str,
            query: &[(String, String)],
            body: Option<serde_json::Value>,
        ) -> HcloudResult<RawResponse> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                path: path.to_string(),
                query: query.to_vec(),
                body,
            });
            let canned = self
                .responses
                .lock()
                .unwrap()
                .get_mut(&(method, path.to_string()))
                .and_then(|q| q.pop_front());
            Ok(canned.unwrap_or_else(|| RawResponse {
                status: 404,
                body: serde_json::json!({
                    "error": {"code": "not_found", "message": format!("{} not found", path)}
                })
                .to_string(),
            }))
        }
    }
}
