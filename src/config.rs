use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.hetzner.cloud/v1";

/// Settings for [`crate::client::Client`].
///
/// ```
/// use hcloud_lb_checker::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("my-token")
///     .with_poll_interval(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) endpoint: String,
    pub(crate) token: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) poll_interval: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            user_agent: concat!("hcloud-lb-checker/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(500),
        }
    }

    /// Defaults to `https://api.hetzner.cloud/v1`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// How long to sleep between two polls of a running action.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
