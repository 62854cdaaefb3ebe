use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

use crate::action::{Action, ActionResponse};
use crate::load_balancer_type::LoadBalancerType;
use crate::location::Location;
use crate::meta::Meta;

/// Full server-side state of a single load balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: i64,
    pub name: String,
    pub public_net: LoadBalancerPublicNet,
    pub private_net: Vec<LoadBalancerPrivateNet>,
    pub location: Location,
    pub load_balancer_type: LoadBalancerType,
    pub protection: LoadBalancerProtection,
    pub labels: HashMap<String, String>,
    pub created: DateTime<Utc>,
    pub services: Vec<LoadBalancerService>,
    pub targets: Vec<LoadBalancerTarget>,
    pub algorithm: LoadBalancerAlgorithm,
}

impl LoadBalancer {
    pub fn service(&self, listen_port: u16) -> Option<&LoadBalancerService> {
        self.services
            .iter()
            .find(|s| s.listen_port == Some(listen_port))
    }
}

/// Addresses are `null` while the public interface is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPublicNet {
    pub enabled: bool,
    pub ipv4: LoadBalancerPublicNetIPv4,
    pub ipv6: LoadBalancerPublicNetIPv6,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPublicNetIPv4 {
    #[serde(default)]
    pub ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPublicNetIPv6 {
    #[serde(default)]
    pub ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPrivateNet {
    pub network: i64,
    pub ip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerAlgorithmType {
    #[default]
    RoundRobin,
    LeastConnections,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerAlgorithm {
    #[serde(rename = "type")]
    pub kind: LoadBalancerAlgorithmType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerProtection {
    pub delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerServiceProtocol {
    Tcp,
    Http,
    Https,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerService {
    pub protocol: LoadBalancerServiceProtocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxyprotocol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<LoadBalancerServiceHTTP>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<LoadBalancerServiceHealthCheck>,
}

impl LoadBalancerService {
    pub fn new(protocol: LoadBalancerServiceProtocol) -> Self {
        Self {
            protocol,
            listen_port: None,
            destination_port: None,
            proxyprotocol: None,
            http: None,
            health_check: None,
        }
    }
}

/// HTTP settings of a service. Also used as the `http` object of an
/// update-service request, where every unset field is left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerServiceHTTP {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_http: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky_sessions: Option<bool>,
}

pub type LoadBalancerUpdateServiceHTTP = LoadBalancerServiceHTTP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerServiceHealthCheckProtocol {
    Tcp,
    Http,
}

/// Interval and timeout are in seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerServiceHealthCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerServiceHealthCheckProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<LoadBalancerServiceHealthCheckHTTP>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerServiceHealthCheckHTTP {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerTargetType {
    Server,
    LabelSelector,
    Ip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTarget {
    #[serde(rename = "type")]
    pub kind: LoadBalancerTargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<LoadBalancerTargetServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<LoadBalancerTargetLabelSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<LoadBalancerTargetIP>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_status: Vec<LoadBalancerTargetHealthStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_private_ip: Option<bool>,
}

impl LoadBalancerTarget {
    pub fn server(id: i64) -> Self {
        Self {
            kind: LoadBalancerTargetType::Server,
            server: Some(LoadBalancerTargetServer { id }),
            label_selector: None,
            ip: None,
            health_status: vec![],
            use_private_ip: None,
        }
    }

    /// Human readable reference, e.g. `server 42` or `ip 203.0.113.1`.
    pub fn describe(&self) -> String {
        match self.kind {
            LoadBalancerTargetType::Server => match &self.server {
                Some(s) => format!("server {}", s.id),
                None => "server".to_string(),
            },
            LoadBalancerTargetType::LabelSelector => match &self.label_selector {
                Some(l) => format!("label selector '{}'", l.selector),
                None => "label selector".to_string(),
            },
            LoadBalancerTargetType::Ip => match &self.ip {
                Some(i) => format!("ip {}", i.ip),
                None => "ip".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerTargetHealthStatusStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTargetHealthStatus {
    pub listen_port: u16,
    pub status: LoadBalancerTargetHealthStatusStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTargetServer {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTargetLabelSelector {
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTargetIP {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListResponse {
    pub load_balancers: Vec<LoadBalancer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerGetResponse {
    pub load_balancer: LoadBalancer,
}

/// `use_private_ip` is always sent, unlike on [`LoadBalancerTarget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionAddTargetRequest {
    #[serde(rename = "type")]
    pub kind: LoadBalancerTargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<LoadBalancerTargetServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<LoadBalancerTargetLabelSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<LoadBalancerTargetIP>,
    pub use_private_ip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionRemoveTargetRequest {
    #[serde(rename = "type")]
    pub kind: LoadBalancerTargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<LoadBalancerTargetServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<LoadBalancerTargetLabelSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<LoadBalancerTargetIP>,
}

pub type LoadBalancerActionTargetResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionAddServiceRequest {
    pub protocol: LoadBalancerServiceProtocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxyprotocol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<LoadBalancerServiceHTTP>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<LoadBalancerServiceHealthCheck>,
}

impl From<LoadBalancerService> for LoadBalancerActionAddServiceRequest {
    fn from(value: LoadBalancerService) -> Self {
        Self {
            protocol: value.protocol,
            listen_port: value.listen_port,
            destination_port: value.destination_port,
            proxyprotocol: value.proxyprotocol,
            http: value.http,
            health_check: value.health_check,
        }
    }
}

pub type LoadBalancerActionAddServiceResponse = ActionResponse;

/// `listen_port` identifies the service to update and is always sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerActionUpdateServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerServiceProtocol>,
    pub listen_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxyprotocol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<LoadBalancerUpdateServiceHTTP>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<LoadBalancerServiceHealthCheck>,
}

pub type LoadBalancerActionUpdateServiceResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerDeleteServiceRequest {
    pub listen_port: u16,
}

pub type LoadBalancerDeleteServiceResponse = ActionResponse;

/// Load balancer types may be referenced by numeric ID or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdOrName {
    Id(i64),
    Name(String),
}

impl From<i64> for IdOrName {
    fn from(value: i64) -> Self {
        IdOrName::Id(value)
    }
}

impl From<&str> for IdOrName {
    fn from(value: &str) -> Self {
        IdOrName::Name(value.to_string())
    }
}

impl From<String> for IdOrName {
    fn from(value: String) -> Self {
        IdOrName::Name(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerCreateRequest {
    pub name: String,
    pub load_balancer_type: IdOrName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<LoadBalancerAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<LoadBalancerTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<LoadBalancerService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_interface: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<i64>,
}

impl LoadBalancerCreateRequest {
    pub fn new(name: impl Into<String>, load_balancer_type: impl Into<IdOrName>) -> Self {
        Self {
            name: name.into(),
            load_balancer_type: load_balancer_type.into(),
            algorithm: None,
            location: None,
            network_zone: None,
            labels: None,
            targets: vec![],
            services: vec![],
            public_interface: None,
            network: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerCreateResponse {
    pub load_balancer: LoadBalancer,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerActionChangeProtectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
}

pub type LoadBalancerActionChangeProtectionResponse = ActionResponse;

/// `labels: Some(empty)` clears all labels, `None` leaves them untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerUpdateResponse {
    pub load_balancer: LoadBalancer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionChangeAlgorithmRequest {
    #[serde(rename = "type")]
    pub kind: LoadBalancerAlgorithmType,
}

pub type LoadBalancerActionChangeAlgorithmResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionAttachToNetworkRequest {
    pub network: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

pub type LoadBalancerActionAttachToNetworkResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerActionDetachFromNetworkRequest {
    pub network: i64,
}

pub type LoadBalancerActionDetachFromNetworkResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerActionEnablePublicInterfaceRequest {}

pub type LoadBalancerActionEnablePublicInterfaceResponse = ActionResponse;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerActionDisablePublicInterfaceRequest {}

pub type LoadBalancerActionDisablePublicInterfaceResponse = ActionResponse;
