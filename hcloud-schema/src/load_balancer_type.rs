use serde::Deserialize;
use serde::Serialize;

/// Capacity class of a load balancer, e.g. `lb11`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub max_connections: u64,
    pub max_services: u32,
    pub max_targets: u32,
    pub max_assigned_certificates: u32,
    #[serde(default)]
    pub prices: Vec<LoadBalancerTypePricing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerTypePricing {
    pub location: String,
    pub price_hourly: Price,
    pub price_monthly: Price,
}

/// Prices are decimal strings on the wire to avoid float rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub net: String,
    pub gross: String,
}
