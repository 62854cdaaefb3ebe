pub mod load_balancer;

pub use crate::gatherer::hcloud::load_balancer::LoadBalancerGatherer;

use hcloud_schema::LoadBalancer;
use log::info;

use crate::client::{Client, HttpBackend};
use crate::error::HcloudResult;
use crate::gatherer::Gatherer;
use crate::types::LoadBalancerSelector;

/// Largest page size the API accepts.
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct HcloudData {
    pub load_balancers: Vec<LoadBalancer>,
}

pub async fn gather<B: HttpBackend>(
    client: &Client<B>,
    selector: &LoadBalancerSelector,
) -> HcloudResult<HcloudData> {
    let load_balancers = LoadBalancerGatherer { client, selector }.gather().await?;
    info!("Gathered {} load balancers", load_balancers.len());
    Ok(HcloudData { load_balancers })
}
