use async_trait::async_trait;
use hcloud_schema::LoadBalancer;
use itertools::Itertools;
use log::debug;

use crate::client::{Client, HttpBackend};
use crate::error::HcloudResult;
use crate::gatherer::Gatherer;
use crate::types::LoadBalancerSelector;

use super::PAGE_SIZE;

pub struct LoadBalancerGatherer<'a, B: HttpBackend> {
    pub client: &'a Client<B>,
    pub selector: &'a LoadBalancerSelector,
}

#[async_trait]
impl<'a, B: HttpBackend> Gatherer for LoadBalancerGatherer<'a, B> {
    type Resource = LoadBalancer;

    async fn gather(&self) -> HcloudResult<Vec<Self::Resource>> {
        debug!("Retrieving LoadBalancers for {:?}", self.selector);
        let opts = self.selector.list_opts(PAGE_SIZE);
        let load_balancers = self.client.all_load_balancers(&opts).await?;
        // Entries can move between pages while paging, so the same load
        // balancer may show up twice.
        Ok(load_balancers
            .into_iter()
            .unique_by(|lb| lb.id)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect())
    }
}
