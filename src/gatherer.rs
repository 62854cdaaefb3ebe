use async_trait::async_trait;

use crate::error::HcloudResult;

pub mod hcloud;

#[async_trait]
pub trait Gatherer {
    type Resource;
    async fn gather(&self) -> HcloudResult<Vec<Self::Resource>>;
}
