use hcloud_schema::{
    Action, ActionResponse, LoadBalancer, LoadBalancerActionAddServiceRequest,
    LoadBalancerActionAddTargetRequest, LoadBalancerActionAttachToNetworkRequest,
    LoadBalancerActionChangeAlgorithmRequest, LoadBalancerActionChangeProtectionRequest,
    LoadBalancerActionDetachFromNetworkRequest, LoadBalancerActionDisablePublicInterfaceRequest,
    LoadBalancerActionEnablePublicInterfaceRequest, LoadBalancerActionRemoveTargetRequest,
    LoadBalancerActionUpdateServiceRequest, LoadBalancerCreateRequest,
    LoadBalancerCreateResponse, LoadBalancerDeleteServiceRequest, LoadBalancerGetResponse,
    LoadBalancerListResponse, LoadBalancerUpdateRequest, LoadBalancerUpdateResponse, Meta,
};
use log::{debug, info, warn};
use serde::Serialize;

use super::{Client, HttpBackend};
use crate::error::HcloudResult;

/// Filters and paging for `GET /load_balancers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancerListOpts {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub label_selector: Option<String>,
    pub name: Option<String>,
}

impl LoadBalancerListOpts {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![];
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(ref selector) = self.label_selector {
            query.push(("label_selector".to_string(), selector.clone()));
        }
        if let Some(ref name) = self.name {
            query.push(("name".to_string(), name.clone()));
        }
        query
    }
}

fn load_balancer_path(id: i64) -> String {
    format!("/load_balancers/{}", id)
}

fn action_path(id: i64, action: &str) -> String {
    format!("/load_balancers/{}/actions/{}", id, action)
}

impl<B: HttpBackend> Client<B> {
    /// Returns `None` if the API reports the load balancer as not found.
    pub async fn get_load_balancer(&self, id: i64) -> HcloudResult<Option<LoadBalancer>> {
        debug!("Retrieving load balancer {}", id);
        match self
            .get::<LoadBalancerGetResponse>(&load_balancer_path(id), &[])
            .await
        {
            Ok(resp) => Ok(Some(resp.load_balancer)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn get_load_balancer_by_name(&self, name: &str) -> HcloudResult<Option<LoadBalancer>> {
        let opts = LoadBalancerListOpts {
            name: Some(name.to_string()),
            ..Default::default()
        };
        let (load_balancers, _) = self.list_load_balancers(&opts).await?;
        Ok(load_balancers.into_iter().next())
    }

    /// Returns a single page of load balancers.
    pub async fn list_load_balancers(
        &self,
        opts: &LoadBalancerListOpts,
    ) -> HcloudResult<(Vec<LoadBalancer>, Option<Meta>)> {
        debug!("Listing load balancers with {:?}", opts);
        let resp: LoadBalancerListResponse = self.get("/load_balancers", &opts.query()).await?;
        Ok((resp.load_balancers, resp.meta))
    }

    /// Follows `meta.pagination.next_page` until the last page.
    pub async fn all_load_balancers(
        &self,
        opts: &LoadBalancerListOpts,
    ) -> HcloudResult<Vec<LoadBalancer>> {
        let mut opts = opts.clone();
        let mut page = opts.page.unwrap_or(1);
        let mut all = vec![];
        loop {
            opts.page = Some(page);
            let (load_balancers, meta) = self.list_load_balancers(&opts).await?;
            all.extend(load_balancers);
            match meta.and_then(|m| m.next_page()) {
                Some(next) if next > page => page = next,
                Some(next) => {
                    warn!("Stopping pagination: next page {} follows page {}", next, page);
                    break;
                }
                None => break,
            }
        }
        Ok(all)
    }

    pub async fn create_load_balancer(
        &self,
        request: &LoadBalancerCreateRequest,
    ) -> HcloudResult<LoadBalancerCreateResponse> {
        info!("Creating load balancer {}", request.name);
        self.post("/load_balancers", request).await
    }

    pub async fn update_load_balancer(
        &self,
        id: i64,
        request: &LoadBalancerUpdateRequest,
    ) -> HcloudResult<LoadBalancer> {
        info!("Updating load balancer {}", id);
        let resp: LoadBalancerUpdateResponse = self.put(&load_balancer_path(id), request).await?;
        Ok(resp.load_balancer)
    }

    pub async fn delete_load_balancer(&self, id: i64) -> HcloudResult<()> {
        info!("Deleting load balancer {}", id);
        self.delete(&load_balancer_path(id)).await
    }

    async fn run_action<R: Serialize + Sync>(
        &self,
        id: i64,
        action: &str,
        request: &R,
    ) -> HcloudResult<Action> {
        info!("Running {} on load balancer {}", action, id);
        let resp: ActionResponse = self.post(&action_path(id, action), request).await?;
        debug!("Started action {} ({})", resp.action.id, resp.action.command);
        Ok(resp.action)
    }

    pub async fn add_target(
        &self,
        id: i64,
        request: &LoadBalancerActionAddTargetRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "add_target", request).await
    }

    pub async fn remove_target(
        &self,
        id: i64,
        request: &LoadBalancerActionRemoveTargetRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "remove_target", request).await
    }

    pub async fn add_service(
        &self,
        id: i64,
        request: &LoadBalancerActionAddServiceRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "add_service", request).await
    }

    pub async fn update_service(
        &self,
        id: i64,
        request: &LoadBalancerActionUpdateServiceRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "update_service", request).await
    }

    pub async fn delete_service(&self, id: i64, listen_port: u16) -> HcloudResult<Action> {
        self.run_action(
            id,
            "delete_service",
            &LoadBalancerDeleteServiceRequest { listen_port },
        )
        .await
    }

    pub async fn change_protection(
        &self,
        id: i64,
        request: &LoadBalancerActionChangeProtectionRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "change_protection", request).await
    }

    pub async fn change_algorithm(
        &self,
        id: i64,
        request: &LoadBalancerActionChangeAlgorithmRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "change_algorithm", request).await
    }

    pub async fn attach_to_network(
        &self,
        id: i64,
        request: &LoadBalancerActionAttachToNetworkRequest,
    ) -> HcloudResult<Action> {
        self.run_action(id, "attach_to_network", request).await
    }

    pub async fn detach_from_network(&self, id: i64, network: i64) -> HcloudResult<Action> {
        self.run_action(
            id,
            "detach_from_network",
            &LoadBalancerActionDetachFromNetworkRequest { network },
        )
        .await
    }

    pub async fn enable_public_interface(&self, id: i64) -> HcloudResult<Action> {
        self.run_action(
            id,
            "enable_public_interface",
            &LoadBalancerActionEnablePublicInterfaceRequest {},
        )
        .await
    }

    pub async fn disable_public_interface(&self, id: i64) -> HcloudResult<Action> {
        self.run_action(
            id,
            "disable_public_interface",
            &LoadBalancerActionDisablePublicInterfaceRequest {},
        )
        .await
    }
}
