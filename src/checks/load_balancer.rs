//! This checker provides load balancer configuration checks.

use crate::types::{VerificationResult, Verifier};
use derive_builder::Builder;
use hcloud_schema::{
    LoadBalancer, LoadBalancerService, LoadBalancerServiceProtocol,
    LoadBalancerTargetHealthStatusStatus,
};
use itertools::Itertools;
use log::{debug, info};

#[derive(Debug, Builder)]
pub struct LoadBalancerChecks {
    #[builder(default = "vec![]")]
    load_balancers: Vec<LoadBalancer>,
}

fn port_of(service: &LoadBalancerService) -> String {
    service
        .listen_port
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_string())
}

impl LoadBalancerChecks {
    /// Every target must report healthy for every service port.
    pub fn verify_targets(&self) -> Vec<VerificationResult> {
        info!("Checking target health");
        let mut verification_results = vec![];
        for lb in self.load_balancers.iter() {
            if lb.targets.is_empty() {
                verification_results.push(VerificationResult::warning(format!(
                    "LoadBalancer '{}' has no targets",
                    lb.name
                )));
                continue;
            }
            let mut all_healthy = true;
            for target in lb.targets.iter() {
                debug!("Checking target {} of {}", target.describe(), lb.name);
                let ports_with = |status: LoadBalancerTargetHealthStatusStatus| {
                    target
                        .health_status
                        .iter()
                        .filter(|h| h.status == status)
                        .map(|h| h.listen_port)
                        .join(", ")
                };
                let unhealthy = ports_with(LoadBalancerTargetHealthStatusStatus::Unhealthy);
                if !unhealthy.is_empty() {
                    all_healthy = false;
                    verification_results.push(VerificationResult::critical(format!(
                        "LoadBalancer '{}': target {} is unhealthy on port(s) {}",
                        lb.name,
                        target.describe(),
                        unhealthy
                    )));
                }
                let unknown = ports_with(LoadBalancerTargetHealthStatusStatus::Unknown);
                if !unknown.is_empty() {
                    all_healthy = false;
                    verification_results.push(VerificationResult::warning(format!(
                        "LoadBalancer '{}': target {} has unknown health on port(s) {}",
                        lb.name,
                        target.describe(),
                        unknown
                    )));
                }
            }
            if all_healthy {
                verification_results.push(VerificationResult::ok(format!(
                    "All targets of LoadBalancer '{}' are healthy",
                    lb.name
                )));
            }
        }
        verification_results
    }

    /// Services should be health checked and HTTPS services need at least
    /// one certificate.
    pub fn verify_services(&self) -> Vec<VerificationResult> {
        info!("Checking services");
        let mut verification_results = vec![];
        for lb in self.load_balancers.iter() {
            if lb.services.is_empty() {
                verification_results.push(VerificationResult::warning(format!(
                    "LoadBalancer '{}' has no services",
                    lb.name
                )));
                continue;
            }
            let mut correct = true;
            for service in lb.services.iter() {
                if service.health_check.is_none() {
                    correct = false;
                    verification_results.push(VerificationResult::warning(format!(
                        "Service on port {} of LoadBalancer '{}' has no health check",
                        port_of(service),
                        lb.name
                    )));
                }
                let has_certificates = service
                    .http
                    .as_ref()
                    .and_then(|h| h.certificates.as_ref())
                    .is_some_and(|c| !c.is_empty());
                if service.protocol == LoadBalancerServiceProtocol::Https && !has_certificates {
                    correct = false;
                    verification_results.push(VerificationResult::critical(format!(
                        "HTTPS service on port {} of LoadBalancer '{}' has no certificates",
                        port_of(service),
                        lb.name
                    )));
                }
            }
            if correct {
                verification_results.push(VerificationResult::ok(format!(
                    "Services of LoadBalancer '{}' seem correctly setup.",
                    lb.name
                )));
            }
        }
        verification_results
    }

    pub fn verify_protection(&self) -> Vec<VerificationResult> {
        info!("Checking delete protection");
        self.load_balancers
            .iter()
            .map(|lb| {
                if lb.protection.delete {
                    VerificationResult::ok(format!(
                        "LoadBalancer '{}' is protected against deletion",
                        lb.name
                    ))
                } else {
                    VerificationResult::warning(format!(
                        "LoadBalancer '{}' is not protected against deletion",
                        lb.name
                    ))
                }
            })
            .collect()
    }

    /// Private IP targets are only reachable through an attached network,
    /// and a load balancer without public interface is only reachable
    /// through one.
    pub fn verify_network(&self) -> Vec<VerificationResult> {
        info!("Checking network setup");
        let mut verification_results = vec![];
        for lb in self.load_balancers.iter() {
            let has_private_net = !lb.private_net.is_empty();
            let mut correct = true;
            if !has_private_net {
                for target in lb.targets.iter().filter(|t| t.use_private_ip == Some(true)) {
                    correct = false;
                    verification_results.push(VerificationResult::critical(format!(
                        "LoadBalancer '{}' reaches {} via private IP but is not attached to a network",
                        lb.name,
                        target.describe()
                    )));
                }
                if !lb.public_net.enabled {
                    correct = false;
                    verification_results.push(VerificationResult::critical(format!(
                        "LoadBalancer '{}' has neither a public interface nor a private network",
                        lb.name
                    )));
                }
            }
            if correct {
                verification_results.push(VerificationResult::ok(format!(
                    "Network setup of LoadBalancer '{}' seems correct",
                    lb.name
                )));
            }
        }
        verification_results
    }
}

impl Verifier for LoadBalancerChecks {
    fn verify(&self) -> Vec<VerificationResult> {
        let mut results = self.verify_targets();
        results.extend(self.verify_services());
        results.extend(self.verify_protection());
        results.extend(self.verify_network());
        results
    }
}

#[cfg(test)]
mod tests {
    use hcloud_schema::{
        LoadBalancerPrivateNet, LoadBalancerServiceHTTP, LoadBalancerTarget,
        LoadBalancerTargetHealthStatus,
    };
    use serde_json::json;

    use super::*;
    use crate::testing::{load_balancer, load_balancer_json};
    use crate::types::Severity;

    fn checks(load_balancers: Vec<LoadBalancer>) -> LoadBalancerChecks {
        LoadBalancerChecksBuilder::default()
            .load_balancers(load_balancers)
            .build()
            .unwrap()
    }

    #[test]
    fn test_verify_targets_healthy() {
        let results = checks(vec![load_balancer(1, "web")]).verify_targets();
        assert_eq!(
            results,
            vec![VerificationResult::ok("All targets of LoadBalancer 'web' are healthy")]
        );
    }

    #[test]
    fn test_verify_targets_unhealthy_and_unknown() {
        let mut lb = load_balancer(1, "web");
        lb.targets[0].health_status = vec![
            LoadBalancerTargetHealthStatus {
                listen_port: 80,
                status: LoadBalancerTargetHealthStatusStatus::Unhealthy,
            },
            LoadBalancerTargetHealthStatus {
                listen_port: 443,
                status: LoadBalancerTargetHealthStatusStatus::Unhealthy,
            },
            LoadBalancerTargetHealthStatus {
                listen_port: 8080,
                status: LoadBalancerTargetHealthStatusStatus::Unknown,
            },
        ];
        let results = checks(vec![lb]).verify_targets();
        assert_eq!(
            results,
            vec![
                VerificationResult::critical(
                    "LoadBalancer 'web': target server 80 is unhealthy on port(s) 80, 443"
                ),
                VerificationResult::warning(
                    "LoadBalancer 'web': target server 80 has unknown health on port(s) 8080"
                ),
            ]
        );
    }

    #[test]
    fn test_verify_targets_empty() {
        let mut lb = load_balancer(1, "web");
        lb.targets.clear();
        let results = checks(vec![lb]).verify_targets();
        assert_eq!(results[0].severity, Severity::Warning);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_verify_services_correct() {
        let results = checks(vec![load_balancer(1, "web")]).verify_services();
        assert_eq!(
            results,
            vec![VerificationResult::ok(
                "Services of LoadBalancer 'web' seem correctly setup."
            )]
        );
    }

    #[test]
    fn test_verify_services_https_without_certificates() {
        let mut lb = load_balancer(1, "web");
        lb.services[0].protocol = LoadBalancerServiceProtocol::Https;
        lb.services[0].listen_port = Some(443);
        lb.services[0].health_check = None;
        let results = checks(vec![lb.clone()]).verify_services();
        assert_eq!(
            results,
            vec![
                VerificationResult::warning(
                    "Service on port 443 of LoadBalancer 'web' has no health check"
                ),
                VerificationResult::critical(
                    "HTTPS service on port 443 of LoadBalancer 'web' has no certificates"
                ),
            ]
        );

        lb.services[0].http = Some(LoadBalancerServiceHTTP {
            certificates: Some(vec![897]),
            ..Default::default()
        });
        let results = checks(vec![lb]).verify_services();
        assert!(results.iter().all(|r| r.severity != Severity::Critical));
    }

    #[test]
    fn test_verify_protection() {
        let mut unprotected = load_balancer(2, "api");
        unprotected.protection.delete = false;
        let results = checks(vec![load_balancer(1, "web"), unprotected]).verify_protection();
        assert_eq!(results[0].severity, Severity::Ok);
        assert_eq!(
            results[1],
            VerificationResult::warning("LoadBalancer 'api' is not protected against deletion")
        );
    }

    #[test]
    fn test_verify_network_private_target_without_network() {
        let mut lb = load_balancer(1, "web");
        lb.targets[0].use_private_ip = Some(true);
        let results = checks(vec![lb.clone()]).verify_network();
        assert_eq!(
            results,
            vec![VerificationResult::critical(
                "LoadBalancer 'web' reaches server 80 via private IP but is not attached to a network"
            )]
        );

        lb.private_net.push(LoadBalancerPrivateNet {
            network: 4711,
            ip: "10.0.255.1".to_string(),
        });
        let results = checks(vec![lb]).verify_network();
        assert_eq!(results[0].severity, Severity::Ok);
    }

    #[test]
    fn test_verify_network_unreachable() {
        let mut lb = load_balancer(1, "web");
        lb.public_net.enabled = false;
        lb.targets = vec![LoadBalancerTarget::server(81)];
        let results = checks(vec![lb]).verify_network();
        assert_eq!(
            results,
            vec![VerificationResult::critical(
                "LoadBalancer 'web' has neither a public interface nor a private network"
            )]
        );
    }

    #[test]
    fn test_verify_network_decodes_disabled_public_interface() {
        let mut payload = load_balancer_json(1, "web");
        payload["public_net"] = json!({
            "enabled": false,
            "ipv4": {"ip": null},
            "ipv6": {"ip": null}
        });
        let lb: LoadBalancer = serde_json::from_value(payload).unwrap();
        let results = checks(vec![lb]).verify_network();
        assert_eq!(
            results,
            vec![VerificationResult::critical(
                "LoadBalancer 'web' has neither a public interface nor a private network"
            )]
        );
    }

    #[test]
    fn test_verify_runs_all_checks() {
        let results = checks(vec![load_balancer(1, "web")]).verify();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.severity == Severity::Ok));
    }
}
