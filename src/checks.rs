//! Checks encapsulate a multitude of checks that can be performed on the
//! gathered load balancers.
//!
//! Right now the following checks are implemented:
//! - targets: every target reports healthy on every service port.
//! - services: services carry health checks, HTTPS services have certificates.
//! - protection: delete protection is enabled.
//! - network: private IP targets and disabled public interfaces are backed
//!   by a private network.

pub mod load_balancer;
