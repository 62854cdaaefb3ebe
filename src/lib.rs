//! Inspects Hetzner Cloud load balancers and reports configuration problems:
//! unhealthy targets, services without health checks or certificates,
//! missing delete protection and broken private network wiring.

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod gatherer;
pub mod types;

#[cfg(test)]
mod testing;
