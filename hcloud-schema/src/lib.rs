//! Wire-format types for the Hetzner Cloud load balancer API.
//!
//! Every type here mirrors a JSON body sent to or received from the API.
//! Optional fields are skipped when unset, so a `None` never reaches the
//! wire as `null` unless the API itself documents the field as nullable.

mod action;
mod error;
mod load_balancer;
mod load_balancer_type;
mod location;
mod meta;

pub use action::*;
pub use error::*;
pub use load_balancer::*;
pub use load_balancer_type::*;
pub use location::*;
pub use meta::*;
