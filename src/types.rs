use colored::Colorize;
use derive_builder::Builder;
use std::fmt::Display;

use crate::client::LoadBalancerListOpts;

/// Which load balancers to gather.
#[derive(Debug, Clone, Default, Builder)]
pub struct LoadBalancerSelector {
    #[builder(default)]
    pub label_selector: Option<String>,
    #[builder(default)]
    pub name: Option<String>,
}

impl LoadBalancerSelector {
    pub fn list_opts(&self, per_page: u32) -> LoadBalancerListOpts {
        LoadBalancerListOpts {
            page: None,
            per_page: Some(per_page),
            label_selector: self.label_selector.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub message: String,
    pub severity: Severity,
}

impl VerificationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Ok,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Critical,
        }
    }
}

impl Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Ok => f.write_str(&self.message.green().to_string()),
            Severity::Warning => f.write_str(&self.message.yellow().to_string()),
            Severity::Critical => f.write_str(&self.message.red().to_string()),
        }
    }
}

pub trait Verifier {
    fn verify(&self) -> Vec<VerificationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_builder_to_list_opts() {
        let selector = LoadBalancerSelectorBuilder::default()
            .label_selector(Some("env=prod".to_string()))
            .build()
            .unwrap();
        let opts = selector.list_opts(50);
        assert_eq!(opts.per_page, Some(50));
        assert_eq!(opts.label_selector.as_deref(), Some("env=prod"));
        assert_eq!(opts.name, None);
        assert_eq!(opts.page, None);
    }

    #[test]
    fn test_display_keeps_message() {
        colored::control::set_override(false);
        let result = VerificationResult::critical("Target server 1 is unhealthy");
        assert_eq!(result.to_string(), "Target server 1 is unhealthy");
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Ok);
    }
}
