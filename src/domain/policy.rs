//! Canonical `DNSPolicy` resource types.
//!
//! These serialize to the exact shape the Kuadrant API expects. Absent
//! optional fields are skipped entirely rather than emitted as `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API version of the policy resource
pub const API_VERSION: &str = "kuadrant.io/v1alpha1";

/// Kind of the policy resource
pub const KIND: &str = "DNSPolicy";

/// API group of the gateway a policy attaches to
pub const GATEWAY_GROUP: &str = "gateway.networking.k8s.io";

/// Kind of the gateway a policy attaches to
pub const GATEWAY_KIND: &str = "Gateway";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnsPolicy {
    pub api_version: String,
    pub kind: String,
    pub metadata: PolicyMetadata,
    pub spec: DnsPolicySpec,
}

impl DnsPolicy {
    /// Render the document as YAML, the way the document editor shows it
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PolicyMetadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnsPolicySpec {
    pub routing_strategy: RoutingStrategy,
    pub target_ref: TargetReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancing: Option<LoadBalancing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
}

/// Reference to the gateway the policy applies to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetReference {
    pub group: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

impl TargetReference {
    pub fn gateway(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            group: GATEWAY_GROUP.to_string(),
            kind: GATEWAY_KIND.to_string(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoutingStrategy {
    #[default]
    Simple,
    Loadbalanced,
}

impl std::fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingStrategy::Simple => write!(f, "simple"),
            RoutingStrategy::Loadbalanced => write!(f, "loadbalanced"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadBalancing {
    pub geo: GeoConfig,
    pub weighted: WeightedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeoConfig {
    #[serde(default, alias = "default_geo")]
    pub default_geo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightedConfig {
    pub default_weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<CustomWeight>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomWeight {
    pub selector: LabelSelector,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(default)]
    pub match_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, alias = "failure_threshold", skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default)]
    pub protocol: HealthCheckProtocol,
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            failure_threshold: None,
            port: None,
            protocol: HealthCheckProtocol::Http,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HealthCheckProtocol {
    #[default]
    #[serde(rename = "HTTP")]
    Http,
    #[serde(rename = "HTTPS")]
    Https,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_check_skips_unset_numbers() {
        let check = HealthCheck {
            endpoint: "/healthz".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value, json!({ "endpoint": "/healthz", "protocol": "HTTP" }));
    }

    #[test]
    fn test_routing_strategy_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RoutingStrategy::Loadbalanced).unwrap(),
            json!("loadbalanced")
        );
        assert_eq!(RoutingStrategy::Simple.to_string(), "simple");
    }

    #[test]
    fn test_gateway_target_reference() {
        let target = TargetReference::gateway("gw1", "team-a");
        assert_eq!(target.group, "gateway.networking.k8s.io");
        assert_eq!(target.kind, "Gateway");
    }
}
