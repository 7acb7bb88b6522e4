//! Form-side field values.
//!
//! Each field of the create form is an independent value. Widgets hand back
//! whole new values; nothing here knows how they are rendered. Drafts loaded
//! from disk deserialize straight into [`PolicyFields`].

use serde::{Deserialize, Serialize};

use super::policy::{GeoConfig, HealthCheck, RoutingStrategy};

/// Gateway picked in the target selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GatewaySelection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

impl GatewaySelection {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// One row of the match-label editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelPair {
    pub key: String,
    pub value: String,
}

impl LabelPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SelectorField {
    /// Ordered rows as entered; duplicates are allowed here
    #[serde(default)]
    pub match_labels: Vec<LabelPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomWeightField {
    #[serde(default)]
    pub selector: SelectorField,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeightedField {
    #[serde(default)]
    pub default_weight: u32,
    #[serde(default)]
    pub custom: Option<Vec<CustomWeightField>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoadBalancingField {
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub weighted: WeightedField,
}

/// All field values of the create form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PolicyFields {
    pub policy_name: String,
    pub gateway: GatewaySelection,
    pub routing_strategy: RoutingStrategy,
    pub load_balancing: LoadBalancingField,
    pub health_check: HealthCheck,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::HealthCheckProtocol;

    #[test]
    fn test_defaults_match_empty_form() {
        let fields = PolicyFields::default();
        assert!(fields.policy_name.is_empty());
        assert_eq!(fields.gateway, GatewaySelection::default());
        assert_eq!(fields.routing_strategy, RoutingStrategy::Simple);
        assert_eq!(fields.load_balancing.geo.default_geo, "");
        assert_eq!(fields.load_balancing.weighted.default_weight, 0);
        assert!(fields.load_balancing.weighted.custom.is_none());
        assert_eq!(fields.health_check.protocol, HealthCheckProtocol::Http);
        assert!(fields.health_check.failure_threshold.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
policy_name: edge-policy
gateway:
  name: gw1
"#;
        let fields: PolicyFields = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fields.policy_name, "edge-policy");
        assert_eq!(fields.gateway.name, "gw1");
        assert_eq!(fields.gateway.namespace, "");
        assert_eq!(fields.routing_strategy, RoutingStrategy::Simple);
    }
}
