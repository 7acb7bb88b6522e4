//! Canonical resource builder.
//!
//! Maps the current form fields onto one `DNSPolicy` document. The mapping is
//! pure: it is run after every field change to feed the document editor, and
//! once more at submit time so the created resource never comes from a stale
//! copy.

use std::collections::BTreeMap;

use super::fields::{CustomWeightField, LabelPair, LoadBalancingField, PolicyFields};
use super::policy::{
    CustomWeight, DnsPolicy, DnsPolicySpec, LabelSelector, LoadBalancing, PolicyMetadata,
    RoutingStrategy, TargetReference, WeightedConfig, API_VERSION, KIND,
};

/// Build the canonical document from the form fields and the active namespace.
///
/// `loadBalancing` is only present for the `loadbalanced` strategy and
/// `healthCheck` only when an endpoint is set. Empty names are carried through
/// as-is; whether the result may be submitted is decided by
/// [`is_valid`](super::validity::is_valid).
pub fn build(fields: &PolicyFields, namespace: &str) -> DnsPolicy {
    let load_balancing = match fields.routing_strategy {
        RoutingStrategy::Loadbalanced => Some(build_load_balancing(&fields.load_balancing)),
        RoutingStrategy::Simple => None,
    };

    let health_check = if fields.health_check.endpoint.is_empty() {
        None
    } else {
        Some(fields.health_check.clone())
    };

    DnsPolicy {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: PolicyMetadata {
            name: fields.policy_name.clone(),
            namespace: namespace.to_string(),
        },
        spec: DnsPolicySpec {
            routing_strategy: fields.routing_strategy,
            target_ref: TargetReference::gateway(
                fields.gateway.name.clone(),
                fields.gateway.namespace.clone(),
            ),
            load_balancing,
            health_check,
        },
    }
}

fn build_load_balancing(field: &LoadBalancingField) -> LoadBalancing {
    LoadBalancing {
        geo: field.geo.clone(),
        weighted: WeightedConfig {
            default_weight: field.weighted.default_weight,
            custom: field
                .weighted
                .custom
                .as_ref()
                .map(|custom| custom.iter().map(build_custom_weight).collect()),
        },
    }
}

fn build_custom_weight(field: &CustomWeightField) -> CustomWeight {
    CustomWeight {
        selector: LabelSelector {
            match_labels: match_labels_to_map(&field.selector.match_labels),
        },
        weight: field.weight,
    }
}

/// Collapse ordered label rows into a map. A repeated key keeps its last value.
pub fn match_labels_to_map(pairs: &[LabelPair]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|pair| (pair.key.clone(), pair.value.clone()))
        .collect()
}
