use super::fields::PolicyFields;

/// Minimal completeness check that enables submission.
///
/// Routing strategy and health check never take part: both have usable
/// defaults.
pub fn is_valid(fields: &PolicyFields, namespace: &str) -> bool {
    !fields.policy_name.is_empty() && !namespace.is_empty() && !fields.gateway.name.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::GatewaySelection;
    use crate::domain::policy::{HealthCheck, RoutingStrategy};

    fn fields(name: &str, gateway: &str) -> PolicyFields {
        PolicyFields {
            policy_name: name.to_string(),
            gateway: GatewaySelection::new(gateway, "team-a"),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_presence_combinations() {
        for has_name in [false, true] {
            for has_namespace in [false, true] {
                for has_gateway in [false, true] {
                    let fields = fields(
                        if has_name { "edge-policy" } else { "" },
                        if has_gateway { "gw1" } else { "" },
                    );
                    let namespace = if has_namespace { "team-a" } else { "" };

                    assert_eq!(
                        is_valid(&fields, namespace),
                        has_name && has_namespace && has_gateway,
                        "name={has_name} namespace={has_namespace} gateway={has_gateway}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_gateway_namespace_not_required() {
        let mut fields = fields("edge-policy", "gw1");
        fields.gateway.namespace.clear();
        assert!(is_valid(&fields, "team-a"));
    }

    #[test]
    fn test_strategy_and_health_check_ignored() {
        let mut fields = fields("edge-policy", "gw1");
        fields.routing_strategy = RoutingStrategy::Loadbalanced;
        fields.health_check = HealthCheck {
            endpoint: "/healthz".to_string(),
            ..Default::default()
        };
        assert!(is_valid(&fields, "team-a"));

        fields.policy_name.clear();
        assert!(!is_valid(&fields, "team-a"));
    }
}
