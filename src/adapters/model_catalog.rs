//! Static catalog of the resource models this console knows about.
//!
//! Kinds outside the catalog still resolve: the group and version come from
//! `apiVersion` and the plural is derived from the kind.

use std::collections::HashMap;

use crate::domain::{DescriptorResolver, ResourceDescriptor, KIND};

struct KnownKind {
    plural: &'static str,
    namespaced: bool,
}

pub struct ModelCatalog {
    kinds: HashMap<&'static str, KnownKind>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        let mut kinds = HashMap::new();
        kinds.insert(
            KIND,
            KnownKind {
                plural: "dnspolicies",
                namespaced: true,
            },
        );

        Self { kinds }
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorResolver for ModelCatalog {
    fn resolve(&self, api_version: &str, kind: &str) -> ResourceDescriptor {
        let (api_group, version) = split_api_version(api_version);

        match self.kinds.get(kind) {
            Some(known) => ResourceDescriptor {
                api_group: api_group.to_string(),
                api_version: version.to_string(),
                kind: kind.to_string(),
                plural: known.plural.to_string(),
                namespaced: known.namespaced,
            },
            None => {
                tracing::debug!(api_version, kind, "Kind not in catalog, deriving model");
                ResourceDescriptor {
                    api_group: api_group.to_string(),
                    api_version: version.to_string(),
                    kind: kind.to_string(),
                    plural: pluralize(&kind.to_lowercase()),
                    namespaced: true,
                }
            }
        }
    }
}

/// `kuadrant.io/v1alpha1` -> (`kuadrant.io`, `v1alpha1`); `v1` -> (``, `v1`)
fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.rsplit_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

fn pluralize(kind: &str) -> String {
    let consonant_y = kind.strip_suffix('y').filter(|stem| {
        stem.chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
    });

    if let Some(stem) = consonant_y {
        format!("{}ies", stem)
    } else if kind.ends_with('s') {
        format!("{}es", kind)
    } else {
        format!("{}s", kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dns_policy() {
        let descriptor = ModelCatalog::new().resolve("kuadrant.io/v1alpha1", "DNSPolicy");
        assert_eq!(descriptor.api_group, "kuadrant.io");
        assert_eq!(descriptor.api_version, "v1alpha1");
        assert_eq!(descriptor.plural, "dnspolicies");
        assert!(descriptor.namespaced);
    }

    #[test]
    fn test_resolve_unknown_kind() {
        let descriptor = ModelCatalog::new().resolve("example.com/v2", "WidgetPolicy");
        assert_eq!(descriptor.api_group, "example.com");
        assert_eq!(descriptor.api_version, "v2");
        assert_eq!(descriptor.plural, "widgetpolicies");
        assert!(descriptor.namespaced);
    }

    #[test]
    fn test_resolve_core_group() {
        let descriptor = ModelCatalog::new().resolve("v1", "ConfigMap");
        assert_eq!(descriptor.api_group, "");
        assert_eq!(descriptor.plural, "configmaps");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("ingress"), "ingresses");
        assert_eq!(pluralize("gateway"), "gateways");
    }
}
