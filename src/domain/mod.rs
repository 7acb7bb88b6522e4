use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod error;
pub mod fields;
pub mod policy;
pub mod submission;
pub mod validity;
pub mod view_mode;

pub use builder::build;
pub use error::{CreateError, CreateResult};
pub use fields::{
    CustomWeightField, GatewaySelection, LabelPair, LoadBalancingField, PolicyFields,
    SelectorField, WeightedField,
};
pub use policy::*;
pub use submission::{
    ErrorChannel, Refusal, SubmissionController, SubmissionState, SubmitOutcome,
};
pub use validity::is_valid;
pub use view_mode::ViewMode;

/// API model of a resource kind: where instances of it live on the cluster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Empty for the core group
    pub api_group: String,
    pub api_version: String,
    pub kind: String,
    pub plural: String,
    pub namespaced: bool,
}

impl ResourceDescriptor {
    /// Collection path that a create request is posted to
    pub fn collection_path(&self, namespace: &str) -> String {
        let prefix = if self.api_group.is_empty() {
            format!("/api/{}", self.api_version)
        } else {
            format!("/apis/{}/{}", self.api_group, self.api_version)
        };

        if self.namespaced && !namespace.is_empty() {
            format!("{}/namespaces/{}/{}", prefix, namespace, self.plural)
        } else {
            format!("{}/{}", prefix, self.plural)
        }
    }
}

/// Source of the namespace currently selected in the console
pub trait NamespaceProvider: Send + Sync {
    fn active_namespace(&self) -> String;
}

/// Looks up the API model for an `apiVersion`/`kind` pair
pub trait DescriptorResolver: Send + Sync {
    fn resolve(&self, api_version: &str, kind: &str) -> ResourceDescriptor;
}

#[async_trait]
pub trait ResourceCreator: Send + Sync {
    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        document: &DnsPolicy,
        namespace: &str,
    ) -> CreateResult<()>;
}

/// Fire-and-forget page navigation
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(api_group: &str, namespaced: bool) -> ResourceDescriptor {
        ResourceDescriptor {
            api_group: api_group.to_string(),
            api_version: "v1alpha1".to_string(),
            kind: "DNSPolicy".to_string(),
            plural: "dnspolicies".to_string(),
            namespaced,
        }
    }

    #[test]
    fn test_collection_path_namespaced() {
        assert_eq!(
            descriptor("kuadrant.io", true).collection_path("team-a"),
            "/apis/kuadrant.io/v1alpha1/namespaces/team-a/dnspolicies"
        );
    }

    #[test]
    fn test_collection_path_core_group() {
        assert_eq!(
            descriptor("", true).collection_path("team-a"),
            "/api/v1alpha1/namespaces/team-a/dnspolicies"
        );
    }

    #[test]
    fn test_collection_path_cluster_scoped() {
        assert_eq!(
            descriptor("kuadrant.io", false).collection_path("team-a"),
            "/apis/kuadrant.io/v1alpha1/dnspolicies"
        );
    }
}
