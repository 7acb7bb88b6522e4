use crate::domain::NamespaceProvider;

/// Namespace fixed at startup from configuration or the command line
#[derive(Debug, Clone)]
pub struct StaticNamespace {
    namespace: String,
}

impl StaticNamespace {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl NamespaceProvider for StaticNamespace {
    fn active_namespace(&self) -> String {
        self.namespace.clone()
    }
}
