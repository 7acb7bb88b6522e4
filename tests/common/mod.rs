#![allow(dead_code)]

use async_trait::async_trait;
use kuadrant_dnspolicy::adapters::create_page::{Collaborators, CreatePage, PageRoutes};
use kuadrant_dnspolicy::adapters::model_catalog::ModelCatalog;
use kuadrant_dnspolicy::domain::{
    CreateError, CreateResult, DnsPolicy, NamespaceProvider, Navigator, ResourceCreator,
    ResourceDescriptor,
};
use std::sync::{Arc, Mutex};

/// Namespace that tests can switch while a page is open
#[derive(Default)]
pub struct SharedNamespace {
    namespace: Mutex<String>,
}

impl SharedNamespace {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: Mutex::new(namespace.to_string()),
        }
    }

    pub fn set(&self, namespace: &str) {
        *self.namespace.lock().unwrap() = namespace.to_string();
    }
}

impl NamespaceProvider for SharedNamespace {
    fn active_namespace(&self) -> String {
        self.namespace.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCall {
    pub descriptor: ResourceDescriptor,
    pub document: DnsPolicy,
    pub namespace: String,
}

/// Records create calls and answers with a configurable rejection
#[derive(Default)]
pub struct RecordingCreator {
    calls: Mutex<Vec<CreateCall>>,
    rejection: Mutex<Option<CreateError>>,
}

impl RecordingCreator {
    pub fn reject_with(&self, message: &str) {
        *self.rejection.lock().unwrap() = Some(CreateError::new(message));
    }

    pub fn accept(&self) {
        *self.rejection.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<CreateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceCreator for RecordingCreator {
    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        document: &DnsPolicy,
        namespace: &str,
    ) -> CreateResult<()> {
        self.calls.lock().unwrap().push(CreateCall {
            descriptor: descriptor.clone(),
            document: document.clone(),
            namespace: namespace.to_string(),
        });

        match self.rejection.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}

pub struct Harness {
    pub page: CreatePage,
    pub namespace: Arc<SharedNamespace>,
    pub creator: Arc<RecordingCreator>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(namespace: &str) -> Self {
        let namespace = Arc::new(SharedNamespace::new(namespace));
        let creator = Arc::new(RecordingCreator::default());
        let navigator = Arc::new(RecordingNavigator::default());

        let collaborators = Collaborators {
            namespaces: namespace.clone(),
            creator: creator.clone(),
            resolver: Arc::new(ModelCatalog::new()),
            navigator: navigator.clone(),
        };

        Self {
            page: CreatePage::new(collaborators, PageRoutes::default()),
            namespace,
            creator,
            navigator,
        }
    }
}
