//! The "Create DNSPolicy" page.
//!
//! Owns every field value, the view mode, the document editor and the
//! submission state. Each mutation runs [`CreatePage::derive`], which rebuilds
//! the canonical document and re-evaluates the validity gate; the document
//! editor, when shown, is reloaded from that result. Sync is one way only:
//! fields feed the document, the document never feeds the fields.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ConsoleSettings;
use crate::domain::{
    build, is_valid, CreateResult, DescriptorResolver, DnsPolicy, ErrorChannel, GatewaySelection,
    HealthCheck, LoadBalancingField, NamespaceProvider, Navigator, PolicyFields, Refusal,
    ResourceCreator, ResourceDescriptor, RoutingStrategy, SubmissionController, SubmissionState,
    SubmitOutcome, ViewMode,
};

use super::document_editor::DocumentEditor;

/// Where the page sends the operator when it is done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoutes {
    pub created: String,
    pub cancel: String,
}

impl Default for PageRoutes {
    fn default() -> Self {
        Self {
            created: "/kuadrant/all-namespaces/policies/dns".to_string(),
            cancel: "/kuadrant/all-namespaces/policies".to_string(),
        }
    }
}

impl From<&ConsoleSettings> for PageRoutes {
    fn from(settings: &ConsoleSettings) -> Self {
        Self {
            created: settings.created_path.clone(),
            cancel: settings.cancel_path.clone(),
        }
    }
}

/// External services the page talks to
#[derive(Clone)]
pub struct Collaborators {
    pub namespaces: Arc<dyn NamespaceProvider>,
    pub creator: Arc<dyn ResourceCreator>,
    pub resolver: Arc<dyn DescriptorResolver>,
    pub navigator: Arc<dyn Navigator>,
}

/// Snapshot of what the page shows, recomputable from the fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub view_mode: ViewMode,
    pub is_submittable: bool,
    pub last_error: Option<String>,
    pub submission: SubmissionState,
}

/// Create request accepted by [`CreatePage::begin_submit`], waiting to be sent
#[derive(Debug)]
pub struct PendingCreate {
    descriptor: ResourceDescriptor,
    document: DnsPolicy,
    namespace: String,
}

impl PendingCreate {
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn document(&self) -> &DnsPolicy {
        &self.document
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

pub struct CreatePage {
    fields: PolicyFields,
    view_mode: ViewMode,
    editor: DocumentEditor,
    document: DnsPolicy,
    submittable: bool,
    controller: SubmissionController,
    errors: ErrorChannel,
    collaborators: Collaborators,
    routes: PageRoutes,
}

impl CreatePage {
    pub fn new(collaborators: Collaborators, routes: PageRoutes) -> Self {
        let fields = PolicyFields::default();
        let namespace = collaborators.namespaces.active_namespace();

        let mut page = Self {
            document: build(&fields, &namespace),
            submittable: is_valid(&fields, &namespace),
            fields,
            view_mode: ViewMode::Form,
            editor: DocumentEditor::new(true),
            controller: SubmissionController::new(),
            errors: ErrorChannel::default(),
            collaborators,
            routes,
        };
        page.editor.load(&page.document);
        page
    }

    pub fn fields(&self) -> &PolicyFields {
        &self.fields
    }

    pub fn set_policy_name(&mut self, name: impl Into<String>) {
        self.fields.policy_name = name.into();
        self.derive();
    }

    pub fn set_gateway(&mut self, gateway: GatewaySelection) {
        self.fields.gateway = gateway;
        self.derive();
    }

    pub fn set_routing_strategy(&mut self, strategy: RoutingStrategy) {
        self.fields.routing_strategy = strategy;
        self.derive();
    }

    pub fn set_load_balancing(&mut self, load_balancing: LoadBalancingField) {
        self.fields.load_balancing = load_balancing;
        self.derive();
    }

    pub fn set_health_check(&mut self, health_check: HealthCheck) {
        self.fields.health_check = health_check;
        self.derive();
    }

    /// Replace every field at once, e.g. from a saved draft
    pub fn set_fields(&mut self, fields: PolicyFields) {
        self.fields = fields;
        self.derive();
    }

    /// The active namespace changed outside the page
    pub fn namespace_changed(&mut self) {
        self.derive();
    }

    fn derive(&mut self) {
        let namespace = self.collaborators.namespaces.active_namespace();
        self.document = build(&self.fields, &namespace);
        self.submittable = is_valid(&self.fields, &namespace);

        if self.view_mode == ViewMode::Document {
            self.editor.load(&self.document);
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch surfaces. Entering the document view always shows the document
    /// built from the current fields; manual edits there are discarded.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode == ViewMode::Document {
            self.editor.load(&self.document);
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    /// Latest canonical document, as fed to the document editor
    pub fn document(&self) -> &DnsPolicy {
        &self.document
    }

    /// YAML of the document a submit would create right now. Unlike the
    /// editor text this never carries manual edits or a stale snapshot.
    pub fn document_yaml(&self) -> Result<String, serde_yaml::Error> {
        self.document.to_yaml()
    }

    pub fn editor(&self) -> &DocumentEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut DocumentEditor {
        &mut self.editor
    }

    pub fn is_submittable(&self) -> bool {
        self.submittable
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors.current()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.dismiss();
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn state(&self) -> PageState {
        PageState {
            view_mode: self.view_mode,
            is_submittable: self.submittable,
            last_error: self.errors.current().map(str::to_string),
            submission: self.controller.state(),
        }
    }

    /// Start a submit attempt.
    ///
    /// The gate is evaluated against the namespace as it is now, and the
    /// document is rebuilt rather than taken from the editor. Refused while
    /// another attempt is outstanding.
    pub fn begin_submit(&mut self) -> Result<PendingCreate, Refusal> {
        let namespace = self.collaborators.namespaces.active_namespace();
        let gate_open = is_valid(&self.fields, &namespace);

        if let Err(refusal) = self.controller.begin(gate_open, &mut self.errors) {
            warn!(%refusal, "Submit refused");
            return Err(refusal);
        }

        let document = build(&self.fields, &namespace);
        let descriptor = self
            .collaborators
            .resolver
            .resolve(&document.api_version, &document.kind);

        Ok(PendingCreate {
            descriptor,
            document,
            namespace,
        })
    }

    /// Apply the result of the create call started by `pending`
    pub fn complete_submit(
        &mut self,
        pending: PendingCreate,
        result: CreateResult<()>,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.controller.succeed();
                info!(
                    name = %pending.document.metadata.name,
                    namespace = %pending.namespace,
                    "DNSPolicy created"
                );
                self.collaborators.navigator.go_to(&self.routes.created);
                SubmitOutcome::Created {
                    redirect: self.routes.created.clone(),
                }
            }
            Err(err) => {
                error!(
                    name = %pending.document.metadata.name,
                    namespace = %pending.namespace,
                    error = %err,
                    "Error creating DNSPolicy"
                );
                self.controller.fail(&err, &mut self.errors);
                SubmitOutcome::Failed {
                    message: err.message().to_string(),
                }
            }
        }
    }

    /// Build, gate and create in one go
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(refusal) => return SubmitOutcome::Refused(refusal),
        };

        let creator = Arc::clone(&self.collaborators.creator);
        let result = creator
            .create(&pending.descriptor, &pending.document, &pending.namespace)
            .await;

        self.complete_submit(pending, result)
    }

    pub fn cancel(&self) {
        self.collaborators.navigator.go_to(&self.routes.cancel);
    }
}
