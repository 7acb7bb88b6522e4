//! # kuadrant-dnspolicy
//!
//! Authoring core for Kuadrant `DNSPolicy` resources (`kuadrant.io/v1alpha1`).
//!
//! An operator fills in a handful of form fields (policy name, target gateway,
//! routing strategy, load balancing, health check). Every change is projected
//! into one canonical policy document, which is what the raw document view
//! shows and what gets created on the cluster.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kuadrant_dnspolicy::config::Settings;
//! use kuadrant_dnspolicy::domain::GatewaySelection;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let mut page = kuadrant_dnspolicy::create_page(&settings);
//!
//!     page.set_policy_name("edge-policy");
//!     page.set_gateway(GatewaySelection::new("gw1", "team-a"));
//!     println!("{:?}", page.submit().await);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: field values, the canonical document, the builder, the
//!   validity gate, the submission state machine, and the ports
//! - **Adapters**: the create page plus concrete collaborators (API client,
//!   model catalog, namespace source, navigator, document editor)
//! - **Config**: settings and form drafts

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::create_page::{Collaborators, CreatePage, PageRoutes};
use crate::adapters::kube_client::KubeResourceClient;
use crate::adapters::model_catalog::ModelCatalog;
use crate::adapters::namespace::StaticNamespace;
use crate::adapters::navigator::LogNavigator;
use crate::config::Settings;
use std::sync::Arc;

/// Wire a create page to the cluster and namespace named in `settings`
pub fn create_page(settings: &Settings) -> CreatePage {
    let collaborators = Collaborators {
        namespaces: Arc::new(StaticNamespace::new(settings.console.namespace.clone())),
        creator: Arc::new(KubeResourceClient::from_settings(&settings.cluster)),
        resolver: Arc::new(ModelCatalog::new()),
        navigator: Arc::new(LogNavigator),
    };

    CreatePage::new(collaborators, PageRoutes::from(&settings.console))
}
