use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod draft;
pub mod validator;

pub use draft::{load_draft, DraftError};

use crate::cli::Cli;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub cluster: ClusterSettings,
    pub console: ConsoleSettings,
}

/// Connection to the API server that resources are created on
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClusterSettings {
    /// Base URL, e.g. "https://api.cluster.example:6443" or a `kubectl proxy`
    pub api_url: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConsoleSettings {
    /// Namespace selected in the console
    pub namespace: String,
    /// Path visited after a successful create
    pub created_path: String,
    /// Path visited when the operator cancels
    pub cancel_path: String,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_file("dnspolicy.toml")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("cluster.api_url", "http://127.0.0.1:8001")?
            .set_default("console.namespace", "default")?
            .set_default("console.created_path", "/kuadrant/all-namespaces/policies/dns")?
            .set_default("console.cancel_path", "/kuadrant/all-namespaces/policies")?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DNSPOLICY").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(api_url) = &cli.api_url {
            self.cluster.api_url = api_url.clone();
        }
        if let Some(token) = &cli.token {
            self.cluster.token = Some(token.clone());
        }
        if let Some(namespace) = &cli.namespace {
            self.console.namespace = namespace.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
