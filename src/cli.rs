use clap::Parser;
use std::path::PathBuf;

use crate::domain::ViewMode;

/// Author a Kuadrant DNSPolicy and create it on the cluster
#[derive(Parser, Debug, Clone)]
#[command(name = "dnspolicy", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "DNSPOLICY_CONFIG", default_value = "dnspolicy.toml")]
    pub config: PathBuf,

    /// Form draft to load (.json, .yaml, .yml or .toml)
    #[arg(short, long, env = "DNSPOLICY_DRAFT")]
    pub draft: Option<PathBuf>,

    /// Namespace to create the policy in
    #[arg(short, long, env = "DNSPOLICY_NAMESPACE")]
    pub namespace: Option<String>,

    /// API server base URL
    #[arg(long, env = "DNSPOLICY_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token for the API server
    #[arg(long, env = "DNSPOLICY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Surface to show: "form" or "document"
    #[arg(long, default_value_t = ViewMode::Form)]
    pub view: ViewMode,

    /// Print the document without creating it
    #[arg(long)]
    pub dry_run: bool,
}
