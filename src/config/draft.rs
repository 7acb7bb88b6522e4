//! Form drafts saved to disk.
//!
//! A draft holds the same values the form fields do. The format is picked
//! from the file extension: `.json`, `.yaml`/`.yml` or `.toml`.

use std::path::Path;

use thiserror::Error;

use crate::domain::PolicyFields;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Failed to read draft: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported draft format: {0}")]
    UnsupportedFormat(String),
}

pub fn load_draft(path: impl AsRef<Path>) -> Result<PolicyFields, DraftError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if !matches!(ext.as_str(), "json" | "yaml" | "yml" | "toml") {
        return Err(DraftError::UnsupportedFormat(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let fields: PolicyFields = match ext.as_str() {
        "json" => serde_json::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    tracing::debug!(path = %path.display(), policy = %fields.policy_name, "Loaded draft");
    Ok(fields)
}
