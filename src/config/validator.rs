use thiserror::Error;

use crate::config::{ClusterSettings, ConsoleSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_cluster(&settings.cluster) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_console(&settings.console) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_cluster(cluster: &ClusterSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if cluster.api_url.is_empty() {
            errors.push(ValidationError::MissingField("cluster.api_url".to_string()));
        } else if !(cluster.api_url.starts_with("http://") || cluster.api_url.starts_with("https://")) {
            errors.push(ValidationError::InvalidValue {
                field: "cluster.api_url".to_string(),
                reason: "URL must start with http:// or https://".to_string(),
            });
        }

        if matches!(&cluster.token, Some(token) if token.trim().is_empty()) {
            errors.push(ValidationError::InvalidValue {
                field: "cluster.token".to_string(),
                reason: "Token must not be blank when set".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_console(console: &ConsoleSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if console.namespace.is_empty() {
            errors.push(ValidationError::MissingField("console.namespace".to_string()));
        }

        for (field, path) in [
            ("console.created_path", &console.created_path),
            ("console.cancel_path", &console.cancel_path),
        ] {
            if !path.starts_with('/') {
                errors.push(ValidationError::InvalidValue {
                    field: field.to_string(),
                    reason: "Path must start with '/'".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            cluster: ClusterSettings {
                api_url: "https://api.example:6443".to_string(),
                token: None,
            },
            console: ConsoleSettings {
                namespace: "team-a".to_string(),
                created_path: "/kuadrant/all-namespaces/policies/dns".to_string(),
                cancel_path: "/kuadrant/all-namespaces/policies".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(ConfigValidator::validate(&settings()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut settings = settings();
        settings.cluster.api_url = "api.example:6443".to_string();
        settings.console.namespace.clear();
        settings.console.cancel_path = "policies".to_string();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_blank_token_rejected() {
        let mut settings = settings();
        settings.cluster.token = Some("  ".to_string());

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(&errors[0], ValidationError::InvalidValue { field, .. } if field == "cluster.token"));
    }

    #[test]
    fn test_missing_api_url() {
        let mut settings = settings();
        settings.cluster.api_url.clear();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(&errors[0], ValidationError::MissingField(f) if f == "cluster.api_url"));
    }
}
