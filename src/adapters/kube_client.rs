//! Resource creation against a Kubernetes-style API server.
//!
//! Posts the document to the collection path of its model. A rejected request
//! is reported with the `message` of the returned `Status` object so the
//! operator sees what the server said.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::config::ClusterSettings;
use crate::domain::{CreateError, CreateResult, DnsPolicy, ResourceCreator, ResourceDescriptor};

pub struct KubeResourceClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<SecretString>,
}

/// Subset of the API server's `Status` response
#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    message: Option<String>,
}

impl KubeResourceClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.map(SecretString::from),
        }
    }

    pub fn from_settings(settings: &ClusterSettings) -> Self {
        Self::new(settings.api_url.clone(), settings.token.clone())
    }

    fn rejection_message(status: reqwest::StatusCode, body: String) -> String {
        let from_status = serde_json::from_str::<ApiStatus>(&body)
            .ok()
            .and_then(|s| s.message)
            .filter(|m| !m.is_empty());

        match from_status {
            Some(message) => message,
            None if body.trim().is_empty() => status.to_string(),
            None => body,
        }
    }
}

#[async_trait]
impl ResourceCreator for KubeResourceClient {
    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        document: &DnsPolicy,
        namespace: &str,
    ) -> CreateResult<()> {
        let url = format!("{}{}", self.api_url, descriptor.collection_path(namespace));
        debug!(%url, kind = %descriptor.kind, "Creating resource");

        let mut request = self.client.post(&url).json(document);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| CreateError::new(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(CreateError::with_status(
            status.as_u16(),
            Self::rejection_message(status, body),
        ))
    }
}
