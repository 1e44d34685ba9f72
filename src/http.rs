use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::client::NaturalLanguageClassifier;
use crate::types::{ClassifyRequest, ClassifyResponse, Credentials};

pub const DEFAULT_BASE_URL: &str =
    "https://gateway.watsonplatform.net/natural-language-classifier/api";

/// HTTP client for the Watson Natural Language Classifier v1 REST API.
///
/// Issues one `POST /v1/classifiers/{classifier_id}/classify` per
/// [`classify`](NaturalLanguageClassifier::classify) call, authenticated
/// with HTTP basic auth. Timeouts and connection handling are reqwest's
/// defaults; no retries.
pub struct NlcClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl NlcClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Points the client at an alternative service root, e.g. a
    /// dedicated instance or a local stub server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NaturalLanguageClassifier for NlcClient {
    async fn classify(&self, request: ClassifyRequest) -> Result<ClassifyResponse> {
        let url = format!(
            "{}/v1/classifiers/{}/classify",
            self.base_url, request.classifier_id
        );
        tracing::debug!(%url, "Sending classification request");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(&serde_json::json!({ "text": request.text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Watson NLC request failed with status {status}: {body}");
        }

        Ok(response.json().await?)
    }
}
