use std::sync::Arc;

use crate::client::NaturalLanguageClassifier;
use crate::error::{Error, Result};
use crate::http::NlcClient;
use crate::types::{Classification, ClassifyRequest, Credentials};

/// Translation boundary over a remote Watson Natural Language
/// Classifier: validates identity parameters up front, forwards
/// classification calls, and normalizes the service's proprietary
/// response into a stable list of label/confidence pairs.
///
/// The adapter is stateless beyond the configuration captured at
/// construction; concurrent [`classify`](Self::classify) calls on the
/// same instance are independent.
pub struct WatsonClassifier {
    classifier_id: String,
    client: Arc<dyn NaturalLanguageClassifier>,
}

impl std::fmt::Debug for WatsonClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatsonClassifier")
            .field("classifier_id", &self.classifier_id)
            .finish_non_exhaustive()
    }
}

impl WatsonClassifier {
    /// Builds an adapter backed by the real Watson HTTP client.
    ///
    /// Validation is synchronous and I/O-free; no network call happens
    /// before the first [`classify`](Self::classify).
    pub fn new(classifier_id: impl Into<String>, credentials: Option<Credentials>) -> Result<Self> {
        let classifier_id = classifier_id.into();
        let credentials = validate(&classifier_id, credentials)?;
        let client = Arc::new(NlcClient::new(credentials));
        Ok(Self {
            classifier_id,
            client,
        })
    }

    /// Builds an adapter around an injected client.
    ///
    /// Credentials go through the same validation as [`new`](Self::new)
    /// even though the injected client carries its own configuration.
    pub fn with_client(
        classifier_id: impl Into<String>,
        credentials: Option<Credentials>,
        client: Arc<dyn NaturalLanguageClassifier>,
    ) -> Result<Self> {
        let classifier_id = classifier_id.into();
        validate(&classifier_id, credentials)?;
        Ok(Self {
            classifier_id,
            client,
        })
    }

    /// Classifies `text` against the configured model.
    ///
    /// Any text is accepted, including empty; content validation belongs
    /// to the remote service. Issues exactly one remote call and maps
    /// each raw class entry to a [`Classification`], preserving order
    /// and count. A zero-class response yields an empty list. Remote
    /// failures are returned unchanged, discarding any partial response
    /// data that accompanied them.
    #[tracing::instrument(skip(self, text), fields(classifier_id = %self.classifier_id))]
    pub async fn classify(&self, text: &str) -> Result<Vec<Classification>> {
        let request = ClassifyRequest {
            text: text.to_owned(),
            classifier_id: self.classifier_id.clone(),
        };

        let response = self.client.classify(request).await?;

        Ok(response
            .classes
            .into_iter()
            .map(|class| Classification {
                label: class.class_name,
                value: class.confidence,
            })
            .collect())
    }

    /// Training is not supported; fails synchronously, never reaching
    /// the remote service.
    pub fn train(&self) -> Result<()> {
        Err(Error::Unsupported)
    }

    /// Incremental document ingestion is not supported; fails
    /// synchronously, never reaching the remote service.
    pub fn add_document(&self) -> Result<()> {
        Err(Error::Unsupported)
    }
}

// First missing field wins; the order is observable behavior.
fn validate(classifier_id: &str, credentials: Option<Credentials>) -> Result<Credentials> {
    if classifier_id.is_empty() {
        return Err(Error::InvalidArgument("classifierId must be defined"));
    }
    let Some(credentials) = credentials else {
        return Err(Error::InvalidArgument("credentials object must be defined"));
    };
    if credentials.username.is_empty() {
        return Err(Error::InvalidArgument(
            "username attribute in the credentials object must be defined",
        ));
    }
    if credentials.password.is_empty() {
        return Err(Error::InvalidArgument(
            "password attribute in the credentials object must be defined",
        ));
    }
    Ok(credentials)
}
