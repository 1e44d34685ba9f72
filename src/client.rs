use crate::types::{ClassifyRequest, ClassifyResponse};
use anyhow::Result;
use async_trait::async_trait;

/// Remote classification capability the adapter delegates to.
///
/// [`NlcClient`](crate::NlcClient) implements this against the real
/// Watson service; tests substitute a double to exercise the adapter
/// without network access. Implementations must resolve exactly once per
/// call, with either the raw response or the failure as reported by the
/// service.
#[async_trait]
pub trait NaturalLanguageClassifier: Send + Sync {
    async fn classify(&self, request: ClassifyRequest) -> Result<ClassifyResponse>;
}
