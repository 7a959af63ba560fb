//! Inbound port. The web layer (adapter) calls into the application.

use crate::domain::{DomainError, RecommendationRequest, RecommendationResult};

/// Recommendation use cases exposed to the HTTP surface.
#[async_trait::async_trait]
pub trait RecommendationPort: Send + Sync {
    /// Full path: validate, classify the image, ask the oracle with the image.
    /// Only `DomainError::InvalidInput` is ever returned.
    async fn orchestrate(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, DomainError>;

    /// Quick path: caller-supplied tone, no image. Only `InvalidInput` is returned.
    async fn quick_orchestrate(
        &self,
        tone: &str,
        gender: &str,
        dress_code: &str,
    ) -> Result<RecommendationResult, DomainError>;
}
