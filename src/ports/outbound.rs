//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters (and, for `StylistPort`, by the stylist use case).

use crate::domain::{
    DomainError, EncodedImage, ImageReference, SkinTone, StyleRecommendation, ToneAssessment,
};

/// One request to the LLM oracle.
#[derive(Debug, Clone)]
pub struct OraclePrompt {
    pub system: String,
    pub user: String,
    /// Present for multimodal (vision + text) requests.
    pub image: Option<EncodedImage>,
    pub max_tokens: u32,
}

impl OraclePrompt {
    pub fn is_vision(&self) -> bool {
        self.image.is_some()
    }
}

/// External LLM oracle. Returns the raw text of the first completion.
#[async_trait::async_trait]
pub trait OraclePort: Send + Sync {
    /// Single attempt, no retries. Transport, auth and status failures map to
    /// `DomainError::OracleTransport`.
    async fn complete(&self, prompt: &OraclePrompt) -> Result<String, DomainError>;
}

/// Skin-tone classification capability.
#[async_trait::async_trait]
pub trait ToneClassifierPort: Send + Sync {
    /// Returns `DomainError::ImageUnreadable` when the reference cannot be opened.
    async fn classify(&self, image: &ImageReference) -> Result<ToneAssessment, DomainError>;
}

/// Turns an image reference into a transmittable payload.
#[async_trait::async_trait]
pub trait ImageEncoderPort: Send + Sync {
    async fn encode(&self, image: &ImageReference) -> Result<EncodedImage, DomainError>;
}

/// Inputs for one styling recommendation.
#[derive(Debug, Clone)]
pub struct StyleQuery {
    /// `None` selects the text-only prompt.
    pub image: Option<EncodedImage>,
    pub tone: SkinTone,
    pub gender: String,
    pub dress_code: String,
    pub preferences: Option<String>,
}

/// Recommendation client capability used by the orchestrator.
#[async_trait::async_trait]
pub trait StylistPort: Send + Sync {
    /// Oracle failures are expected to be absorbed into the returned record;
    /// an `Err` here means the client itself could not run.
    async fn recommend(&self, query: &StyleQuery) -> Result<StyleRecommendation, DomainError>;
}
