//! Domain entities. Pure data structures for the core business.
//!
//! Everything here is built fresh per request and never mutated afterwards;
//! nothing is shared between requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::recommendation::StyleRecommendation;

/// Coarse skin-tone category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    Fair,
    #[default]
    Medium,
    Olive,
    Deep,
}

impl SkinTone {
    pub const ALL: [SkinTone; 4] = [
        SkinTone::Fair,
        SkinTone::Medium,
        SkinTone::Olive,
        SkinTone::Deep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Fair => "Fair",
            SkinTone::Medium => "Medium",
            SkinTone::Olive => "Olive",
            SkinTone::Deep => "Deep",
        }
    }

    /// Exact (case-sensitive) match against the category names.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_str() == label.trim())
    }
}

impl std::fmt::Display for SkinTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle to an image on disk (an uploaded file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    path: PathBuf,
}

impl ImageReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Image payload ready for transmission to the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    /// Standard base64 alphabet, padded.
    pub data: String,
}

impl EncodedImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Raw user input as received from the web layer.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub gender: String,
    pub dress_code: String,
    pub preferences: Option<String>,
    pub image_reference: Option<ImageReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneAssessment {
    pub detected_tone: SkinTone,
    /// In [0, 1].
    pub confidence: f64,
}

/// Named colour lists for one tone category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub accent: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinAnalysis {
    pub detected_tone: SkinTone,
    pub confidence: f64,
    pub color_palette: ColorPalette,
    /// Set when the analysis is a default rather than a detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Request fields echoed back in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInputs {
    pub gender: String,
    pub dress_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// Unit returned to the caller for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub skin_analysis: SkinAnalysis,
    pub ai_recommendations: StyleRecommendation,
    pub user_inputs: UserInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Public path of the uploaded image, filled in by the web layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResult {
    pub fn detected_tone(&self) -> SkinTone {
        self.skin_analysis.detected_tone
    }

    pub fn is_degraded(&self) -> bool {
        self.skin_analysis.note.is_some()
    }
}
