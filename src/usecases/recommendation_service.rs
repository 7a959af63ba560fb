//! Recommendation service. Orchestrates the recommendation pipeline.
//!
//! Validation runs first and is the only failure a caller ever sees. Every
//! later failure is absorbed: the full path falls back to the degraded path,
//! and the degraded path falls back to the fixed default recommendation.

use crate::domain::{
    DomainError, InputValidator, RecommendationRequest, RecommendationResult, SkinAnalysis,
    SkinTone, StyleRecommendation, ToneAssessment, UserInputs, ValidatedInput, palette_for,
};
use crate::ports::{
    ImageEncoderPort, RecommendationPort, StyleQuery, StylistPort, ToneClassifierPort,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Confidence reported when the tone was assumed rather than detected.
const DEFAULT_CONFIDENCE: f64 = 0.7;
/// Confidence reported when the caller supplied the tone.
const SUPPLIED_CONFIDENCE: f64 = 1.0;
const DEGRADED_NOTE: &str = "Using default analysis due to processing error";

/// Service for the recommendation pipeline.
///
/// Full path:
/// 1. Validate gender and dress code
/// 2. Classify the tone from the image
/// 3. Encode the image
/// 4. Ask the stylist with the image
/// 5. Assemble the result with the tone's palette
pub struct RecommendationService {
    validator: InputValidator,
    classifier: Arc<dyn ToneClassifierPort>,
    encoder: Arc<dyn ImageEncoderPort>,
    stylist: Arc<dyn StylistPort>,
}

impl RecommendationService {
    /// Create a new recommendation service.
    ///
    /// # Arguments
    /// * `validator` - Validator holding the configured enumerations
    /// * `classifier` - Tone classifier implementation
    /// * `encoder` - Image encoder implementation
    /// * `stylist` - Recommendation client (oracle-backed, or any substitute)
    pub fn new(
        validator: InputValidator,
        classifier: Arc<dyn ToneClassifierPort>,
        encoder: Arc<dyn ImageEncoderPort>,
        stylist: Arc<dyn StylistPort>,
    ) -> Self {
        Self {
            validator,
            classifier,
            encoder,
            stylist,
        }
    }

    /// Steps 2-5. Any error here sends the request down the degraded path.
    async fn full_path(
        &self,
        input: &ValidatedInput,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, DomainError> {
        let image = request
            .image_reference
            .as_ref()
            .ok_or_else(|| DomainError::ImageUnreadable("no image supplied".to_string()))?;

        let assessment = self.classifier.classify(image).await?;
        let encoded = self.encoder.encode(image).await?;

        let query = StyleQuery {
            image: Some(encoded),
            tone: assessment.detected_tone,
            gender: input.gender.clone(),
            dress_code: input.dress_code.clone(),
            preferences: request.preferences.clone(),
        };
        let recommendation = self.stylist.recommend(&query).await?;

        Ok(assemble(
            assessment,
            None,
            recommendation,
            user_inputs(input, request.preferences.clone()),
            None,
        ))
    }

    /// Medium tone, text-only stylist call. Cannot fail.
    async fn degraded_path(
        &self,
        input: &ValidatedInput,
        preferences: Option<String>,
        cause: &DomainError,
    ) -> RecommendationResult {
        let tone = SkinTone::Medium;
        let query = StyleQuery {
            image: None,
            tone,
            gender: input.gender.clone(),
            dress_code: input.dress_code.clone(),
            preferences: preferences.clone(),
        };
        let recommendation = self.recommend_or_default(&query).await;
        let recommendation = if recommendation.error.is_none() {
            recommendation.with_basic_outfit()
        } else {
            recommendation
        };

        assemble(
            ToneAssessment {
                detected_tone: tone,
                confidence: DEFAULT_CONFIDENCE,
            },
            Some(DEGRADED_NOTE.to_string()),
            recommendation,
            user_inputs(input, preferences),
            Some(format!(
                "Image processing failed, using fallback recommendations: {}",
                cause
            )),
        )
    }

    /// Caller-supplied tone label. Anything outside the configured skin tones is Medium.
    fn supplied_tone(&self, label: &str) -> SkinTone {
        let label = label.trim();
        let offered = self
            .validator
            .enumerations()
            .skin_tones
            .iter()
            .any(|t| t == label);
        match SkinTone::from_label(label) {
            Some(tone) if offered => tone,
            _ => {
                warn!(tone = label, "unknown skin tone, assuming Medium");
                SkinTone::Medium
            }
        }
    }

    async fn recommend_or_default(&self, query: &StyleQuery) -> StyleRecommendation {
        match self.stylist.recommend(query).await {
            Ok(rec) => rec,
            Err(e) => {
                warn!(error = %e, "stylist unavailable, using default recommendation");
                StyleRecommendation::fallback(query.tone.as_str(), e.to_string())
            }
        }
    }
}

fn user_inputs(input: &ValidatedInput, preferences: Option<String>) -> UserInputs {
    UserInputs {
        gender: input.gender.clone(),
        dress_code: input.dress_code.clone(),
        preferences,
    }
}

fn assemble(
    assessment: ToneAssessment,
    note: Option<String>,
    recommendation: StyleRecommendation,
    user_inputs: UserInputs,
    error: Option<String>,
) -> RecommendationResult {
    RecommendationResult {
        skin_analysis: SkinAnalysis {
            detected_tone: assessment.detected_tone,
            confidence: assessment.confidence,
            color_palette: palette_for(assessment.detected_tone),
            note,
        },
        ai_recommendations: recommendation,
        user_inputs,
        error,
        image_path: None,
        generated_at: Utc::now(),
    }
}

#[async_trait::async_trait]
impl RecommendationPort for RecommendationService {
    async fn orchestrate(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, DomainError> {
        let input = self.validator.validate(&request.gender, &request.dress_code)?;

        match self.full_path(&input, &request).await {
            Ok(result) => {
                info!(
                    tone = %result.detected_tone(),
                    confidence = result.skin_analysis.confidence,
                    "recommendation complete"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "full path failed, degrading to default analysis");
                Ok(self
                    .degraded_path(&input, request.preferences.clone(), &e)
                    .await)
            }
        }
    }

    async fn quick_orchestrate(
        &self,
        tone: &str,
        gender: &str,
        dress_code: &str,
    ) -> Result<RecommendationResult, DomainError> {
        let input = self.validator.validate(gender, dress_code)?;

        let detected_tone = self.supplied_tone(tone);
        let assessment = ToneAssessment {
            detected_tone,
            confidence: SUPPLIED_CONFIDENCE,
        };
        let query = StyleQuery {
            image: None,
            tone: detected_tone,
            gender: input.gender.clone(),
            dress_code: input.dress_code.clone(),
            preferences: None,
        };

        let (recommendation, error) = match self.stylist.recommend(&query).await {
            Ok(rec) => (rec, None),
            Err(e) => {
                warn!(error = %e, "quick recommendation failed");
                (
                    StyleRecommendation::fallback(detected_tone.as_str(), e.to_string()),
                    Some(e.to_string()),
                )
            }
        };

        info!(tone = %detected_tone, "quick recommendation complete");
        Ok(assemble(
            assessment,
            None,
            recommendation,
            user_inputs(&input, None),
            error,
        ))
    }
}
