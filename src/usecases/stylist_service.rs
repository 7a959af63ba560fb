//! Stylist service. The recommendation client in front of the LLM oracle.
//!
//! Builds the prompt, bounds the oracle call with a timeout, and normalizes
//! whatever comes back into a `StyleRecommendation` with every core section
//! present. Oracle failures never leave this module.

use crate::domain::{DomainError, StyleRecommendation, palette_for};
use crate::ports::{OraclePort, OraclePrompt, StyleQuery, StylistPort};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const VISION_MAX_TOKENS: u32 = 2048;
const TEXT_MAX_TOKENS: u32 = 1024;

const VISION_SYSTEM_PROMPT: &str = "You are an expert fashion stylist with deep knowledge of color theory, \
body types, cultural fashion, and current trends. Provide detailed, actionable fashion advice.";

const TEXT_SYSTEM_PROMPT: &str = "You are a professional fashion stylist.";

/// Oracle output before normalization.
#[derive(Debug, Clone, PartialEq)]
enum OracleReply {
    Structured(Box<StyleRecommendation>),
    Unparsed(String),
}

impl OracleReply {
    fn parse(raw: &str) -> Self {
        let clean_json = sanitize_json(raw);
        match serde_json::from_str::<StyleRecommendation>(&clean_json) {
            Ok(rec) => OracleReply::Structured(Box::new(rec)),
            Err(e) => {
                let err = DomainError::OracleMalformedResponse(e.to_string());
                warn!(error = %err, json = %clean_json.chars().take(200).collect::<String>(), "oracle reply is not the requested schema");
                OracleReply::Unparsed(raw.to_string())
            }
        }
    }

    fn into_recommendation(self, tone: &str) -> StyleRecommendation {
        match self {
            OracleReply::Structured(rec) => {
                let mut rec = *rec;
                if rec.skin_tone_analysis.detected_tone.trim().is_empty() {
                    rec.skin_tone_analysis.detected_tone = tone.to_string();
                }
                rec
            }
            OracleReply::Unparsed(raw) => StyleRecommendation::unparsed(tone, raw),
        }
    }
}

/// Sanitize JSON response from LLM.
///
/// LLMs sometimes wrap JSON in markdown code blocks or surround it with prose.
fn sanitize_json(raw_text: &str) -> String {
    let trimmed = raw_text.trim();

    if trimmed.starts_with("```") {
        let without_prefix = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .unwrap_or(trimmed);

        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
        return without_prefix.trim().to_string();
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}

fn vision_prompt(query: &StyleQuery) -> String {
    let tone = query.tone.as_str();
    format!(
        r#"Analyze this person's photo and provide comprehensive fashion recommendations.

Detected Skin Tone: {tone}
Gender Preference: {gender}
Dress Code: {dress_code}
Additional Preferences: {preferences}

Provide a JSON response with the following structure:
{{
    "skin_tone_analysis": {{
        "detected_tone": "{tone}",
        "undertone": "warm/cool/neutral",
        "color_harmony_explanation": "detailed explanation"
    }},
    "outfit_recommendations": {{
        "tops": ["specific recommendations with colors and styles"],
        "bottoms": ["specific recommendations"],
        "shoes": ["specific recommendations"],
        "dresses": ["if applicable"],
        "outerwear": ["jackets/coats suggestions"]
    }},
    "color_palette": {{
        "best_colors": ["list of 5-7 colors"],
        "metal_tones": ["gold/silver/rose gold"],
        "colors_to_avoid": ["list"]
    }},
    "accessories": {{
        "jewelry": ["necklaces, earrings, etc."],
        "bags": ["style and color recommendations"],
        "watches": ["if applicable"],
        "other": ["scarves, belts, etc."]
    }},
    "hairstyle_suggestions": {{
        "recommended_styles": ["based on face shape"],
        "maintenance_tips": ["care instructions"],
        "color_recommendations": ["hair colors if applicable"]
    }},
    "makeup_tips": {{
        "foundation": ["undertone matching"],
        "lipstick": ["best shades"],
        "eyeshadow": ["complementary colors"]
    }},
    "shopping_links": {{
        "amazon_in": ["specific search terms for Amazon India"],
        "myntra": ["specific search terms for Myntra"],
        "ajio": ["specific search terms for Ajio"]
    }},
    "styling_tips": ["3-5 practical styling tips"],
    "confidence_boosters": ["how these choices enhance appearance"]
}}

Be specific, practical, and culturally relevant for Indian fashion context."#,
        tone = tone,
        gender = query.gender,
        dress_code = query.dress_code,
        preferences = query.preferences.as_deref().unwrap_or(""),
    )
}

fn text_prompt(query: &StyleQuery) -> String {
    format!(
        "Provide fashion recommendations for:\nSkin Tone: {}\nGender: {}\nDress Code: {}\n\n\
         Include color recommendations, outfit ideas, and styling tips.",
        query.tone, query.gender, query.dress_code
    )
}

/// Recommendation client over an `OraclePort`.
pub struct StylistService {
    oracle: Arc<dyn OraclePort>,
    timeout: Duration,
}

impl StylistService {
    /// # Arguments
    /// * `oracle` - Oracle implementation (HTTP, Mock, etc.)
    /// * `timeout` - Upper bound for one oracle call; expiry counts as a transport failure
    pub fn new(oracle: Arc<dyn OraclePort>, timeout: Duration) -> Self {
        Self { oracle, timeout }
    }

    async fn call_oracle(&self, prompt: &OraclePrompt) -> Result<String, DomainError> {
        match tokio::time::timeout(self.timeout, self.oracle.complete(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::OracleTransport(format!(
                "Request timed out after {} ms",
                self.timeout.as_millis()
            ))),
        }
    }

    async fn recommend_with_image(&self, query: &StyleQuery) -> StyleRecommendation {
        let tone = query.tone.as_str();
        let prompt = OraclePrompt {
            system: VISION_SYSTEM_PROMPT.to_string(),
            user: vision_prompt(query),
            image: query.image.clone(),
            max_tokens: VISION_MAX_TOKENS,
        };

        match self.call_oracle(&prompt).await {
            Ok(raw) => {
                debug!(raw_len = raw.len(), "normalizing vision reply");
                OracleReply::parse(&raw).into_recommendation(tone)
            }
            Err(e) => {
                warn!(error = %e, tone, "oracle call failed, using default recommendation");
                StyleRecommendation::fallback(tone, e.to_string())
            }
        }
    }

    async fn recommend_text_only(&self, query: &StyleQuery) -> StyleRecommendation {
        let tone = query.tone.as_str();
        let prompt = OraclePrompt {
            system: TEXT_SYSTEM_PROMPT.to_string(),
            user: text_prompt(query),
            image: None,
            max_tokens: TEXT_MAX_TOKENS,
        };

        let reply = self.call_oracle(&prompt).await.and_then(|raw| {
            let tips = raw.trim().to_string();
            if tips.is_empty() {
                Err(DomainError::OracleMalformedResponse("empty reply".to_string()))
            } else {
                Ok(tips)
            }
        });

        match reply {
            Ok(tips) => StyleRecommendation::from_tips(tone, &palette_for(query.tone), tips),
            Err(e) => {
                warn!(error = %e, tone, "fashion tips unavailable, using default recommendation");
                let mut rec = StyleRecommendation::fallback(tone, e.to_string());
                rec.fashion_tips = Some(format!("Could not fetch fashion tips: {}", e));
                rec
            }
        }
    }
}

#[async_trait::async_trait]
impl StylistPort for StylistService {
    async fn recommend(&self, query: &StyleQuery) -> Result<StyleRecommendation, DomainError> {
        info!(
            tone = %query.tone,
            gender = %query.gender,
            dress_code = %query.dress_code,
            vision = query.image.is_some(),
            "requesting styling recommendation"
        );

        let rec = if query.image.is_some() {
            self.recommend_with_image(query).await
        } else {
            self.recommend_text_only(query).await
        };
        Ok(rec)
    }
}
