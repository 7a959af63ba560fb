//! Styling recommendation schema. Mirrors the JSON the oracle is asked for.
//!
//! The three core sections are always present. The constructors here build
//! the stand-in records used when the oracle reply is unusable.

use serde::{Deserialize, Serialize};

use super::entities::ColorPalette;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinToneAnalysis {
    #[serde(default)]
    pub detected_tone: String,
    #[serde(default)]
    pub undertone: String,
    #[serde(default)]
    pub color_harmony_explanation: String,
}

/// Suggestions per garment category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecommendations {
    #[serde(default)]
    pub tops: Vec<String>,
    #[serde(default)]
    pub bottoms: Vec<String>,
    #[serde(default)]
    pub shoes: Vec<String>,
    #[serde(default)]
    pub dresses: Vec<String>,
    #[serde(default)]
    pub outerwear: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteAdvice {
    #[serde(default)]
    pub best_colors: Vec<String>,
    #[serde(default)]
    pub metal_tones: Vec<String>,
    #[serde(default)]
    pub colors_to_avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessories {
    #[serde(default)]
    pub jewelry: Vec<String>,
    #[serde(default)]
    pub bags: Vec<String>,
    #[serde(default)]
    pub watches: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairstyleSuggestions {
    #[serde(default)]
    pub recommended_styles: Vec<String>,
    #[serde(default)]
    pub maintenance_tips: Vec<String>,
    #[serde(default)]
    pub color_recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeupTips {
    #[serde(default)]
    pub foundation: Vec<String>,
    #[serde(default)]
    pub lipstick: Vec<String>,
    #[serde(default)]
    pub eyeshadow: Vec<String>,
}

/// Search terms per shopping site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingLinks {
    #[serde(default)]
    pub amazon_in: Vec<String>,
    #[serde(default)]
    pub myntra: Vec<String>,
    #[serde(default)]
    pub ajio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecommendation {
    pub skin_tone_analysis: SkinToneAnalysis,
    pub outfit_recommendations: OutfitRecommendations,
    pub color_palette: PaletteAdvice,
    #[serde(default)]
    pub accessories: Option<Accessories>,
    #[serde(default)]
    pub hairstyle_suggestions: Option<HairstyleSuggestions>,
    #[serde(default)]
    pub makeup_tips: Option<MakeupTips>,
    #[serde(default)]
    pub shopping_links: Option<ShoppingLinks>,
    #[serde(default)]
    pub styling_tips: Vec<String>,
    #[serde(default)]
    pub confidence_boosters: Vec<String>,

    /// Plain-text tips from the text-only prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fashion_tips: Option<String>,
    /// Oracle output that could not be parsed as the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl StyleRecommendation {
    fn with_core(
        skin_tone_analysis: SkinToneAnalysis,
        outfit_recommendations: OutfitRecommendations,
        color_palette: PaletteAdvice,
    ) -> Self {
        Self {
            skin_tone_analysis,
            outfit_recommendations,
            color_palette,
            accessories: None,
            hairstyle_suggestions: None,
            makeup_tips: None,
            shopping_links: None,
            styling_tips: Vec::new(),
            confidence_boosters: Vec::new(),
            fashion_tips: None,
            raw_response: None,
            error: None,
        }
    }

    /// Fixed advice used when the oracle could not be reached.
    pub fn fallback(tone: &str, error: impl Into<String>) -> Self {
        let mut rec = Self::with_core(
            SkinToneAnalysis {
                detected_tone: tone.to_string(),
                undertone: "neutral".to_string(),
                color_harmony_explanation: format!("Based on {} skin tone analysis", tone),
            },
            OutfitRecommendations {
                tops: strings(&["Classic white shirt", "Navy blue blouse", "Earth tone sweater"]),
                bottoms: strings(&["Dark jeans", "Beige trousers", "Black skirt"]),
                shoes: strings(&["Brown leather shoes", "Nude heels", "White sneakers"]),
                dresses: strings(&["A-line dress in complementary colors"]),
                outerwear: strings(&["Blazer in navy or black"]),
            },
            PaletteAdvice {
                best_colors: strings(&["Navy blue", "Burgundy", "Forest green", "Charcoal"]),
                metal_tones: strings(&["Gold accessories work well"]),
                colors_to_avoid: strings(&["Colors that clash with your undertone"]),
            },
        );
        rec.error = Some(error.into());
        rec
    }

    /// Placeholder structure around an oracle reply that was not valid JSON.
    pub fn unparsed(tone: &str, raw_response: impl Into<String>) -> Self {
        let mut rec = Self::with_core(
            SkinToneAnalysis {
                detected_tone: tone.to_string(),
                undertone: "neutral".to_string(),
                color_harmony_explanation: "Based on detected skin tone".to_string(),
            },
            OutfitRecommendations {
                tops: strings(&["Recommended tops based on analysis"]),
                bottoms: strings(&["Recommended bottoms based on analysis"]),
                shoes: strings(&["Footwear suggestions"]),
                dresses: strings(&["Dress recommendations if applicable"]),
                outerwear: strings(&["Jacket/coat suggestions"]),
            },
            PaletteAdvice {
                best_colors: strings(&["Colors that complement your skin tone"]),
                metal_tones: strings(&["Gold/Silver recommendations"]),
                colors_to_avoid: strings(&["Colors to avoid"]),
            },
        );
        rec.raw_response = Some(raw_response.into());
        rec
    }

    /// Text-only reply: opaque tips plus palette-derived colour advice.
    pub fn from_tips(tone: &str, palette: &ColorPalette, tips: impl Into<String>) -> Self {
        let mut rec = Self::with_core(
            SkinToneAnalysis {
                detected_tone: tone.to_string(),
                undertone: "neutral".to_string(),
                color_harmony_explanation: format!("Based on {} skin tone analysis", tone),
            },
            OutfitRecommendations {
                tops: strings(&["Essential pieces for your skin tone"]),
                bottoms: strings(&["Versatile options"]),
                ..Default::default()
            },
            PaletteAdvice {
                best_colors: palette.primary.clone(),
                metal_tones: strings(&["Gold/Silver recommendations"]),
                colors_to_avoid: palette.avoid.clone(),
            },
        );
        rec.accessories = Some(Accessories {
            other: strings(&["Complementary accessories"]),
            ..Default::default()
        });
        rec.fashion_tips = Some(tips.into());
        rec
    }

    /// Replace the outfit with the basic wardrobe used when the photo could
    /// not be analysed. Tips and error annotations are kept.
    pub fn with_basic_outfit(mut self) -> Self {
        self.outfit_recommendations = OutfitRecommendations {
            tops: strings(&["Classic white shirt", "Navy blue blouse"]),
            bottoms: strings(&["Dark jeans", "Black trousers"]),
            shoes: strings(&["Brown leather shoes", "Black heels"]),
            ..Default::default()
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_payload() {
        let rec = StyleRecommendation::fallback("Olive", "connection refused");
        assert_eq!(rec.skin_tone_analysis.detected_tone, "Olive");
        assert_eq!(
            rec.skin_tone_analysis.color_harmony_explanation,
            "Based on Olive skin tone analysis"
        );
        assert_eq!(rec.outfit_recommendations.tops.len(), 3);
        assert_eq!(
            rec.color_palette.best_colors,
            strings(&["Navy blue", "Burgundy", "Forest green", "Charcoal"])
        );
        assert_eq!(rec.error.as_deref(), Some("connection refused"));
        assert!(rec.raw_response.is_none());
    }

    #[test]
    fn test_unparsed_keeps_raw_text() {
        let rec = StyleRecommendation::unparsed("Fair", "Wear blue.");
        assert_eq!(rec.raw_response.as_deref(), Some("Wear blue."));
        assert_eq!(
            rec.outfit_recommendations.tops,
            strings(&["Recommended tops based on analysis"])
        );
        assert!(rec.error.is_none());
    }

    #[test]
    fn test_from_tips_uses_palette_and_generic_pieces() {
        let palette = ColorPalette {
            primary: strings(&["Cream", "Rust"]),
            secondary: Vec::new(),
            accent: Vec::new(),
            avoid: strings(&["Green"]),
        };
        let rec = StyleRecommendation::from_tips("Olive", &palette, "Try rust.");
        assert_eq!(rec.color_palette.best_colors, palette.primary);
        assert_eq!(rec.color_palette.colors_to_avoid, palette.avoid);
        assert_eq!(rec.outfit_recommendations.bottoms, strings(&["Versatile options"]));
        assert!(rec.outfit_recommendations.shoes.is_empty());
        assert_eq!(
            rec.accessories.unwrap().other,
            strings(&["Complementary accessories"])
        );
        assert_eq!(rec.fashion_tips.as_deref(), Some("Try rust."));
    }

    #[test]
    fn test_basic_outfit_keeps_annotations() {
        let rec = StyleRecommendation::fallback("Medium", "timeout").with_basic_outfit();
        assert_eq!(
            rec.outfit_recommendations.tops,
            strings(&["Classic white shirt", "Navy blue blouse"])
        );
        assert_eq!(
            rec.outfit_recommendations.bottoms,
            strings(&["Dark jeans", "Black trousers"])
        );
        assert_eq!(
            rec.outfit_recommendations.shoes,
            strings(&["Brown leather shoes", "Black heels"])
        );
        assert!(rec.outfit_recommendations.dresses.is_empty());
        assert_eq!(rec.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_core_sections_required_when_parsing() {
        let missing = r#"{"skin_tone_analysis": {}, "outfit_recommendations": {}}"#;
        assert!(serde_json::from_str::<StyleRecommendation>(missing).is_err());

        let minimal =
            r#"{"skin_tone_analysis": {}, "outfit_recommendations": {}, "color_palette": {}}"#;
        let rec: StyleRecommendation = serde_json::from_str(minimal).unwrap();
        assert!(rec.accessories.is_none());
        assert!(rec.styling_tips.is_empty());
    }

    #[test]
    fn test_annotations_skipped_when_absent() {
        let rec = StyleRecommendation::unparsed("Deep", "x");
        let value = serde_json::to_value(&rec).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["raw_response"], "x");
        assert!(value.get("accessories").is_some());
    }
}
