//! End-to-end pipeline runs over the mock oracle and real image adapters.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use styleai::adapters::imaging::{Base64ImageEncoder, RandomToneClassifier};
use styleai::adapters::oracle::MockOracle;
use styleai::domain::{
    DomainError, Enumerations, ImageReference, InputField, InputValidator, RecommendationRequest,
    SkinTone, StyleRecommendation, palette_for,
};
use styleai::ports::{RecommendationPort, StyleQuery, StylistPort};
use styleai::usecases::{RecommendationService, StylistService};

fn pipeline(oracle: Arc<MockOracle>) -> RecommendationService {
    let stylist = Arc::new(StylistService::new(oracle, Duration::from_secs(5)));
    pipeline_with_stylist(stylist)
}

fn pipeline_with_stylist(stylist: Arc<dyn StylistPort>) -> RecommendationService {
    RecommendationService::new(
        InputValidator::new(Enumerations::default()),
        Arc::new(RandomToneClassifier::seeded(7)),
        Arc::new(Base64ImageEncoder::new()),
        stylist,
    )
}

fn write_png(path: &Path) {
    image::RgbImage::from_pixel(8, 8, image::Rgb([180, 140, 110]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn request(image: Option<ImageReference>) -> RecommendationRequest {
    RecommendationRequest {
        gender: "Female".to_string(),
        dress_code: "Party".to_string(),
        preferences: Some("comfortable".to_string()),
        image_reference: image,
    }
}

struct BrokenStylist;

#[async_trait::async_trait]
impl StylistPort for BrokenStylist {
    async fn recommend(&self, _query: &StyleQuery) -> Result<StyleRecommendation, DomainError> {
        Err(DomainError::Processing("stylist offline".to_string()))
    }
}

#[tokio::test]
async fn quick_path_returns_fair_palette() {
    let oracle = Arc::new(MockOracle::with_delay(0));
    let result = pipeline(oracle.clone())
        .quick_orchestrate("Fair", "Female", "Formal")
        .await
        .unwrap();

    assert_eq!(result.detected_tone(), SkinTone::Fair);
    assert_eq!(
        result.skin_analysis.color_palette.primary,
        vec!["Navy Blue", "Emerald Green", "Burgundy", "Charcoal"]
    );
    assert!(result.ai_recommendations.fashion_tips.is_some());
    assert_eq!(oracle.call_count(), 1);
    assert!(!oracle.last_prompt().unwrap().is_vision());
}

#[tokio::test]
async fn invalid_gender_never_reaches_oracle() {
    let oracle = Arc::new(MockOracle::with_delay(0));
    let err = pipeline(oracle.clone())
        .quick_orchestrate("Fair", "Alien", "Formal")
        .await
        .unwrap_err();

    match err {
        DomainError::InvalidInput { field, value, .. } => {
            assert_eq!(field, InputField::Gender);
            assert_eq!(value, "Alien");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn full_path_sends_image_to_oracle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    write_png(&path);

    let oracle = Arc::new(MockOracle::with_delay(0));
    let result = pipeline(oracle.clone())
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert!(!result.is_degraded());
    assert!(result.error.is_none());
    let confidence = result.skin_analysis.confidence;
    assert!((0.70..=0.95).contains(&confidence));
    assert_eq!(
        result.skin_analysis.color_palette,
        palette_for(result.detected_tone())
    );
    assert_eq!(
        result.ai_recommendations.color_palette.best_colors[0],
        "Royal Blue"
    );

    let prompt = oracle.last_prompt().unwrap();
    let image = prompt.image.expect("vision prompt carries the image");
    assert_eq!(image.mime_type, "image/png");
    assert!(prompt.user.contains("comfortable"));
}

#[tokio::test]
async fn unreadable_image_degrades_to_medium() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let oracle = Arc::new(MockOracle::with_delay(0));
    let result = pipeline(oracle.clone())
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert_eq!(result.detected_tone(), SkinTone::Medium);
    assert_eq!(result.skin_analysis.confidence, 0.7);
    assert_eq!(
        result.skin_analysis.note.as_deref(),
        Some("Using default analysis due to processing error")
    );
    assert!(
        result
            .error
            .as_deref()
            .unwrap()
            .starts_with("Image processing failed, using fallback recommendations:")
    );
    assert_eq!(oracle.call_count(), 1);
    assert!(!oracle.last_prompt().unwrap().is_vision());
}

#[tokio::test]
async fn oracle_failure_yields_default_recommendation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    write_png(&path);

    let oracle = Arc::new(MockOracle::failing("connection refused"));
    let result = pipeline(oracle.clone())
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert!(!result.is_degraded());
    let rec = &result.ai_recommendations;
    assert_eq!(
        rec.color_palette.best_colors,
        vec!["Navy blue", "Burgundy", "Forest green", "Charcoal"]
    );
    assert!(rec.error.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn unparseable_reply_is_kept_raw() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    write_png(&path);

    let oracle = Arc::new(MockOracle::with_reply("You would look great in teal."));
    let result = pipeline(oracle)
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert_eq!(
        result.ai_recommendations.raw_response.as_deref(),
        Some("You would look great in teal.")
    );
}

#[tokio::test]
async fn failing_stylist_still_produces_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    write_png(&path);

    let result = pipeline_with_stylist(Arc::new(BrokenStylist))
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert!(result.is_degraded());
    assert_eq!(result.detected_tone(), SkinTone::Medium);
    assert!(result.error.as_deref().unwrap().contains("stylist offline"));
    assert!(result.ai_recommendations.error.is_some());
}

#[tokio::test]
async fn quick_path_with_failing_stylist_reports_error() {
    let result = pipeline_with_stylist(Arc::new(BrokenStylist))
        .quick_orchestrate("Deep", "Male", "Traditional")
        .await
        .unwrap();

    assert_eq!(result.detected_tone(), SkinTone::Deep);
    assert!(result.error.as_deref().unwrap().contains("stylist offline"));
}

#[tokio::test]
async fn seeded_pipelines_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    write_png(&path);

    let a = pipeline(Arc::new(MockOracle::with_delay(0)))
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();
    let b = pipeline(Arc::new(MockOracle::with_delay(0)))
        .orchestrate(request(Some(ImageReference::new(&path))))
        .await
        .unwrap();

    assert_eq!(a.skin_analysis, b.skin_analysis);
}
