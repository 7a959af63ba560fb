//! Placeholder tone classifier. Implements ToneClassifierPort.
//!
//! Confirms the image can be opened and its header decoded, then draws a tone
//! uniformly from the four categories and a confidence uniformly from
//! [0.70, 0.95]. Real inference can replace it behind the same port.

use crate::domain::{DomainError, ImageReference, SkinTone, ToneAssessment};
use crate::ports::ToneClassifierPort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

pub const MIN_CONFIDENCE: f64 = 0.70;
pub const MAX_CONFIDENCE: f64 = 0.95;

pub struct RandomToneClassifier {
    rng: Mutex<StdRng>,
}

impl RandomToneClassifier {
    /// Deterministic sequence of draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn draw(rng: &mut StdRng) -> ToneAssessment {
        let detected_tone = SkinTone::ALL[rng.gen_range(0..SkinTone::ALL.len())];
        let raw: f64 = rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
        ToneAssessment {
            detected_tone,
            confidence: (raw * 100.0).round() / 100.0,
        }
    }
}

impl Default for RandomToneClassifier {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Opens the file and decodes the header only. The handle is dropped before returning.
async fn probe_image(path: PathBuf) -> Result<(u32, u32), DomainError> {
    let display = path.display().to_string();
    tokio::task::spawn_blocking(move || {
        let reader = image::ImageReader::open(&path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| e.to_string())?;
        reader.into_dimensions().map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| DomainError::ImageUnreadable(format!("{}: {}", display, e)))?
    .map_err(|e| DomainError::ImageUnreadable(format!("{}: {}", display, e)))
}

#[async_trait::async_trait]
impl ToneClassifierPort for RandomToneClassifier {
    async fn classify(&self, image: &ImageReference) -> Result<ToneAssessment, DomainError> {
        let (width, height) = probe_image(image.path().to_path_buf()).await?;

        let assessment = {
            let mut rng = self.rng.lock().await;
            Self::draw(&mut rng)
        };

        debug!(
            path = %image.path().display(),
            width,
            height,
            tone = %assessment.detected_tone,
            confidence = assessment.confidence,
            "tone classified"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn write_png(dir: &tempfile::TempDir) -> ImageReference {
        let path = dir.path().join("face.png");
        image::RgbImage::new(4, 4).save(&path).unwrap();
        ImageReference::new(path)
    }

    #[tokio::test]
    async fn test_draws_stay_in_domain() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(&dir);
        let classifier = RandomToneClassifier::seeded(7);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let a = classifier.classify(&image).await.unwrap();
            assert!(SkinTone::ALL.contains(&a.detected_tone));
            assert!(
                (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&a.confidence),
                "confidence {} out of range",
                a.confidence
            );
            assert_eq!((a.confidence * 100.0).round() / 100.0, a.confidence);
            seen.insert(a.detected_tone);
        }
        assert_eq!(seen.len(), 4);
    }

    #[tokio::test]
    async fn test_same_seed_same_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(&dir);
        let a = RandomToneClassifier::seeded(42);
        let b = RandomToneClassifier::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.classify(&image).await.unwrap(),
                b.classify(&image).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let classifier = RandomToneClassifier::seeded(1);
        let err = classifier
            .classify(&ImageReference::new("/nonexistent/face.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ImageUnreadable(_)));
    }

    #[tokio::test]
    async fn test_non_image_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = RandomToneClassifier::seeded(1)
            .classify(&ImageReference::new(path))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ImageUnreadable(_)));
    }
}
