//! Implements ImageEncoderPort. Reads the file and base64-encodes it for the oracle.

use crate::domain::{DomainError, EncodedImage, ImageReference};
use crate::ports::ImageEncoderPort;
use base64::{Engine as _, engine::general_purpose};
use tracing::debug;

const DEFAULT_MIME: &str = "image/jpeg";

#[derive(Debug, Default, Clone, Copy)]
pub struct Base64ImageEncoder;

impl Base64ImageEncoder {
    pub fn new() -> Self {
        Self
    }
}

/// MIME type sniffed from the content; JPEG when unrecognised.
fn mime_type_for(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(DEFAULT_MIME)
}

#[async_trait::async_trait]
impl ImageEncoderPort for Base64ImageEncoder {
    async fn encode(&self, image: &ImageReference) -> Result<EncodedImage, DomainError> {
        let bytes = tokio::fs::read(image.path()).await.map_err(|e| {
            DomainError::Processing(format!(
                "Failed to read {} for encoding: {}",
                image.path().display(),
                e
            ))
        })?;

        let mime_type = mime_type_for(&bytes);
        debug!(
            path = %image.path().display(),
            bytes = bytes.len(),
            mime_type,
            "image encoded"
        );

        Ok(EncodedImage {
            mime_type: mime_type.to_string(),
            data: general_purpose::STANDARD.encode(&bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_png_encoded_with_sniffed_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        image::RgbImage::new(2, 2)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let encoded = Base64ImageEncoder::new()
            .encode(&ImageReference::new(&path))
            .await
            .unwrap();
        assert_eq!(encoded.mime_type, "image/png");
        let decoded = general_purpose::STANDARD.decode(&encoded.data).unwrap();
        assert_eq!(decoded, std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_unknown_bytes_default_to_jpeg() {
        assert_eq!(mime_type_for(b"plain text"), "image/jpeg");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = Base64ImageEncoder::new()
            .encode(&ImageReference::new("/nonexistent.gif"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Processing(_)));
    }
}
