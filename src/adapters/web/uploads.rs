//! Upload store. Sanitises client file names and persists uploaded images.

use std::path::PathBuf;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{DomainError, ImageReference};

const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Public URL prefix under which stored uploads are referenced.
const PUBLIC_PREFIX: &str = "uploads";

/// A saved upload: its on-disk location and the path reported to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub path: PathBuf,
    pub public_path: String,
}

impl StoredUpload {
    pub fn image_reference(&self) -> ImageReference {
        ImageReference::new(self.path.clone())
    }
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Extension after the last `.`, case-insensitive, must be an image type.
    pub fn allowed_file(name: &str) -> bool {
        name.rsplit_once('.')
            .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Reduce a client-supplied name to a safe single path component.
    pub fn secure_filename(name: &str) -> String {
        let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
        let cleaned: String = base
            .chars()
            .filter_map(|c| {
                if c.is_whitespace() {
                    Some('_')
                } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    Some(c)
                } else {
                    None
                }
            })
            .collect();
        cleaned.trim_start_matches('.').to_string()
    }

    /// Write the bytes as `<uuid>_<secure name>`, creating the directory on demand.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> Result<StoredUpload, DomainError> {
        let secure = Self::secure_filename(name);
        let file_name = if secure.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            format!("{}_{}", Uuid::new_v4(), secure)
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            DomainError::Processing(format!(
                "create upload dir {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            DomainError::Processing(format!("write upload {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "upload saved");
        Ok(StoredUpload {
            path,
            public_path: format!("{}/{}", PUBLIC_PREFIX, file_name),
        })
    }

    /// Best-effort delete. Failures are logged, never returned.
    pub async fn remove(&self, upload: &StoredUpload) {
        if let Err(e) = tokio::fs::remove_file(&upload.path).await {
            warn!(path = %upload.path.display(), error = %e, "failed to remove upload");
        }
    }
}
