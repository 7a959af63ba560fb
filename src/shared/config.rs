//! Application configuration. Oracle credentials, server, uploads, enumerations.

use crate::domain::Enumerations;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_VISION_MODEL: &str = "llama-3.2-90b-vision-preview";
pub const DEFAULT_TEXT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
/// 16 MiB, matching the upload form limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Oracle Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Oracle API key. Read from STYLEAI_API_KEY or GROQ_API_KEY. Unset means demo mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat-completions endpoint. Read from STYLEAI_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model used when an image is attached. Read from STYLEAI_VISION_MODEL.
    #[serde(default)]
    pub vision_model: Option<String>,

    /// Model used for text-only prompts. Read from STYLEAI_TEXT_MODEL.
    #[serde(default)]
    pub text_model: Option<String>,

    /// Upper bound on a single oracle call. Read from STYLEAI_ORACLE_TIMEOUT_SECS.
    #[serde(default)]
    pub oracle_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Server Configuration
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub bind_addr: Option<String>,

    #[serde(default)]
    pub upload_dir: Option<String>,

    #[serde(default)]
    pub max_upload_bytes: Option<usize>,

    /// Fixed seed for the tone classifier; entropy when unset.
    #[serde(default)]
    pub classifier_seed: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Enumerations (config file only; env vars cannot express lists)
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub genders: Option<Vec<String>>,

    #[serde(default)]
    pub dress_codes: Option<Vec<String>>,

    #[serde(default)]
    pub skin_tones: Option<Vec<String>>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("STYLEAI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("STYLEAI"));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // GROQ_API_KEY is read directly (no prefix) so existing .env files keep working
        if cfg.api_key.is_none() {
            cfg.api_key = std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
        Ok(cfg)
    }

    /// Returns the oracle API key if configured and non-blank.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
    }

    /// Returns true if a real oracle can be used (API key present).
    pub fn is_oracle_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn vision_model_or_default(&self) -> String {
        self.vision_model
            .clone()
            .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string())
    }

    pub fn text_model_or_default(&self) -> String {
        self.text_model
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string())
    }

    /// Returns the oracle call bound. Defaults to 30s; zero is treated as unset.
    pub fn oracle_timeout(&self) -> Duration {
        let secs = self
            .oracle_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_ORACLE_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn upload_dir_or_default(&self) -> String {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
    }

    pub fn max_upload_bytes_or_default(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Returns the configured enumerations, each list falling back to its default.
    pub fn enumerations(&self) -> Enumerations {
        let defaults = Enumerations::default();
        Enumerations {
            genders: non_empty_or(&self.genders, defaults.genders),
            dress_codes: non_empty_or(&self.dress_codes, defaults.dress_codes),
            skin_tones: non_empty_or(&self.skin_tones, defaults.skin_tones),
        }
    }
}

fn non_empty_or(configured: &Option<Vec<String>>, default: Vec<String>) -> Vec<String> {
    match configured {
        Some(values) if !values.is_empty() => values.clone(),
        _ => default,
    }
}
