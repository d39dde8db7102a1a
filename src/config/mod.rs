use serde::Deserialize;

use crate::services::fuzzy::DEFAULT_MATCH_THRESHOLD;
use crate::services::ocr::DEFAULT_VISION_ENDPOINT;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:8000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the Google service-account JSON key.
    #[serde(default = "default_credentials_path")]
    pub google_application_credentials: String,

    /// Cloud Vision API key; takes precedence over the service account when set.
    #[serde(default)]
    pub google_vision_api_key: Option<String>,

    /// Cloud Vision `images:annotate` URL
    #[serde(default = "default_vision_endpoint")]
    pub vision_endpoint: String,

    /// Upper bound on request bodies and individual multipart fields
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Similarity threshold for brand name and class/type matching (0.0 - 1.0)
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// HTTP timeout for OCR and token requests
    #[serde(default = "default_ocr_timeout_secs")]
    pub ocr_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_credentials_path() -> String {
    "google-credentials.json".to_string()
}

fn default_vision_endpoint() -> String {
    DEFAULT_VISION_ENDPOINT.to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_ocr_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::Threshold(self.match_threshold));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::UploadLimit);
        }
        Ok(())
    }

    /// API key, ignoring a blank value.
    pub fn api_key(&self) -> Option<&str> {
        self.google_vision_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("MATCH_THRESHOLD must be between 0.0 and 1.0, got {0}")]
    Threshold(f64),

    #[error("MAX_UPLOAD_BYTES must be greater than zero")]
    UploadLimit,
}
