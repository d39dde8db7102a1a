use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::services::credentials::{CredentialsError, ServiceAccountKey, TokenSource};

/// Text recognized in one label image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Full recognized text, undivided.
    pub text: String,
    pub regions: Vec<TextRegion>,
}

/// One recognized fragment and its bounding polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRegion {
    pub text: String,
    pub bounds: Vec<Vertex>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// An external OCR service: image bytes in, recognized text out.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Short provider name for health reporting and logs.
    fn name(&self) -> &str;

    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError>;
}

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// How requests to the Vision API are authorized.
pub enum VisionAuth {
    ApiKey(String),
    ServiceAccount(TokenSource),
}

/// Client for Google Cloud Vision `TEXT_DETECTION`.
pub struct GoogleVisionClient {
    http: Client,
    endpoint: String,
    auth: VisionAuth,
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    requests: [AnnotateImageRequest<'a>; 1],
}

#[derive(Serialize)]
struct AnnotateImageRequest<'a> {
    image: ImageContent,
    features: [Feature<'a>; 1],
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    error: Option<ProviderStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
    bounding_poly: Option<BoundingPoly>,
}

#[derive(Deserialize)]
struct BoundingPoly {
    #[serde(default)]
    vertices: Vec<Vertex>,
}

#[derive(Deserialize)]
struct ProviderStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl GoogleVisionClient {
    pub fn new(endpoint: &str, auth: VisionAuth, timeout: Duration) -> Result<Self, OcrError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OcrError::Http)?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            auth,
        })
    }

    /// Authorize with a service-account key file.
    pub fn with_service_account(
        endpoint: &str,
        key: ServiceAccountKey,
        timeout: Duration,
    ) -> Result<Self, OcrError> {
        let token_http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OcrError::Http)?;
        let tokens = TokenSource::new(key, token_http)?;
        Self::new(endpoint, VisionAuth::ServiceAccount(tokens), timeout)
    }

    async fn send(&self, body: &AnnotateRequest<'_>) -> Result<reqwest::Response, OcrError> {
        let request = self.http.post(&self.endpoint).json(body);
        let request = match &self.auth {
            VisionAuth::ApiKey(key) => request.query(&[("key", key)]),
            VisionAuth::ServiceAccount(tokens) => request.bearer_auth(tokens.access_token().await?),
        };
        request.send().await.map_err(OcrError::Http)
    }
}

#[async_trait]
impl OcrProvider for GoogleVisionClient {
    fn name(&self) -> &str {
        "google-cloud-vision"
    }

    /// Send a label image to Cloud Vision and return the detected text.
    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError> {
        let body = AnnotateRequest {
            requests: [AnnotateImageRequest {
                image: ImageContent {
                    content: base64::engine::general_purpose::STANDARD.encode(image),
                },
                features: [Feature {
                    kind: "TEXT_DETECTION",
                }],
            }],
        };

        let response = self.send(&body).await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OcrError::Provider {
                code: i32::from(status.as_u16()),
                message,
            });
        }

        let parsed: AnnotateResponse = response.json().await.map_err(OcrError::Http)?;
        into_output(parsed)
    }
}

/// The first annotation holds the full text; the rest are individual fragments.
fn into_output(response: AnnotateResponse) -> Result<OcrOutput, OcrError> {
    let image = response.responses.into_iter().next().ok_or(OcrError::NoText)?;

    if let Some(status) = image.error.filter(|s| s.code != 0 || !s.message.is_empty()) {
        return Err(OcrError::Provider {
            code: status.code,
            message: status.message,
        });
    }

    let mut annotations = image.text_annotations.into_iter();
    let full = annotations.next().ok_or(OcrError::NoText)?;
    if full.description.trim().is_empty() {
        return Err(OcrError::NoText);
    }

    let regions = annotations
        .map(|a| TextRegion {
            text: a.description,
            bounds: a.bounding_poly.map(|p| p.vertices).unwrap_or_default(),
        })
        .collect();

    Ok(OcrOutput {
        text: full.description,
        regions,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authorization failed: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("OCR provider error {code}: {message}")]
    Provider { code: i32, message: String },

    #[error("No text detected in image")]
    NoText,
}
