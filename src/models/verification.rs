use garde::Validate;
use serde::{Deserialize, Serialize};

/// Text fields of a verification upload, checked before OCR is attempted.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[garde(length(min = 1, max = 200))]
    pub brand_name: String,

    #[garde(length(min = 1, max = 200))]
    pub product_class: String,

    #[garde(length(min = 1, max = 50))]
    pub alcohol_content: String,

    #[garde(length(min = 1, max = 100))]
    pub net_contents: Option<String>,

    #[garde(skip)]
    pub category: Option<String>,
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ocr_provider: String,
}
