//! Test helper utilities for router-level testing

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use ttb_label_compliance::app_state::AppState;
use ttb_label_compliance::routes;
use ttb_label_compliance::services::ocr::{OcrError, OcrOutput, OcrProvider};

use crate::fixtures::TestLabelFixture;

const BOUNDARY: &str = "label-verify-test-boundary";

/// Smallest byte sequence recognised as PNG by `image::guess_format`.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// OCR provider returning canned text, or failing when none is configured.
pub struct StubOcr {
    pub text: Option<String>,
}

#[async_trait]
impl OcrProvider for StubOcr {
    fn name(&self) -> &str {
        "stub"
    }

    async fn recognize(&self, _image: &[u8]) -> Result<OcrOutput, OcrError> {
        match &self.text {
            Some(text) => Ok(OcrOutput {
                text: text.clone(),
                regions: Vec::new(),
            }),
            None => Err(OcrError::NoText),
        }
    }
}

pub fn router_with_text(text: Option<&str>) -> Router {
    let state = AppState::new(
        StubOcr {
            text: text.map(str::to_string),
        },
        0.80,
    );
    routes::router(state, 10 * 1024 * 1024)
}

/// Multipart form body: text fields followed by an optional image part.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(data) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"label.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Form fields an applicant would submit for a fixture.
pub fn fixture_fields(fixture: &TestLabelFixture) -> Vec<(&'static str, &'static str)> {
    let mut fields = vec![
        ("brandName", fixture.brand_name),
        ("productClass", fixture.product_class),
        ("alcoholContent", fixture.alcohol_content),
    ];
    if let Some(net) = fixture.net_contents {
        fields.push(("netContents", net));
    }
    if let Some(category) = fixture.category {
        fields.push(("category", category));
    }
    fields
}

/// POST a multipart body to `uri` and return status plus parsed JSON.
pub async fn post_multipart(router: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("content-length", body.len())
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).expect("Response JSON parse failed");
    (status, value)
}

/// Verify a fixture against its own OCR text.
pub async fn verify_fixture(fixture: &TestLabelFixture) -> (StatusCode, Value) {
    let router = router_with_text(Some(fixture.ocr_text));
    let body = multipart_body(&fixture_fields(fixture), Some(PNG_BYTES));
    let (status, value) = post_multipart(router, "/ocr", body).await;
    assert_eq!(status, StatusCode::OK, "{} was rejected: {}", fixture.name, value);
    (status, value)
}

/// Find a compliance item by name in a response body.
pub fn compliance_item<'a>(body: &'a Value, item: &str) -> &'a Value {
    body["complianceReport"]
        .as_array()
        .and_then(|items| items.iter().find(|i| i["item"] == item))
        .unwrap_or_else(|| panic!("compliance item {} missing", item))
}
