use std::str::FromStr;
use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use garde::Validate;
use tracing::Instrument;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::compliance::LabelReport;
use crate::models::label::{DeclaredCategory, DeclaredLabelFields};
use crate::models::verification::VerifyRequest;
use crate::routes::error::ApiError;
use crate::routes::metrics::{OCR_FAILURES, OCR_SECONDS, VERIFICATIONS_MATCHED, VERIFICATIONS_TOTAL};
use crate::services::validation;

/// Raw multipart fields before validation.
#[derive(Default)]
struct VerifyUpload {
    image: Option<Vec<u8>>,
    brand_name: Option<String>,
    product_class: Option<String>,
    alcohol_content: Option<String>,
    net_contents: Option<String>,
    category: Option<String>,
}

/// POST /ocr — Verify a label image against the declared fields.
///
/// Multipart fields: `image` (file), `brandName`, `productClass`,
/// `alcoholContent`, optional `netContents` and `category`.
pub async fn verify_label(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<LabelReport>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("verify_label", %request_id);

    async move {
        metrics::counter!(VERIFICATIONS_TOTAL).increment(1);

        let upload = read_upload(multipart).await?;
        let (image_bytes, declared) = into_declared(upload)?;

        // Validate image format using the `image` crate
        image::guess_format(&image_bytes).map_err(|_| ApiError::UnsupportedImage)?;

        let start = Instant::now();
        let ocr = state.ocr.recognize(&image_bytes).await;
        let ocr_duration = start.elapsed();
        metrics::histogram!(OCR_SECONDS).record(ocr_duration.as_secs_f64());

        let output = ocr.map_err(|e| {
            tracing::warn!(error = %e, provider = state.ocr.name(), "OCR failed");
            metrics::counter!(OCR_FAILURES).increment(1);
            ApiError::Ocr
        })?;

        tracing::info!(
            ocr_duration_ms = ocr_duration.as_millis() as u64,
            text_len = output.text.len(),
            regions = output.regions.len(),
            "OCR extraction complete"
        );

        let report = validation::verify_label(&output.text, &declared, state.match_threshold);

        if report.is_match {
            metrics::counter!(VERIFICATIONS_MATCHED).increment(1);
        }
        tracing::info!(
            is_match = report.is_match,
            detected_category = %report.detected_category,
            issues_count = report.non_compliant_count(),
            "Verification complete"
        );

        Ok(Json(report))
    }
    .instrument(span)
    .await
}

async fn read_upload(mut multipart: Multipart) -> Result<VerifyUpload, ApiError> {
    let mut upload = VerifyUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read image: {}", e)))?;
            upload.image = Some(data.to_vec());
            continue;
        }

        let slot = match name.as_str() {
            "brandName" => &mut upload.brand_name,
            "productClass" => &mut upload.product_class,
            "alcoholContent" => &mut upload.alcohol_content,
            "netContents" => &mut upload.net_contents,
            "category" => &mut upload.category,
            _ => continue,
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read field {}: {}", name, e)))?;
        *slot = Some(value);
    }

    Ok(upload)
}

fn into_declared(upload: VerifyUpload) -> Result<(Vec<u8>, DeclaredLabelFields), ApiError> {
    let image = upload
        .image
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ApiError::Validation("Missing field: image".to_string()))?;

    let request = VerifyRequest {
        brand_name: required(upload.brand_name, "brandName")?,
        product_class: required(upload.product_class, "productClass")?,
        alcohol_content: required(upload.alcohol_content, "alcoholContent")?,
        net_contents: optional(upload.net_contents),
        category: optional(upload.category),
    };
    request
        .validate()
        .map_err(|report| ApiError::Validation(report.to_string()))?;

    let category = match request.category.as_deref() {
        Some(value) => DeclaredCategory::from_str(value)
            .map_err(|_| ApiError::Validation(format!("Unknown category: {}", value)))?,
        None => DeclaredCategory::Auto,
    };

    Ok((
        image,
        DeclaredLabelFields {
            brand_name: request.brand_name,
            product_class: request.product_class,
            alcohol_content: request.alcohol_content,
            net_contents: request.net_contents,
            category,
        },
    ))
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    optional(value).ok_or_else(|| ApiError::Validation(format!("Missing field: {}", field)))
}

/// Trimmed value, with blank treated as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
