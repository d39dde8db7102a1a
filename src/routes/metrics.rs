use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

pub const VERIFICATIONS_TOTAL: &str = "label_verifications_total";
pub const VERIFICATIONS_MATCHED: &str = "label_verifications_matched";
pub const OCR_FAILURES: &str = "label_verification_ocr_failures";
pub const OCR_SECONDS: &str = "ocr_request_seconds";

/// Register metric descriptions with the installed recorder.
pub fn describe() {
    metrics::describe_counter!(VERIFICATIONS_TOTAL, "Label verification requests received");
    metrics::describe_counter!(
        VERIFICATIONS_MATCHED,
        "Verifications where every declared field matched"
    );
    metrics::describe_counter!(OCR_FAILURES, "Verifications aborted by an OCR failure");
    metrics::describe_histogram!(OCR_SECONDS, "Latency of the OCR provider call");
}

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(
    axum::extract::State(handle): axum::extract::State<Arc<PrometheusHandle>>,
) -> impl IntoResponse {
    handle.render()
}
