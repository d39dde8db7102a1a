use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use ttb_label_compliance::app_state::AppState;
use ttb_label_compliance::config::AppConfig;
use ttb_label_compliance::routes;
use ttb_label_compliance::services::credentials::ServiceAccountKey;
use ttb_label_compliance::services::ocr::{GoogleVisionClient, VisionAuth};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing ttb-label-compliance server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);
    routes::metrics::describe();

    // Initialize Cloud Vision client
    let timeout = Duration::from_secs(config.ocr_timeout_secs);
    let ocr_client = match config.api_key() {
        Some(key) => {
            tracing::info!("Initializing Cloud Vision client with API key");
            GoogleVisionClient::new(
                &config.vision_endpoint,
                VisionAuth::ApiKey(key.to_string()),
                timeout,
            )
        }
        None => {
            tracing::info!(
                path = %config.google_application_credentials,
                "Loading Google service account credentials"
            );
            let key = ServiceAccountKey::from_file(&config.google_application_credentials)
                .expect("Failed to load Google credentials");
            GoogleVisionClient::with_service_account(&config.vision_endpoint, key, timeout)
        }
    }
    .expect("Failed to initialize Cloud Vision client");

    let state = AppState::new(ocr_client, config.match_threshold);

    let app = routes::router(state, config.max_upload_bytes).route(
        "/metrics",
        get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
    );

    tracing::info!("Starting ttb-label-compliance on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
