use std::sync::Arc;

use crate::services::ocr::OcrProvider;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub ocr: Arc<dyn OcrProvider>,
    pub match_threshold: f64,
}

impl AppState {
    pub fn new(ocr: impl OcrProvider + 'static, match_threshold: f64) -> Self {
        Self {
            ocr: Arc::new(ocr),
            match_threshold,
        }
    }
}
