//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! To change the default scoring server, only edit this file.

/// Default scoring endpoint base URL
///
/// Fallback when `PREDICT_API_URL` is not set.
/// Matches the local development server of the prediction API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the scoring endpoint base URL
pub const API_URL_ENV: &str = "PREDICT_API_URL";

/// Environment variable holding an optional request timeout (seconds)
pub const TIMEOUT_ENV: &str = "PREDICT_TIMEOUT_SECS";

/// Prediction route, relative to the base URL
pub const PREDICT_PATH: &str = "/predict";

/// Health route, relative to the base URL
pub const HEALTH_PATH: &str = "/health";

/// Generic message shown when the scoring call fails for any reason
pub const PREDICTION_UNAVAILABLE: &str =
    "Prediction unavailable. Please check that the prediction API is running.";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Maintenance Dashboard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scoring endpoint URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var(API_URL_ENV)
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get request timeout from environment; `None` means wait indefinitely
pub fn get_timeout_secs() -> Option<u64> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
}
