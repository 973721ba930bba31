//! Model Module - External Scoring Service
//!
//! - `request` - payload sent to `POST /predict`
//! - `client` - HTTP client and the `Scorer` seam
//! - `threshold` - documented probability bands
//! - `types` - risk level and response types

pub mod types;
pub mod threshold;
pub mod request;
pub mod client;

pub use types::{HealthStatus, PredictionResult, RiskLevel};
pub use threshold::RiskThresholds;
pub use request::PredictionRequest;
pub use client::{PredictionClient, Scorer};
