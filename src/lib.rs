//! Predictive Maintenance Dashboard
//!
//! Submits machine sensor readings to a failure-prediction service and
//! renders the returned risk across several views.
//!
//! ```text
//! RawReading ──derive──▶ PredictionRequest ──POST /predict──▶ PredictionResult
//!                                                                   │
//!                       KPI / Summary / Table ◀── AssetRegistry ◀───┘
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use config::Config;
pub use error::{IngestError, PredictError, SubmitError};
pub use logic::features::{derive_features, DerivedFeatures, MachineType, RawReading};
pub use logic::model::{PredictionClient, PredictionResult, RiskLevel, Scorer};
pub use logic::registry::{Asset, AssetRegistry};
pub use logic::state::DashboardState;
