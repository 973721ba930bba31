//! Logic Module - Prediction Pipeline & State
//!
//! ## Layout
//! - `features/` - feature derivation from raw readings
//! - `model/` - scoring service client, thresholds, response types
//! - `registry` - session asset store
//! - `views` - KPI / health summary / table derivations
//! - `ingest` - single-row CSV reader
//! - `state` - dashboard state, the single mutation entry point

pub mod features;
pub mod model;
pub mod registry;
pub mod views;
pub mod ingest;
pub mod state;
