//! Scoring Request Payload
//!
//! Raw reading fields (minus the id) merged with the derived features.
//! Built exactly once per submission.

use serde::Serialize;

use crate::logic::features::{derive_features, layout, DerivedFeatures, MachineType, RawReading};

/// Body of `POST /predict`
///
/// Non-finite floats are written by `serde_json` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub air_temperature_k: f64,
    pub process_temperature_k: f64,
    pub rotational_speed_rpm: f64,
    pub torque_nm: f64,
    pub tool_wear_min: f64,
    #[serde(rename = "type")]
    pub machine_type: MachineType,

    #[serde(flatten)]
    pub derived: DerivedFeatures,
}

impl PredictionRequest {
    pub fn new(reading: &RawReading, derived: DerivedFeatures) -> Self {
        Self {
            air_temperature_k: reading.air_temperature_k,
            process_temperature_k: reading.process_temperature_k,
            rotational_speed_rpm: reading.rotational_speed_rpm,
            torque_nm: reading.torque_nm,
            tool_wear_min: reading.tool_wear_min,
            machine_type: reading.machine_type,
            derived,
        }
    }

    /// Derive features and build the payload in one step
    pub fn from_reading(reading: &RawReading) -> Self {
        let derived = derive_features(reading);
        if derived.has_non_finite() {
            log::warn!(
                "Machine {}: power is zero, temperature_power is {} and will be sent as null",
                reading.id,
                derived.temperature_power
            );
        }
        log::debug!(
            "Machine {} features: {:?}",
            reading.id,
            layout::named_values(reading, &derived)
        );
        Self::new(reading, derived)
    }
}
