//! Feature Layout - order expected by the failure classifier
//!
//! **This order matches the classifier's training columns.**
//! Adding, removing or reordering a feature requires retraining the model
//! on the scoring side; the client only mirrors it for diagnostics.

use super::derive::DerivedFeatures;
use super::reading::RawReading;

/// Feature names in exact classifier order
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Raw sensors (0-4) ===
    "air_temperature_k",
    "process_temperature_k",
    "rotational_speed_rpm",
    "torque_nm",
    "tool_wear_min",

    // === Derived (5-8) ===
    "power",
    "power_wear",
    "temperature_difference",
    "temperature_power",

    // === Type one-hot (9-10) ===
    "type_l",
    "type_m",
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 11;

/// Values of a reading and its derived features, in layout order
pub fn ordered_values(reading: &RawReading, derived: &DerivedFeatures) -> [f64; FEATURE_COUNT] {
    [
        reading.air_temperature_k,
        reading.process_temperature_k,
        reading.rotational_speed_rpm,
        reading.torque_nm,
        reading.tool_wear_min,
        derived.power,
        derived.power_wear,
        derived.temperature_difference,
        derived.temperature_power,
        f64::from(derived.type_l),
        f64::from(derived.type_m),
    ]
}

/// `(name, value)` pairs for logging
pub fn named_values(reading: &RawReading, derived: &DerivedFeatures) -> Vec<(&'static str, f64)> {
    FEATURE_LAYOUT
        .iter()
        .copied()
        .zip(ordered_values(reading, derived))
        .collect()
}

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}
