//! Derived Features - engineered inputs for the failure classifier
//!
//! Recomputed from a `RawReading` on every prediction request, never stored.

use serde::{Deserialize, Serialize};

use super::reading::{MachineType, RawReading};

/// Engineered features sent alongside the raw reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    /// rotational speed x torque
    pub power: f64,
    /// process temperature - air temperature
    pub temperature_difference: f64,
    /// power x tool wear
    pub power_wear: f64,
    /// temperature difference / power (non-finite when power is 0)
    pub temperature_power: f64,
    pub type_l: u8,
    pub type_m: u8,
}

impl DerivedFeatures {
    /// True when a zero power collapsed `temperature_power` to inf/NaN
    pub fn has_non_finite(&self) -> bool {
        !(self.power.is_finite()
            && self.temperature_difference.is_finite()
            && self.power_wear.is_finite()
            && self.temperature_power.is_finite())
    }
}

/// One-hot encoding of the machine type; `H` is the reference category
pub fn one_hot(machine_type: MachineType) -> (u8, u8) {
    match machine_type {
        MachineType::L => (1, 0),
        MachineType::M => (0, 1),
        MachineType::H => (0, 0),
    }
}

/// Compute the engineered features for a reading.
///
/// Division by a zero power is IEEE float division: the result is passed
/// through as inf or NaN, never an error.
pub fn derive_features(reading: &RawReading) -> DerivedFeatures {
    let power = reading.rotational_speed_rpm * reading.torque_nm;
    let temperature_difference = reading.process_temperature_k - reading.air_temperature_k;
    let power_wear = power * reading.tool_wear_min;
    let temperature_power = temperature_difference / power;
    let (type_l, type_m) = one_hot(reading.machine_type);

    DerivedFeatures {
        power,
        temperature_difference,
        power_wear,
        temperature_power,
        type_l,
        type_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(rpm: f64, torque: f64) -> RawReading {
        RawReading {
            id: "M1".to_string(),
            rotational_speed_rpm: rpm,
            torque_nm: torque,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_hot_is_mutually_exclusive() {
        assert_eq!(one_hot(MachineType::H), (0, 0));
        assert_eq!(one_hot(MachineType::L), (1, 0));
        assert_eq!(one_hot(MachineType::M), (0, 1));
    }

    #[test]
    fn test_nonzero_power_gives_finite_ratio() {
        for (rpm, torque) in [(1500.0, 40.0), (1.0, 0.5), (2800.0, -3.0)] {
            let features = derive_features(&reading(rpm, torque));
            assert!(features.temperature_power.is_finite());
            assert!(!features.has_non_finite());
        }
    }

    #[test]
    fn test_zero_power_is_non_finite_not_panic() {
        let features = derive_features(&reading(0.0, 40.0));
        assert_eq!(features.power, 0.0);
        assert!(features.temperature_power.is_infinite());
        assert!(features.has_non_finite());

        let mut same_temp = reading(1500.0, 0.0);
        same_temp.process_temperature_k = same_temp.air_temperature_k;
        let features = derive_features(&same_temp);
        assert!(features.temperature_power.is_nan());
    }

    #[test]
    fn test_deterministic() {
        let r = reading(1234.0, 56.7);
        assert_eq!(derive_features(&r), derive_features(&r));
    }
}
