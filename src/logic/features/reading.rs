//! Raw Reading - operator-entered sensor snapshot

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

// ============================================================================
// MACHINE TYPE
// ============================================================================

/// Product quality variant of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MachineType {
    /// High quality variant (reference category, no one-hot flag)
    #[default]
    H,
    /// Low quality variant
    L,
    /// Medium quality variant
    M,
}

impl MachineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineType::H => "H",
            MachineType::L => "L",
            MachineType::M => "M",
        }
    }

    /// Lenient parse used by tabular ingestion: only the exact labels
    /// `H`, `L`, `M` are recognised, anything else is `H`
    pub fn from_label_or_default(label: &str) -> Self {
        match label.trim() {
            "L" => MachineType::L,
            "M" => MachineType::M,
            _ => MachineType::H,
        }
    }
}

impl FromStr for MachineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(MachineType::H),
            "L" => Ok(MachineType::L),
            "M" => Ok(MachineType::M),
            other => Err(format!("unknown machine type '{}' (expected H, L or M)", other)),
        }
    }
}

impl std::fmt::Display for MachineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RAW READING
// ============================================================================

/// Sensor snapshot for one machine, as entered in the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawReading {
    /// Machine identifier, registry key
    #[validate(length(min = 1, message = "Machine ID must not be empty"))]
    pub id: String,

    #[serde(rename = "type")]
    pub machine_type: MachineType,

    pub air_temperature_k: f64,

    /// Expected to be >= air temperature; not enforced
    pub process_temperature_k: f64,

    pub rotational_speed_rpm: f64,

    pub torque_nm: f64,

    pub tool_wear_min: f64,
}

impl Default for RawReading {
    /// Initial form values shown before the operator types anything
    fn default() -> Self {
        Self {
            id: String::new(),
            machine_type: MachineType::H,
            air_temperature_k: 300.0,
            process_temperature_k: 310.0,
            rotational_speed_rpm: 1500.0,
            torque_nm: 40.0,
            tool_wear_min: 0.0,
        }
    }
}
