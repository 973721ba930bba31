//! Prediction Types
//!
//! Core types returned by the scoring service.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Categorical failure risk assigned by the scoring service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Healthy, no action needed
    Green,
    /// Moderate risk, schedule an inspection
    Yellow,
    /// Critical, act now
    Red,
}

impl RiskLevel {
    /// Fixed bucket order used by the health summary
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Green, RiskLevel::Yellow, RiskLevel::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Green => "Green",
            RiskLevel::Yellow => "Yellow",
            RiskLevel::Red => "Red",
        }
    }

    /// Severity rank: Red(3) > Yellow(2) > Green(1)
    pub fn severity_rank(&self) -> u8 {
        match self {
            RiskLevel::Green => 1,
            RiskLevel::Yellow => 2,
            RiskLevel::Red => 3,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Green => "Healthy",
            RiskLevel::Yellow => "Moderate risk",
            RiskLevel::Red => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PREDICTION RESULT
// ============================================================================

/// Response body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// P(machine failure = 1), expected in [0, 1]
    pub failure_probability: f64,
    /// Assigned by the service; trusted as-is
    pub risk_level: RiskLevel,
    /// Optional maintenance hints attached by some service versions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    pub fn new(failure_probability: f64, risk_level: RiskLevel) -> Self {
        Self {
            failure_probability,
            risk_level,
            recommendations: Vec::new(),
        }
    }
}

/// Response body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_strict_total_order() {
        assert!(RiskLevel::Red.severity_rank() > RiskLevel::Yellow.severity_rank());
        assert!(RiskLevel::Yellow.severity_rank() > RiskLevel::Green.severity_rank());
    }

    #[test]
    fn test_result_without_recommendations() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"failure_probability":0.37,"risk_level":"Yellow"}"#).unwrap();
        assert_eq!(result, PredictionResult::new(0.37, RiskLevel::Yellow));
    }

    #[test]
    fn test_result_with_recommendations() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"failure_probability":0.8,"risk_level":"Red","recommendations":["Replace tool"]}"#,
        )
        .unwrap();
        assert_eq!(result.risk_level, RiskLevel::Red);
        assert_eq!(result.recommendations, vec!["Replace tool".to_string()]);
    }

    #[test]
    fn test_unknown_risk_level_is_rejected() {
        let parsed: Result<PredictionResult, _> =
            serde_json::from_str(r#"{"failure_probability":0.8,"risk_level":"Orange"}"#);
        assert!(parsed.is_err());
    }
}
