//! Risk Thresholds
//!
//! The scoring service owns the probability -> risk banding. The client
//! keeps a copy of the documented bands only to cross-check responses and
//! to build test doubles; it never overrides the service's risk level.

use serde::{Deserialize, Serialize};

use super::types::{PredictionResult, RiskLevel};

/// Probability bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Probabilities below this are Green
    pub yellow_from: f64,
    /// Probabilities at or above this are Red
    pub red_from: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            yellow_from: 0.10,
            red_from: 0.50,
        }
    }
}

impl RiskThresholds {
    /// Map a failure probability to its band
    pub fn classify(&self, probability: f64) -> RiskLevel {
        if probability < self.yellow_from {
            RiskLevel::Green
        } else if probability < self.red_from {
            RiskLevel::Yellow
        } else {
            RiskLevel::Red
        }
    }

    /// Compare the service's risk level against the local banding.
    ///
    /// Disagreement is logged as a warning and reported back; the service's
    /// value stays authoritative.
    pub fn check(&self, result: &PredictionResult) -> bool {
        let expected = self.classify(result.failure_probability);
        if expected != result.risk_level {
            log::warn!(
                "Risk level mismatch: service says {} for p={:.4}, local bands say {}",
                result.risk_level,
                result.failure_probability,
                expected
            );
            return false;
        }
        true
    }
}
