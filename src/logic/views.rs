//! Aggregation Views
//!
//! Pure, read-only derivations over the registry snapshot. Nothing here
//! holds state, so every view can be recomputed on each render.

use serde::Serialize;

use crate::logic::features::MachineType;
use crate::logic::model::RiskLevel;
use crate::logic::registry::Asset;

/// Render a probability in [0, 1] as `NN.N%`
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

// ============================================================================
// KPI VIEW
// ============================================================================

/// One KPI card per asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub id: String,
    pub machine_type: MachineType,
    pub failure_probability: f64,
    pub probability_label: String,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "snake_case")]
pub enum KpiView {
    /// Nothing predicted yet this session
    NoAssets,
    Cards(Vec<KpiCard>),
}

pub fn kpi_view(assets: &[Asset]) -> KpiView {
    if assets.is_empty() {
        return KpiView::NoAssets;
    }

    KpiView::Cards(
        assets
            .iter()
            .map(|asset| KpiCard {
                id: asset.id.clone(),
                machine_type: asset.machine_type,
                failure_probability: asset.failure_probability,
                probability_label: format_percent(asset.failure_probability),
                risk_level: asset.risk_level,
            })
            .collect(),
    )
}

// ============================================================================
// HEALTH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBucket {
    pub risk_level: RiskLevel,
    pub count: usize,
    /// Share of the fleet in [0, 1]; 0 for an empty fleet
    pub share: f64,
}

/// Fixed three-bucket histogram, always Green, Yellow, Red
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub total: usize,
    pub buckets: [HealthBucket; 3],
}

impl HealthSummary {
    pub fn count(&self, risk_level: RiskLevel) -> usize {
        self.buckets
            .iter()
            .find(|b| b.risk_level == risk_level)
            .map(|b| b.count)
            .unwrap_or(0)
    }
}

pub fn health_summary(assets: &[Asset]) -> HealthSummary {
    let mut counts = [0usize; 3];
    for asset in assets {
        counts[bucket_index(asset.risk_level)] += 1;
    }

    let total = assets.len();
    let buckets = RiskLevel::ALL.map(|risk_level| {
        let count = counts[bucket_index(risk_level)];
        let share = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        HealthBucket {
            risk_level,
            count,
            share,
        }
    });

    HealthSummary { total, buckets }
}

fn bucket_index(risk_level: RiskLevel) -> usize {
    match risk_level {
        RiskLevel::Green => 0,
        RiskLevel::Yellow => 1,
        RiskLevel::Red => 2,
    }
}

// ============================================================================
// DETAILED TABLE
// ============================================================================

/// All assets, most severe first. Stable: equal ranks keep input order.
pub fn detailed_table(assets: &[Asset]) -> Vec<&Asset> {
    let mut rows: Vec<&Asset> = assets.iter().collect();
    rows.sort_by(|a, b| b.risk_level.severity_rank().cmp(&a.risk_level.severity_rank()));
    rows
}
