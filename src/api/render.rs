//! Text Rendering
//!
//! Plain-text renditions of the dashboard views for the terminal.

use std::fmt::Write;

use crate::logic::model::RiskLevel;
use crate::logic::registry::Asset;
use crate::logic::state::LastPrediction;
use crate::logic::views::{format_percent, HealthSummary, KpiView};

const BAR_WIDTH: usize = 30;

fn badge(risk_level: RiskLevel) -> String {
    format!("[{}]", risk_level.as_str().to_ascii_uppercase())
}

pub fn render_prediction(last: Option<&LastPrediction>) -> String {
    let Some(last) = last else {
        return "No prediction yet. Use 'predict' or 'load'.".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Machine {}", last.id);
    let _ = writeln!(
        out,
        "  Failure probability: {}",
        format_percent(last.result.failure_probability)
    );
    let _ = write!(
        out,
        "  Risk level:          {} {}",
        badge(last.result.risk_level),
        last.result.risk_level.description()
    );
    if !last.bands_agree {
        let _ = write!(out, "\n  (risk level differs from the documented probability bands)");
    }
    if !last.result.recommendations.is_empty() {
        let _ = write!(out, "\n  Recommendations:");
        for rec in &last.result.recommendations {
            let _ = write!(out, "\n    - {}", rec);
        }
    }
    out
}

pub fn render_kpi(view: &KpiView) -> String {
    match view {
        KpiView::NoAssets => "No assets yet. Run a prediction to add one.".to_string(),
        KpiView::Cards(cards) => cards
            .iter()
            .map(|card| {
                format!(
                    "{:<12} type {}  {:>6}  {}",
                    card.id,
                    card.machine_type,
                    card.probability_label,
                    badge(card.risk_level)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_summary(summary: &HealthSummary) -> String {
    let mut out = format!("Fleet health ({} assets)", summary.total);
    for bucket in &summary.buckets {
        let filled = (bucket.share * BAR_WIDTH as f64).round() as usize;
        let _ = write!(
            out,
            "\n  {:<7} {:>4}  {:>6}  {}",
            bucket.risk_level.as_str(),
            bucket.count,
            format_percent(bucket.share),
            "#".repeat(filled.min(BAR_WIDTH))
        );
    }
    out
}

pub fn render_table(rows: &[&Asset]) -> String {
    if rows.is_empty() {
        return "No assets yet.".to_string();
    }

    let mut out = format!(
        "{:<12} {:<4} {:>10} {:>9} {:>10} {:>8}  {}",
        "ID", "Type", "Torque Nm", "Air K", "Wear min", "Failure", "Risk"
    );
    for asset in rows {
        let _ = write!(
            out,
            "\n{:<12} {:<4} {:>10.1} {:>9.1} {:>10.0} {:>8}  {}",
            asset.id,
            asset.machine_type,
            asset.torque_nm,
            asset.air_temperature_k,
            asset.tool_wear_min,
            format_percent(asset.failure_probability),
            asset.risk_level
        );
    }
    out
}
