//! Asset Registry - in-memory, session-scoped
//!
//! One entry per machine id. Upsert replaces in place, so the position of
//! an id is fixed by its first successful prediction. There is no removal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::features::{MachineType, RawReading};
use crate::logic::model::{PredictionResult, RiskLevel};

/// Latest known snapshot and prediction for one machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(rename = "type")]
    pub machine_type: MachineType,
    pub torque_nm: f64,
    pub air_temperature_k: f64,
    pub tool_wear_min: f64,
    pub failure_probability: f64,
    pub risk_level: RiskLevel,
}

impl Asset {
    pub fn from_prediction(reading: &RawReading, result: &PredictionResult) -> Self {
        Self {
            id: reading.id.clone(),
            machine_type: reading.machine_type,
            torque_nm: reading.torque_nm,
            air_temperature_k: reading.air_temperature_k,
            tool_wear_min: reading.tool_wear_min,
            failure_probability: result.failure_probability,
            risk_level: result.risk_level,
        }
    }
}

/// Upsert-only keyed store
#[derive(Debug, Default, Clone)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new asset at the end, or replace the existing one in place
    pub fn upsert(&mut self, asset: Asset) {
        match self.index.get(&asset.id) {
            Some(&pos) => {
                log::debug!("Registry: replacing asset {} at position {}", asset.id, pos);
                self.assets[pos] = asset;
            }
            None => {
                log::debug!("Registry: adding asset {}", asset.id);
                self.index.insert(asset.id.clone(), self.assets.len());
                self.assets.push(asset);
            }
        }
    }

    /// All assets in first-insertion order
    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.index.get(id).map(|&pos| &self.assets[pos])
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
