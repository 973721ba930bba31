//! Session Commands
//!
//! Line-oriented commands typed by the operator. `predict` edits the form
//! with `key=value` pairs and submits it; fields not mentioned keep their
//! current form value.

use std::path::PathBuf;
use std::str::FromStr;

use crate::logic::features::{MachineType, RawReading};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Form edits to apply before submitting
    Predict(Vec<(String, String)>),
    /// Ingest a CSV file and submit it
    Load(PathBuf),
    Kpi,
    Summary,
    Table,
    Last,
    Health,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or_else(|| "empty command".to_string())?;

        let command = match name.to_ascii_lowercase().as_str() {
            "predict" | "p" => {
                let pairs = tokens
                    .map(|token| {
                        token
                            .split_once('=')
                            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                            .ok_or_else(|| format!("expected key=value, got '{}'", token))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Command::Predict(pairs));
            }
            "load" => {
                let rest: Vec<&str> = tokens.collect();
                if rest.is_empty() {
                    return Err("usage: load <path.csv>".to_string());
                }
                return Ok(Command::Load(PathBuf::from(rest.join(" "))));
            }
            "kpi" | "cards" => Command::Kpi,
            "summary" | "fleet" => Command::Summary,
            "table" => Command::Table,
            "last" => Command::Last,
            "health" => Command::Health,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command '{}' (type 'help')", other)),
        };

        if let Some(extra) = tokens.next() {
            return Err(format!("'{}' takes no arguments (got '{}')", name, extra));
        }
        Ok(command)
    }
}

/// Apply `key=value` edits on top of the current form
pub fn apply_form_edits(form: &RawReading, edits: &[(String, String)]) -> Result<RawReading, String> {
    let mut reading = form.clone();

    for (key, value) in edits {
        match key.as_str() {
            "id" | "uid" | "udi" => reading.id = value.trim().to_string(),
            "type" => reading.machine_type = value.parse::<MachineType>()?,
            "air" | "air_temperature_k" => reading.air_temperature_k = number(key, value)?,
            "process" | "process_temperature_k" => {
                reading.process_temperature_k = number(key, value)?
            }
            "rpm" | "speed" | "rotational_speed_rpm" => {
                reading.rotational_speed_rpm = number(key, value)?
            }
            "torque" | "torque_nm" => reading.torque_nm = number(key, value)?,
            "wear" | "tool_wear_min" => reading.tool_wear_min = number(key, value)?,
            other => return Err(format!("unknown field '{}'", other)),
        }
    }

    Ok(reading)
}

fn number(key: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{}' is not a number for field '{}'", value, key))
}

pub const HELP: &str = "\
Commands:
  predict id=<ID> type=<H|L|M> air=<K> process=<K> rpm=<rpm> torque=<Nm> wear=<min>
                    edit the form and submit it (omitted fields keep their value)
  load <file.csv>   read one reading from CSV and submit it
  kpi               one card per machine
  summary           fleet health by risk level
  table             all machines, most critical first
  last              latest prediction
  health            check the prediction API
  help              this text
  quit              leave the session";
