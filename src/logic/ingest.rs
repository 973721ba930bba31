//! Tabular Ingestion - single-row CSV
//!
//! Reads a header row plus one data row (extra rows are ignored) into a
//! `RawReading`. Header labels follow the AI4I predictive maintenance
//! dataset column names.

use crate::error::IngestError;
use crate::logic::features::{MachineType, RawReading};

/// Accepted labels for the machine id column
pub const ID_COLUMNS: &[&str] = &["UDI", "uid", "UID"];

pub const AIR_TEMPERATURE_COLUMN: &str = "Air temperature [K]";
pub const PROCESS_TEMPERATURE_COLUMN: &str = "Process temperature [K]";
pub const ROTATIONAL_SPEED_COLUMN: &str = "Rotational speed [rpm]";
pub const TORQUE_COLUMN: &str = "Torque [Nm]";
pub const TOOL_WEAR_COLUMN: &str = "Tool wear [min]";
pub const TYPE_COLUMN: &str = "Type";

const NUMERIC_COLUMNS: [&str; 5] = [
    AIR_TEMPERATURE_COLUMN,
    PROCESS_TEMPERATURE_COLUMN,
    ROTATIONAL_SPEED_COLUMN,
    TORQUE_COLUMN,
    TOOL_WEAR_COLUMN,
];

/// Parse CSV text into a reading
pub fn parse_csv(text: &str) -> Result<RawReading, IngestError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = text.lines().filter(|line| !line.trim().is_empty());

    let header = split_record(rows.next().ok_or(IngestError::EmptyInput)?);
    let row = split_record(rows.next().ok_or(IngestError::MissingDataRow)?);

    let id_idx = ID_COLUMNS
        .iter()
        .find_map(|label| column_index(&header, label))
        .ok_or_else(|| IngestError::MissingColumn(ID_COLUMNS[0].to_string()))?;

    let mut numeric_idx = [0usize; 5];
    for (slot, label) in numeric_idx.iter_mut().zip(NUMERIC_COLUMNS) {
        *slot = column_index(&header, label)
            .ok_or_else(|| IngestError::MissingColumn(label.to_string()))?;
    }

    let type_idx = column_index(&header, TYPE_COLUMN)
        .ok_or_else(|| IngestError::MissingColumn(TYPE_COLUMN.to_string()))?;

    let id = cell(&row, id_idx).to_string();
    if id.is_empty() {
        return Err(IngestError::EmptyId);
    }

    let mut values = [0f64; 5];
    for ((value, &idx), label) in values.iter_mut().zip(&numeric_idx).zip(NUMERIC_COLUMNS) {
        *value = parse_number(label, cell(&row, idx))?;
    }
    let [air_temperature_k, process_temperature_k, rotational_speed_rpm, torque_nm, tool_wear_min] =
        values;

    Ok(RawReading {
        id,
        machine_type: MachineType::from_label_or_default(cell(&row, type_idx)),
        air_temperature_k,
        process_temperature_k,
        rotational_speed_rpm,
        torque_nm,
        tool_wear_min,
    })
}

fn column_index(header: &[String], label: &str) -> Option<usize> {
    header.iter().position(|h| h == label)
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}

fn parse_number(column: &str, raw: &str) -> Result<f64, IngestError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IngestError::InvalidNumber {
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Split one CSV line. Fields may be wrapped in double quotes; inside a
/// quoted field `""` is a literal quote. Fields are trimmed.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
