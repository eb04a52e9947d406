use crate::error::{AppError, Result};
use crate::models::EquipmentRecord;
use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

/// Required numeric columns, in the order the classifier was trained on.
///
/// This order is a fixed contract with the deployed model artifact. It is
/// declared once here and reused by the feature extractor; it is never
/// inferred from the CSV header order.
pub const FEATURE_COLUMNS: [&str; 4] = ["temperature", "vibration", "pressure", "runtime"];

const EQUIPMENT_ID_COLUMN: &str = "equipment_id";
const LAST_MAINTENANCE_COLUMN: &str = "last_maintenance_date";
const SENSOR_LOCATION_COLUMN: &str = "sensor_location";

/// Fallback identifier for rows that omit `equipment_id`
pub const UNKNOWN_EQUIPMENT_ID: &str = "Unknown";

/// Parse uploaded CSV bytes into equipment records.
///
/// The input must be UTF-8 CSV text with a header row. Each data row needs
/// every column in [`FEATURE_COLUMNS`] to parse as a float; rows that fail
/// are dropped and processing continues. Optional string columns are passed
/// through untouched.
///
/// Fails with [`AppError::Decode`] when the bytes are not valid UTF-8 and
/// with [`AppError::InvalidInput`] when zero valid rows remain.
pub fn parse_equipment_csv(bytes: &[u8]) -> Result<Vec<EquipmentRecord>> {
    let text = std::str::from_utf8(bytes).map_err(|e| AppError::Decode(e.to_string()))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::InvalidInput(format!("missing CSV header: {}", e)))?
        .clone();

    // Column name -> position, so rows are read by name like a dict reader
    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };

        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = records.len(), "Dropped malformed CSV rows");
    }

    if records.is_empty() {
        return Err(AppError::InvalidInput(
            "no valid equipment rows found in uploaded CSV".to_string(),
        ));
    }

    Ok(records)
}

/// Validate one data row; `None` drops the row.
fn parse_row(row: &StringRecord, columns: &HashMap<&str, usize>) -> Option<EquipmentRecord> {
    let mut features = [0.0f64; FEATURE_COLUMNS.len()];
    for (slot, name) in features.iter_mut().zip(FEATURE_COLUMNS) {
        *slot = field(row, columns, name)?.parse().ok()?;
    }
    let [temperature, vibration, pressure, runtime] = features;

    let equipment_id = field(row, columns, EQUIPMENT_ID_COLUMN)
        .unwrap_or(UNKNOWN_EQUIPMENT_ID)
        .to_string();

    let mut record = EquipmentRecord::new(equipment_id, temperature, vibration, pressure, runtime);
    record.last_maintenance_date =
        field(row, columns, LAST_MAINTENANCE_COLUMN).map(str::to_string);
    record.sensor_location = field(row, columns, SENSOR_LOCATION_COLUMN).map(str::to_string);

    Some(record)
}

/// Look up a named column in a row, treating empty values as absent.
fn field<'a>(
    row: &'a StringRecord,
    columns: &HashMap<&str, usize>,
    name: &str,
) -> Option<&'a str> {
    columns
        .get(name)
        .and_then(|&idx| row.get(idx))
        .filter(|value| !value.is_empty())
}
