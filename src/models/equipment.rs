use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Risk level assigned to an equipment record by the classifier
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, EnumString, Display,
)]
pub enum RiskLevel {
    Low,    // Routine inspection
    Medium, // Monitor and schedule a check
    High,   // Immediate maintenance
}

impl RiskLevel {
    /// Map a classifier class code to a risk level.
    ///
    /// Total over all inputs: codes outside {0, 1, 2} fall back to `Low`.
    /// The fallback degrades safely instead of rejecting the batch.
    pub fn from_class_code(code: usize) -> Self {
        match code {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            2 => RiskLevel::High,
            _ => RiskLevel::Low,
        }
    }
}

/// One validated row of the uploaded sensor CSV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentRecord {
    /// Equipment identifier, `"Unknown"` when the CSV omits it
    pub equipment_id: String,

    /// Sensor readings, in the order the classifier was trained on
    pub temperature: f64,
    pub vibration: f64,
    pub pressure: f64,
    pub runtime: f64,

    /// Passed through as-is when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_location: Option<String>,
}

impl EquipmentRecord {
    pub fn new(
        equipment_id: impl Into<String>,
        temperature: f64,
        vibration: f64,
        pressure: f64,
        runtime: f64,
    ) -> Self {
        Self {
            equipment_id: equipment_id.into(),
            temperature,
            vibration,
            pressure,
            runtime,
            last_maintenance_date: None,
            sensor_location: None,
        }
    }
}

/// An equipment record with its assigned risk level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub equipment_id: String,
    pub temperature: f64,
    pub vibration: f64,
    pub pressure: f64,
    pub runtime: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_location: Option<String>,

    pub risk_level: RiskLevel,
}

impl PredictionResult {
    /// Attach a risk level to a parsed record
    pub fn from_record(record: EquipmentRecord, risk_level: RiskLevel) -> Self {
        Self {
            equipment_id: record.equipment_id,
            temperature: record.temperature,
            vibration: record.vibration,
            pressure: record.pressure,
            runtime: record.runtime,
            last_maintenance_date: record.last_maintenance_date,
            sensor_location: record.sensor_location,
            risk_level,
        }
    }
}
