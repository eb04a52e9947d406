/// CSV ingestion for uploaded sensor readings
///
/// Turns raw uploaded bytes into validated `EquipmentRecord`s. Rows that
/// fail per-row validation are dropped; the batch as a whole only fails
/// when decoding fails or no valid row survives.
pub mod parser;

pub use parser::parse_equipment_csv;
