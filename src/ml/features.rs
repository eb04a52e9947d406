use crate::error::{AppError, Result};
use crate::ingest::parser::FEATURE_COLUMNS;
use crate::models::EquipmentRecord;
use ndarray::Array2;

/// Feature extractor for equipment records
///
/// Produces the fixed-order numeric vector the classifier was trained on.
/// The order is [`FEATURE_COLUMNS`]: temperature, vibration, pressure,
/// runtime. Reordering here without retraining the model silently produces
/// wrong predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Number of features per record
    pub fn n_features(&self) -> usize {
        FEATURE_COLUMNS.len()
    }

    /// Transform one record into its feature vector
    pub fn transform(&self, record: &EquipmentRecord) -> [f64; 4] {
        [
            record.temperature,
            record.vibration,
            record.pressure,
            record.runtime,
        ]
    }

    /// Transform a batch of records into a rectangular feature matrix,
    /// one row per record, order preserved.
    pub fn transform_batch(&self, records: &[EquipmentRecord]) -> Result<Array2<f64>> {
        let data: Vec<f64> = records
            .iter()
            .flat_map(|record| self.transform(record))
            .collect();

        Array2::from_shape_vec((records.len(), self.n_features()), data)
            .map_err(|e| AppError::Internal(format!("Failed to build feature matrix: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_contract() {
        let record = EquipmentRecord::new("EQ1", 80.0, 0.5, 30.0, 100.0);
        let extractor = FeatureExtractor::new();

        assert_eq!(extractor.transform(&record), [80.0, 0.5, 30.0, 100.0]);
    }

    #[test]
    fn test_batch_is_rectangular_and_ordered() {
        let records = vec![
            EquipmentRecord::new("EQ1", 80.0, 0.5, 30.0, 100.0),
            EquipmentRecord::new("EQ2", 65.0, 0.2, 10.0, 50.0),
        ];
        let extractor = FeatureExtractor::new();

        let matrix = extractor.transform_batch(&records).unwrap();
        assert_eq!(matrix.shape(), &[2, 4]);
        assert_eq!(matrix[[0, 0]], 80.0);
        assert_eq!(matrix[[1, 3]], 50.0);
    }

    #[test]
    fn test_empty_batch_has_zero_rows() {
        let extractor = FeatureExtractor::new();
        let matrix = extractor.transform_batch(&[]).unwrap();
        assert_eq!(matrix.shape(), &[0, 4]);
    }
}
