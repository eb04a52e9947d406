use crate::error::Result;
use crate::ml::classifier::RiskClassifier;
use crate::ml::features::FeatureExtractor;
use crate::models::{EquipmentRecord, PredictionResult, RiskLevel};
use std::sync::Arc;
use tracing::debug;

/// Risk prediction service
///
/// Composes the feature extractor, the injected classifier and the label
/// mapper into one batch operation. Holds no mutable state; the classifier
/// is read-only after startup, so the service is safe to share across
/// requests.
pub struct RiskService {
    extractor: FeatureExtractor,
    classifier: Arc<dyn RiskClassifier>,
}

impl RiskService {
    pub fn new(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            classifier,
        }
    }

    /// Assign a risk level to each record, order preserved.
    pub fn predict(&self, records: Vec<EquipmentRecord>) -> Result<Vec<PredictionResult>> {
        let features = self.extractor.transform_batch(&records)?;
        let codes = self.classifier.predict(&features)?;

        debug!(rows = records.len(), "Classified equipment batch");

        Ok(records
            .into_iter()
            .zip(codes)
            .map(|(record, code)| {
                PredictionResult::from_record(record, RiskLevel::from_class_code(code))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use ndarray::Array2;

    /// Test double that returns a fixed sequence of class codes
    struct FixedClassifier(Vec<usize>);

    impl RiskClassifier for FixedClassifier {
        fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>> {
            assert_eq!(features.shape()[0], self.0.len());
            Ok(self.0.clone())
        }

        fn n_features(&self) -> usize {
            4
        }
    }

    /// Test double that always fails
    struct BrokenClassifier;

    impl RiskClassifier for BrokenClassifier {
        fn predict(&self, _features: &Array2<f64>) -> Result<Vec<usize>> {
            Err(AppError::Internal("inference failed".to_string()))
        }

        fn n_features(&self) -> usize {
            4
        }
    }

    fn records() -> Vec<EquipmentRecord> {
        vec![
            EquipmentRecord::new("EQ1", 80.0, 0.5, 30.0, 100.0),
            EquipmentRecord::new("EQ2", 65.0, 0.2, 10.0, 50.0),
            EquipmentRecord::new("EQ3", 95.0, 0.9, 45.0, 300.0),
        ]
    }

    #[test]
    fn test_predict_maps_codes_to_labels_in_order() {
        let service = RiskService::new(Arc::new(FixedClassifier(vec![2, 0, 1])));

        let predictions = service.predict(records()).unwrap();
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].risk_level, RiskLevel::High);
        assert_eq!(predictions[0].equipment_id, "EQ1");
        assert_eq!(predictions[1].risk_level, RiskLevel::Low);
        assert_eq!(predictions[2].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_unknown_codes_degrade_to_low() {
        let service = RiskService::new(Arc::new(FixedClassifier(vec![9, 1, 100])));

        let predictions = service.predict(records()).unwrap();
        assert_eq!(predictions[0].risk_level, RiskLevel::Low);
        assert_eq!(predictions[1].risk_level, RiskLevel::Medium);
        assert_eq!(predictions[2].risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_classifier_failure_aborts_whole_batch() {
        let service = RiskService::new(Arc::new(BrokenClassifier));
        assert!(service.predict(records()).is_err());
    }
}
