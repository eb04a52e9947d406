use crate::models::{PredictionResult, RiskLevel};

/// Build the maintenance recommendation for one prediction.
///
/// Pure and deterministic: a fixed three-way rule on the risk level, naming
/// the equipment id. No randomness, no external calls, no state.
pub fn recommendation_for(prediction: &PredictionResult) -> String {
    let id = &prediction.equipment_id;
    match prediction.risk_level {
        RiskLevel::High => {
            format!("⚠️ Immediate maintenance required for {} (High risk).", id)
        }
        RiskLevel::Medium => {
            format!(
                "🔍 Monitor {} closely and schedule a routine check (Medium risk).",
                id
            )
        }
        RiskLevel::Low => {
            format!("✅ Routine inspection recommended for {} (Low risk).", id)
        }
    }
}

/// Build one recommendation per prediction, order preserved: recommendation
/// `i` corresponds to prediction `i`.
pub fn generate_recommendations(predictions: &[PredictionResult]) -> Vec<String> {
    predictions.iter().map(recommendation_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentRecord;

    fn prediction(id: &str, risk_level: RiskLevel) -> PredictionResult {
        PredictionResult::from_record(
            EquipmentRecord::new(id, 80.0, 0.5, 30.0, 100.0),
            risk_level,
        )
    }

    #[test]
    fn test_each_risk_level_has_a_distinct_message() {
        let high = recommendation_for(&prediction("EQ1", RiskLevel::High));
        let medium = recommendation_for(&prediction("EQ1", RiskLevel::Medium));
        let low = recommendation_for(&prediction("EQ1", RiskLevel::Low));

        assert!(high.contains("Immediate maintenance required for EQ1"));
        assert!(medium.contains("Monitor EQ1 closely"));
        assert!(low.contains("Routine inspection recommended for EQ1"));
        assert_ne!(high, medium);
        assert_ne!(medium, low);
    }

    #[test]
    fn test_recommendations_preserve_order() {
        let predictions = vec![
            prediction("EQ1", RiskLevel::High),
            prediction("EQ2", RiskLevel::Low),
            prediction("EQ3", RiskLevel::Medium),
        ];

        let recs = generate_recommendations(&predictions);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("EQ1"));
        assert!(recs[1].contains("EQ2"));
        assert!(recs[2].contains("EQ3"));
    }

    #[test]
    fn test_generation_is_deterministic_and_idempotent() {
        let predictions = vec![
            prediction("EQ1", RiskLevel::High),
            prediction("EQ2", RiskLevel::Medium),
        ];

        let first = generate_recommendations(&predictions);
        let second = generate_recommendations(&predictions);
        assert_eq!(first, second);
    }
}
