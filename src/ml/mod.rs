/// Machine Learning module for equipment risk classification
///
/// This module provides the inference side of the pipeline:
/// - Feature extraction from parsed equipment records
/// - The risk classifier wrapper over the pre-trained artifact
/// - The batch prediction service the API layer calls

pub mod classifier;
pub mod features;
pub mod service;

pub use classifier::{DecisionTreeRiskClassifier, RiskClassifier, N_RISK_CLASSES};
pub use features::FeatureExtractor;
pub use service::RiskService;
