use crate::error::{AppError, Result};
use ndarray::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters, SplitCriterion,
};
use std::path::Path;

/// Number of risk classes the deployed artifact is trained on
pub const N_RISK_CLASSES: usize = 3;

/// Trait for risk classifiers
///
/// The production implementation wraps the pre-trained artifact; tests
/// substitute a double. Implementations are read-only after construction
/// and safe to share across requests.
pub trait RiskClassifier: Send + Sync {
    /// Predict one class code per feature vector, order preserved.
    ///
    /// `features` must be rectangular with [`RiskClassifier::n_features`]
    /// columns.
    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>>;

    /// Number of features per input vector
    fn n_features(&self) -> usize;
}

/// Decision tree risk classifier backed by a serialized smartcore model
#[derive(Debug)]
pub struct DecisionTreeRiskClassifier {
    model: DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>,
    n_features: usize,
}

impl DecisionTreeRiskClassifier {
    /// Load the classifier artifact from disk.
    ///
    /// Called exactly once at process startup; a missing or corrupt
    /// artifact is fatal for the process.
    pub fn load(path: &Path, n_features: usize) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::ClassifierUnavailable(format!(
                "failed to read model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        let model = bincode::deserialize(&bytes).map_err(|e| {
            AppError::ClassifierUnavailable(format!(
                "failed to deserialize model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self { model, n_features })
    }

    /// Train a fresh classifier. Offline tooling only; the serving process
    /// never retrains.
    pub fn fit(features: &Array2<f64>, labels: &[usize], max_depth: u16) -> Result<Self> {
        let n_features = features.shape()[1];
        let x = ndarray_to_densematrix(features);
        let y: Vec<i32> = labels.iter().map(|&label| label as i32).collect();

        let params = DecisionTreeClassifierParameters::default()
            .with_max_depth(max_depth)
            .with_criterion(SplitCriterion::Gini);

        let model = DecisionTreeClassifier::fit(&x, &y, params)
            .map_err(|e| AppError::Internal(format!("Failed to train decision tree: {}", e)))?;

        Ok(Self { model, n_features })
    }

    /// Serialize the model to the artifact path the server loads from
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = bincode::serialize(&self.model)
            .map_err(|e| AppError::Internal(format!("Failed to serialize model: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;

        Ok(())
    }
}

impl RiskClassifier for DecisionTreeRiskClassifier {
    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>> {
        if features.shape()[0] == 0 {
            return Ok(Vec::new());
        }
        if features.shape()[1] != self.n_features {
            return Err(AppError::Internal(format!(
                "feature matrix has {} columns, model expects {}",
                features.shape()[1],
                self.n_features
            )));
        }

        let x = ndarray_to_densematrix(features);
        let predictions = self
            .model
            .predict(&x)
            .map_err(|e| AppError::Internal(format!("Prediction failed: {}", e)))?;

        Ok(predictions.iter().map(|&code| code.max(0) as usize).collect())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }
}

fn ndarray_to_densematrix(arr: &Array2<f64>) -> DenseMatrix<f64> {
    let shape = arr.shape();
    let data: Vec<f64> = arr.iter().copied().collect();
    DenseMatrix::new(shape[0], shape[1], data, false)
}
