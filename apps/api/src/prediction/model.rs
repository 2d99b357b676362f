//! Salary model. Pluggable, trait-based predictor loaded once at startup.
//!
//! Default: `LinearSalaryModel`, read from a JSON artifact
//! (`{"coefficients": [..], "intercept": ..}`).
//!
//! `AppState` holds an `Arc<dyn SalaryPredictor>`; tests inject a stub.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::prediction::features::FEATURE_COUNT;

#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("Model unavailable at '{path}': {reason}")]
    Unavailable { path: String, reason: String },

    #[error("Invalid feature shape: model expects {expected} features, got {actual}")]
    InvalidFeatureShape { expected: usize, actual: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Inference capability: one numeric feature row in, one scalar estimate out.
///
/// Implementations are read-only after construction and shared across
/// request handlers.
pub trait SalaryPredictor: Send + Sync {
    fn predict(&self, row: &[f64]) -> Result<f64, ModelError>;

    /// Short label for logs and API responses.
    fn backend(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// LinearSalaryModel
// ────────────────────────────────────────────────────────────────────────────

/// On-disk shape of a model artifact.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearSalaryModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearSalaryModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the model accepts the `[years_experience, adjusted_score]` row.
    pub fn accepts_feature_row(&self) -> bool {
        self.num_features() == FEATURE_COUNT
    }

    /// Reads and checks a model artifact. Every failure maps to
    /// `ModelError::Unavailable`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let unavailable = |reason: String| ModelError::Unavailable {
            path: path.display().to_string(),
            reason,
        };

        debug!("Reading model artifact from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| unavailable(format!("malformed artifact: {e}")))?;

        if artifact.coefficients.is_empty() {
            return Err(unavailable("artifact has no coefficients".to_string()));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(unavailable("artifact contains non-finite values".to_string()));
        }

        let model = LinearSalaryModel::new(artifact.coefficients, artifact.intercept);
        if !model.accepts_feature_row() {
            warn!(
                "Model at {} has {} coefficients but submissions send {FEATURE_COUNT} features; \
                 every prediction will fail with an invalid feature shape",
                path.display(),
                model.num_features()
            );
        }

        info!(
            "Loaded linear salary model ({} features) from {}",
            model.num_features(),
            path.display()
        );
        Ok(model)
    }
}

impl SalaryPredictor for LinearSalaryModel {
    fn predict(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::InvalidFeatureShape {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (w, x)| acc + w * x))
    }

    fn backend(&self) -> &str {
        "linear"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn artifact(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = artifact(r#"{"coefficients": [1500.0, 8000.0], "intercept": 20000.0}"#);
        let model = LinearSalaryModel::load(file.path()).unwrap();
        assert_eq!(model, LinearSalaryModel::new(vec![1500.0, 8000.0], 20000.0));
        assert_eq!(model.num_features(), 2);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinearSalaryModel::load(dir.path().join("linearmodel.json")).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
        assert!(err.to_string().contains("linearmodel.json"));
    }

    #[test]
    fn test_mismatched_coefficient_count_loads_but_rejects_feature_row() {
        let file = artifact(r#"{"coefficients": [1.0, 2.0, 3.0], "intercept": 0.0}"#);
        let model = LinearSalaryModel::load(file.path()).unwrap();
        assert!(!model.accepts_feature_row());

        let row = crate::prediction::features::build_features(
            &crate::models::prediction::PredictionRequest::default(),
        );
        assert!(matches!(
            model.predict(row.as_slice()),
            Err(ModelError::InvalidFeatureShape {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_two_coefficient_model_accepts_feature_row() {
        assert!(LinearSalaryModel::new(vec![1500.0, 8000.0], 0.0).accepts_feature_row());
    }

    #[test]
    fn test_malformed_artifact_is_unavailable() {
        let file = artifact("not json at all");
        let err = LinearSalaryModel::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_empty_coefficients_are_unavailable() {
        let file = artifact(r#"{"coefficients": [], "intercept": 1.0}"#);
        let err = LinearSalaryModel::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
    }

    #[test]
    fn test_predict_is_intercept_plus_dot_product() {
        let model = LinearSalaryModel::new(vec![1500.0, 8000.0], 20000.0);
        let salary = model.predict(&[5.0, 3.5]).unwrap();
        assert_eq!(salary, 20000.0 + 7500.0 + 28000.0);
    }

    #[test]
    fn test_wrong_row_length_is_invalid_shape() {
        let model = LinearSalaryModel::new(vec![1.0, 2.0, 3.0], 0.0);
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidFeatureShape {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_backend_label_is_linear() {
        assert_eq!(LinearSalaryModel::new(vec![1.0], 0.0).backend(), "linear");
    }
}
