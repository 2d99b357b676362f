//! The shared prediction pipeline used by both page themes and the JSON API:
//! features → model → display summary + export record.

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::prediction::PredictionRequest;
use crate::prediction::features::{build_features, FeatureVector};
use crate::prediction::model::SalaryPredictor;
use crate::prediction::report::{email_confirmation, round_to_cents, DisplaySummary, ExportRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub features: FeatureVector,
    pub raw_prediction: f64,
    pub predicted_salary: f64,
    pub display: DisplaySummary,
    pub export: ExportRecord,
    pub email_confirmation: Option<String>,
}

/// Runs one submission through the model. The predictor is called exactly
/// once; any model error aborts the submission.
pub fn predict_salary(
    predictor: &dyn SalaryPredictor,
    request: &PredictionRequest,
    currency_symbol: &str,
) -> Result<PredictionResult, AppError> {
    let features = build_features(request);
    let raw_prediction = predictor.predict(features.as_slice())?;
    debug!(
        "Predicted {raw_prediction} for features {:?} via {}",
        features.as_slice(),
        predictor.backend()
    );

    Ok(PredictionResult {
        features,
        raw_prediction,
        predicted_salary: round_to_cents(raw_prediction),
        display: DisplaySummary::new(request, raw_prediction, currency_symbol),
        export: ExportRecord::new(request, raw_prediction),
        email_confirmation: email_confirmation(request),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
