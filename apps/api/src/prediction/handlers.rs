//! Axum route handlers for the Prediction API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::prediction::PredictionRequest;
use crate::prediction::report::{download_path, REPORT_FILENAME, REPORT_MIME};
use crate::prediction::service::{predict_salary, PredictionResult};
use crate::prediction::validation::validate_request;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model_backend: String,
    #[serde(flatten)]
    pub result: PredictionResult,
    pub report_url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/predictions
///
/// Runs the submission through the model and returns the feature row,
/// the rounded salary, the display summary and the export record.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let result = predict_salary(
        state.predictor.as_ref(),
        &request,
        &state.config.currency_symbol,
    )?;
    let prediction_id = Uuid::new_v4();
    info!(
        "Prediction {prediction_id}: years={} adjusted_score={} -> {}",
        result.features.years_experience(),
        result.features.adjusted_score(),
        result.predicted_salary
    );

    Ok(Json(PredictionResponse {
        prediction_id,
        generated_at: Utc::now(),
        model_backend: state.predictor.backend().to_string(),
        report_url: download_path(&request),
        result,
    }))
}

/// GET /api/v1/predictions/report.csv
///
/// Recomputes the prediction for the query's fields and serves the
/// single-row CSV report as an attachment.
pub async fn handle_download_report(
    State(state): State<AppState>,
    query: Result<Query<PredictionRequest>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(request) = query?;
    validate_request(&request)?;

    let result = predict_salary(
        state.predictor.as_ref(),
        &request,
        &state.config.currency_symbol,
    )?;
    let csv = result.export.to_csv()?;
    info!("Serving {REPORT_FILENAME} ({} bytes)", csv.len());

    Ok((
        [
            (header::CONTENT_TYPE, format!("{REPORT_MIME}; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
