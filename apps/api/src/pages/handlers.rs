use std::time::Duration;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::prediction::PredictionRequest;
use crate::pages::home::HOME;
use crate::pages::insights::INSIGHTS;
use crate::pages::{render_error_page, render_form_page, render_result_page, Theme};
use crate::prediction::service::predict_salary;
use crate::prediction::validation::validate_request;
use crate::state::AppState;

/// GET /
pub async fn handle_home_form() -> Html<String> {
    Html(render_form_page(&HOME, &PredictionRequest::default()))
}

/// POST /
pub async fn handle_home_submit(
    State(state): State<AppState>,
    form: Result<Form<PredictionRequest>, FormRejection>,
) -> Response {
    submit(&HOME, &state, form).await
}

/// GET /insights
pub async fn handle_insights_form() -> Html<String> {
    Html(render_form_page(&INSIGHTS, &PredictionRequest::default()))
}

/// POST /insights
pub async fn handle_insights_submit(
    State(state): State<AppState>,
    form: Result<Form<PredictionRequest>, FormRejection>,
) -> Response {
    submit(&INSIGHTS, &state, form).await
}

/// Shared submit flow for both themes. Failures re-render the form with an
/// error notice and the matching status code.
async fn submit(
    theme: &Theme,
    state: &AppState,
    form: Result<Form<PredictionRequest>, FormRejection>,
) -> Response {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            let err = AppError::from(rejection);
            warn!("[{}] unreadable submission: {err}", theme.key);
            return error_response(theme, &PredictionRequest::default(), &err);
        }
    };

    let outcome = validate_request(&request).and_then(|()| {
        predict_salary(
            state.predictor.as_ref(),
            &request,
            &state.config.currency_symbol,
        )
    });

    match outcome {
        Ok(result) => {
            if state.config.result_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(state.config.result_delay_ms)).await;
            }
            info!(
                "[{}] predicted {} for years={} adjusted_score={}",
                theme.key,
                result.predicted_salary,
                result.features.years_experience(),
                result.features.adjusted_score()
            );
            Html(render_result_page(theme, &request, &result)).into_response()
        }
        Err(err) => {
            warn!("[{}] submission failed: {err}", theme.key);
            error_response(theme, &request, &err)
        }
    }
}

fn error_response(theme: &Theme, request: &PredictionRequest, err: &AppError) -> Response {
    let (status, _, message) = err.parts();
    (status, Html(render_error_page(theme, request, &message))).into_response()
}
