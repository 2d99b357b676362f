pub mod health;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::pages::{self, home::HOME, insights::INSIGHTS};
use crate::prediction::handlers;
use crate::prediction::model::ModelError;
use crate::prediction::report::REPORT_PATH;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form pages
        .route(
            HOME.route,
            get(pages::handlers::handle_home_form).post(pages::handlers::handle_home_submit),
        )
        .route(
            INSIGHTS.route,
            get(pages::handlers::handle_insights_form)
                .post(pages::handlers::handle_insights_submit),
        )
        // Prediction API
        .route("/api/v1/predictions", post(handlers::handle_predict))
        .route(REPORT_PATH, get(handlers::handle_download_report))
        .with_state(state)
}

/// Router served when the model artifact failed to load. Every route except
/// `/health` answers 503; no predictor exists, so nothing is ever predicted.
pub fn build_unavailable_router(error: ModelError) -> Router {
    Router::new()
        .route("/health", get(health::degraded_health_handler))
        .fallback(unavailable_handler)
        .with_state(Arc::new(error))
}

async fn unavailable_handler(State(error): State<Arc<ModelError>>, uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with("/api/") {
        return AppError::Model(error.as_ref().clone()).into_response();
    }

    let theme = if path.starts_with(INSIGHTS.route) {
        &INSIGHTS
    } else {
        &HOME
    };
    let message = match error.as_ref() {
        ModelError::Unavailable { path, .. } => {
            format!("Model file not found. Make sure '{path}' exists.")
        }
        other => other.to_string(),
    };
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(pages::render_unavailable_page(theme, &message)),
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::prediction::service::tests::StubPredictor;

    fn app_with(stub: Arc<StubPredictor>) -> Router {
        build_router(AppState {
            config: Config::default(),
            predictor: stub,
        })
    }

    fn unavailable_app() -> Router {
        build_unavailable_router(ModelError::Unavailable {
            path: "linearmodel.json".to_string(),
            reason: "No such file or directory".to_string(),
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_model_backend() {
        let response = app_with(Arc::new(StubPredictor::returning(1.0)))
            .oneshot(get_req("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "stub");
    }

    #[tokio::test]
    async fn test_predict_endpoint_returns_export_record() {
        let stub = Arc::new(StubPredictor::returning(75000.0));
        let response = app_with(stub.clone())
            .oneshot(json_post(
                "/api/v1/predictions",
                json!({
                    "years_experience": 5,
                    "performance_rating": 3.5,
                    "bonus_percentage": 10.0,
                    "department": "Engineering",
                    "position_level": "Mid"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["model_backend"], "stub");
        assert_eq!(body["predicted_salary"], 75000.0);
        assert_eq!(body["features"][0], 5.0);
        assert_eq!(body["export"]["Position Level"], "Mid");
        assert_eq!(body["export"]["Predicted Salary"], 75000.0);
        assert_eq!(body["display"]["estimated_salary"], "₹75,000.00");
        assert!(body["email_confirmation"].is_null());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_predict_endpoint_rejects_out_of_range_input() {
        let stub = Arc::new(StubPredictor::returning(1.0));
        let response = app_with(stub.clone())
            .oneshot(json_post(
                "/api/v1/predictions",
                json!({
                    "years_experience": 51,
                    "performance_rating": 3.5,
                    "bonus_percentage": 10.0,
                    "department": "Sales",
                    "position_level": "Junior"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_report_download_is_single_row_csv() {
        let response = app_with(Arc::new(StubPredictor::returning(75000.0)))
            .oneshot(get_req(
                "/api/v1/predictions/report.csv?years_experience=5&performance_rating=3.5\
                 &bonus_percentage=10.0&department=HR&position_level=Mid",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv"));
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"salary_prediction_report.csv\""
        );
        assert_eq!(
            body_string(response).await,
            "Years of Experience,Performance Rating,Bonus Percentage,Department,Position Level,Predicted Salary\n\
             5,3.5,10.0,HR,Mid,75000.0\n"
        );
    }

    #[tokio::test]
    async fn test_home_form_submission_renders_result() {
        let response = app_with(Arc::new(StubPredictor::returning(120000.0)))
            .oneshot(form_post(
                "/",
                "years_experience=10&performance_rating=4.5&bonus_percentage=20.0\
                 &department=Finance&position_level=Senior&email=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("₹120,000.00"));
        assert!(html.contains("Senior"));
        assert!(!html.contains("Report will be sent"));
    }

    #[tokio::test]
    async fn test_insights_submission_acknowledges_email() {
        let response = app_with(Arc::new(StubPredictor::returning(50000.0)))
            .oneshot(form_post(
                "/insights",
                "years_experience=0&performance_rating=1.0&bonus_percentage=0.0\
                 &department=Operations&position_level=Junior&email=ada%40example.com",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Report will be sent to: ada@example.com"));
        assert!(html.contains("#3498db"));
    }

    #[tokio::test]
    async fn test_form_validation_error_rerenders_page() {
        let response = app_with(Arc::new(StubPredictor::returning(1.0)))
            .oneshot(form_post(
                "/",
                "years_experience=5&performance_rating=3.3&bonus_percentage=10.0\
                 &department=Sales&position_level=Mid&email=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("performance_rating must be a multiple of 0.5"));
        assert!(html.contains("<form"));
    }

    #[tokio::test]
    async fn test_unavailable_model_serves_static_error_page() {
        let response = unavailable_app().oneshot(get_req("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let html = body_string(response).await;
        assert!(html.contains("Model file not found. Make sure &#39;linearmodel.json&#39; exists."));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn test_unavailable_model_rejects_api_calls() {
        let response = unavailable_app()
            .oneshot(json_post(
                "/api/v1/predictions",
                json!({
                    "years_experience": 5,
                    "performance_rating": 3.5,
                    "bonus_percentage": 10.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "MODEL_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_unavailable_health_is_degraded() {
        let response = unavailable_app().oneshot(get_req("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "degraded");
    }

    #[tokio::test]
    async fn test_unknown_position_level_in_json_is_validation_error() {
        let stub = Arc::new(StubPredictor::returning(1.0));
        let response = app_with(stub.clone())
            .oneshot(json_post(
                "/api/v1/predictions",
                json!({
                    "years_experience": 5,
                    "performance_rating": 3.5,
                    "bonus_percentage": 10.0,
                    "department": "Sales",
                    "position_level": "senior"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("senior"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_position_level_in_report_query_is_validation_error() {
        let response = app_with(Arc::new(StubPredictor::returning(1.0)))
            .oneshot(get_req(
                "/api/v1/predictions/report.csv?years_experience=5&performance_rating=3.5\
                 &bonus_percentage=10.0&department=Sales&position_level=Intern",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_form_values_rerender_page_with_error() {
        for (uri, body) in [
            (
                "/",
                "years_experience=5&performance_rating=3.5&bonus_percentage=10.0\
                 &department=IT&position_level=Mid&email=",
            ),
            (
                "/insights",
                "years_experience=5&performance_rating=3.5&bonus_percentage=10.0\
                 &department=Sales&position_level=senior&email=",
            ),
        ] {
            let stub = Arc::new(StubPredictor::returning(1.0));
            let response = app_with(stub.clone())
                .oneshot(form_post(uri, body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri={uri}");
            let html = body_string(response).await;
            assert!(html.contains("<form"), "uri={uri}");
            assert!(html.contains(r#"class="notice error""#), "uri={uri}");
            assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_delay_pauses_before_rendering() {
        let app = build_router(AppState {
            config: Config {
                result_delay_ms: 1500,
                ..Config::default()
            },
            predictor: Arc::new(StubPredictor::returning(75000.0)),
        });

        let started = tokio::time::Instant::now();
        let response = app
            .oneshot(form_post(
                "/",
                "years_experience=5&performance_rating=3.5&bonus_percentage=10.0\
                 &department=Sales&position_level=Mid&email=",
            ))
            .await
            .unwrap();

        assert!(started.elapsed() >= std::time::Duration::from_millis(1500));
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("₹75,000.00"));
    }
}
