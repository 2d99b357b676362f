use std::sync::Arc;

use crate::config::Config;
use crate::prediction::model::SalaryPredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup and never mutated. Default: LinearSalaryModel.
    pub predictor: Arc<dyn SalaryPredictor>,
}
