mod config;
mod errors;
mod models;
mod pages;
mod prediction;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::prediction::model::{LinearSalaryModel, SalaryPredictor};
use crate::routes::{build_router, build_unavailable_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Salary Predictor v{}", env!("CARGO_PKG_VERSION"));

    // Load the salary model once; it stays read-only for the process lifetime.
    // A missing artifact does not abort startup: every request gets a static error instead.
    let router = match LinearSalaryModel::load(&config.model_path) {
        Ok(model) => {
            let predictor: Arc<dyn SalaryPredictor> = Arc::new(model);
            info!("Salary model ready (backend: {})", predictor.backend());
            if config.result_delay_ms > 0 {
                info!("Result delay: {}ms", config.result_delay_ms);
            }
            build_router(AppState {
                config: config.clone(),
                predictor,
            })
        }
        Err(e) => {
            error!("{e}; serving the unavailable page for all requests");
            build_unavailable_router(e)
        }
    };

    let app = router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
