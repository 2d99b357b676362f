use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub model_path: String,
    /// Cosmetic pause before a result page renders. Zero disables it.
    pub result_delay_ms: u64,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            model_path: "linearmodel.json".to_string(),
            result_delay_ms: 0,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            model_path: optional_env("MODEL_PATH").unwrap_or(defaults.model_path),
            result_delay_ms: optional_env("RESULT_DELAY_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RESULT_DELAY_MS must be a non-negative integer")?
                .unwrap_or(defaults.result_delay_ms),
            currency_symbol: optional_env("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
