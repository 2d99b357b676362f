//! Report building: display summary, export record and the CSV download.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::prediction::{Department, PositionLevel, PredictionRequest};

pub const REPORT_FILENAME: &str = "salary_prediction_report.csv";
pub const REPORT_MIME: &str = "text/csv";
pub const REPORT_PATH: &str = "/api/v1/predictions/report.csv";

/// `round(value, 2)`. Half-cents go to the even cent, matching `{:.2}`.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Renders a float the way the form echoes it back: `3.5`, `10.0`, `4.0`.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `{symbol}{amount:,.2f}`: two decimals with comma thousands separators.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// What the result card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySummary {
    pub years_experience: String,
    pub performance_rating: String,
    pub bonus_percentage: String,
    pub position_level: String,
    pub estimated_salary: String,
}

impl DisplaySummary {
    pub fn new(request: &PredictionRequest, prediction: f64, currency_symbol: &str) -> Self {
        Self {
            years_experience: request.years_experience.to_string(),
            performance_rating: format!("{}/5.0", format_decimal(request.performance_rating)),
            bonus_percentage: format!("{}%", format_decimal(request.bonus_percentage)),
            position_level: request.position_level.to_string(),
            estimated_salary: format_currency(currency_symbol, prediction),
        }
    }
}

/// Flat row written to the downloadable report. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Years of Experience")]
    pub years_experience: u32,
    #[serde(rename = "Performance Rating")]
    pub performance_rating: f64,
    #[serde(rename = "Bonus Percentage")]
    pub bonus_percentage: f64,
    #[serde(rename = "Department")]
    pub department: Department,
    #[serde(rename = "Position Level")]
    pub position_level: PositionLevel,
    #[serde(rename = "Predicted Salary")]
    pub predicted_salary: f64,
}

impl ExportRecord {
    pub fn new(request: &PredictionRequest, raw_prediction: f64) -> Self {
        Self {
            years_experience: request.years_experience,
            performance_rating: request.performance_rating,
            bonus_percentage: request.bonus_percentage,
            department: request.department,
            position_level: request.position_level,
            predicted_salary: round_to_cents(raw_prediction),
        }
    }

    /// Header row plus one data row, comma separated, no index column.
    pub fn to_csv(&self) -> Result<String, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .serialize(self)
            .map_err(|e| AppError::Export(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
    }
}

/// Download link carrying the submitted values. Every value is URL-safe:
/// numbers and fixed enum names.
pub fn download_path(request: &PredictionRequest) -> String {
    format!(
        "{REPORT_PATH}?years_experience={}&performance_rating={}&bonus_percentage={}&department={}&position_level={}",
        request.years_experience,
        format_decimal(request.performance_rating),
        format_decimal(request.bonus_percentage),
        request.department,
        request.position_level,
    )
}

/// UI-only acknowledgment. Nothing is ever delivered.
pub fn email_confirmation(request: &PredictionRequest) -> Option<String> {
    request
        .email_recipient()
        .map(|email| format!("Report will be sent to: {email}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
