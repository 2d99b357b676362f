//! Range and step checks for submissions arriving over HTTP. The form widgets
//! enforce the same limits client-side; this guards the JSON and CSV routes.

use crate::errors::AppError;
use crate::models::prediction::PredictionRequest;

pub const MAX_YEARS_EXPERIENCE: u32 = 50;
pub const RATING_RANGE: (f64, f64) = (1.0, 5.0);
pub const BONUS_RANGE: (f64, f64) = (0.0, 100.0);
pub const STEP: f64 = 0.5;

pub fn validate_request(request: &PredictionRequest) -> Result<(), AppError> {
    let mut issues = Vec::new();

    if request.years_experience > MAX_YEARS_EXPERIENCE {
        issues.push(format!(
            "years_experience must be between 0 and {MAX_YEARS_EXPERIENCE}"
        ));
    }
    check_stepped(
        "performance_rating",
        request.performance_rating,
        RATING_RANGE,
        &mut issues,
    );
    check_stepped(
        "bonus_percentage",
        request.bonus_percentage,
        BONUS_RANGE,
        &mut issues,
    );

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(issues.join("; ")))
    }
}

fn check_stepped(field: &str, value: f64, (min, max): (f64, f64), issues: &mut Vec<String>) {
    if !value.is_finite() || value < min || value > max {
        issues.push(format!("{field} must be between {min:.1} and {max:.1}"));
    } else if ((value - min) / STEP).fract() != 0.0 {
        issues.push(format!("{field} must be a multiple of {STEP}"));
    }
}
