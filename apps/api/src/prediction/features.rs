//! Feature Adjuster: turns a prediction request into the model's input row.
//!
//! The model was fitted on `[years_experience, adjusted_score]`, in that
//! order. Swapping the columns silently produces garbage, so the row is only
//! ever built through [`build_features`].

use serde::Serialize;

use crate::models::prediction::{PositionLevel, PredictionRequest};

/// Number of columns the salary model consumes.
pub const FEATURE_COUNT: usize = 2;

const SENIORITY_BUMP: f64 = 2.0;

/// Fixed-shape model input: `[years_experience, adjusted_score]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn years_experience(&self) -> f64 {
        self.0[0]
    }

    pub fn adjusted_score(&self) -> f64 {
        self.0[1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// `rating + bonus / 100 + (2 if Senior/Lead/Manager else 0)`.
pub fn adjusted_score(
    performance_rating: f64,
    bonus_percentage: f64,
    position_level: PositionLevel,
) -> f64 {
    let bump = if position_level.is_senior() {
        SENIORITY_BUMP
    } else {
        0.0
    };
    performance_rating + (bonus_percentage / 100.0) + bump
}

pub fn build_features(request: &PredictionRequest) -> FeatureVector {
    FeatureVector([
        f64::from(request.years_experience),
        adjusted_score(
            request.performance_rating,
            request.bonus_percentage,
            request.position_level,
        ),
    ])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
