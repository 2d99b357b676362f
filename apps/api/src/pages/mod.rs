//! Server-rendered form pages.
//!
//! Both pages share one layout and one prediction pipeline; a [`Theme`] only
//! decides how they look.

pub mod handlers;
pub mod home;
pub mod insights;

use std::fmt::Write;

use crate::models::prediction::{Department, PositionLevel, PredictionRequest};
use crate::prediction::report::{download_path, format_decimal};
use crate::prediction::service::PredictionResult;

const TITLE: &str = "Salary Prediction Tool";
const TAGLINE: &str = "Get accurate salary estimates based on your experience and role";

/// Presentation layer for one page: where it is mounted and how it looks.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub key: &'static str,
    pub route: &'static str,
    pub accent: &'static str,
    pub stylesheet: &'static str,
}

/// Minimal escaping for text interpolated into HTML bodies and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_form_page(theme: &Theme, values: &PredictionRequest) -> String {
    layout(theme, &form(theme, values))
}

pub fn render_result_page(
    theme: &Theme,
    request: &PredictionRequest,
    result: &PredictionResult,
) -> String {
    let mut body = form(theme, request);
    body.push_str(&result_card(request, result));
    layout(theme, &body)
}

/// Form page with an error notice in place of the result card.
pub fn render_error_page(theme: &Theme, values: &PredictionRequest, message: &str) -> String {
    let mut body = form(theme, values);
    body.push_str(&error_notice(message));
    layout(theme, &body)
}

/// Static page shown when the model never loaded. No form is offered.
pub fn render_unavailable_page(theme: &Theme, message: &str) -> String {
    layout(theme, &error_notice(message))
}

fn layout(theme: &Theme, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="{accent}">
<title>Salary Predictor</title>
<style>{stylesheet}</style>
</head>
<body class="theme-{key}">
<div class="main-container">
<div class="header">
<h1>{TITLE}</h1>
<p>{TAGLINE}</p>
</div>
{body}
</div>
</body>
</html>
"#,
        accent = theme.accent,
        stylesheet = theme.stylesheet,
        key = theme.key,
    )
}

fn form(theme: &Theme, values: &PredictionRequest) -> String {
    let email = escape_html(values.email.as_deref().unwrap_or_default());
    format!(
        r#"<form class="form-container" method="post" action="{action}">
<div class="form-grid">
<div>
<label>Years of Experience
<input type="number" name="years_experience" min="0" max="50" step="1" value="{years}" required></label>
<label>Bonus Percentage
<input type="number" name="bonus_percentage" min="0" max="100" step="0.5" value="{bonus}" required></label>
</div>
<div>
<label>Job Performance Rating <output>{rating}</output>
<input type="range" name="performance_rating" min="1" max="5" step="0.5" value="{rating}" oninput="this.previousElementSibling.value=this.value"></label>
<label>Department
<select name="department">{departments}</select></label>
</div>
</div>
<label>Position Level
<select name="position_level">{positions}</select></label>
<label>Email (optional, for report delivery)
<input type="text" name="email" value="{email}"></label>
<button type="submit">Predict Salary</button>
</form>
"#,
        action = theme.route,
        years = values.years_experience,
        bonus = format_decimal(values.bonus_percentage),
        rating = format_decimal(values.performance_rating),
        departments = options(Department::ALL.iter().map(Department::as_str), values.department.as_str()),
        positions = options(
            PositionLevel::ALL.iter().map(PositionLevel::as_str),
            values.position_level.as_str()
        ),
    )
}

fn options<'a>(names: impl Iterator<Item = &'a str>, selected: &str) -> String {
    let mut out = String::new();
    for name in names {
        let marker = if name == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{name}"{marker}>{name}</option>"#);
    }
    out
}

fn result_card(request: &PredictionRequest, result: &PredictionResult) -> String {
    let display = &result.display;
    let mut card = format!(
        r#"<div class="result-card">
<h3>Salary Prediction Result</h3>
<div class="row"><span>Years of Experience:</span><span><strong>{years}</strong></span></div>
<div class="row"><span>Performance Rating:</span><span><strong>{rating}</strong></span></div>
<div class="row"><span>Bonus Percentage:</span><span><strong>{bonus}</strong></span></div>
<div class="row"><span>Position Level:</span><span><strong>{position}</strong></span></div>
<div class="salary">
<h4>Estimated Annual Salary</h4>
<h2>{salary}</h2>
</div>
<a class="download-btn" href="{href}" download>Download Report as CSV</a>
</div>
"#,
        years = display.years_experience,
        rating = display.performance_rating,
        bonus = display.bonus_percentage,
        position = display.position_level,
        salary = escape_html(&display.estimated_salary),
        href = escape_html(&download_path(request)),
    );

    if let Some(message) = &result.email_confirmation {
        let _ = write!(card, r#"<div class="notice">{}</div>"#, escape_html(message));
    }
    card
}

fn error_notice(message: &str) -> String {
    format!(r#"<div class="notice error">{}</div>"#, escape_html(message))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
