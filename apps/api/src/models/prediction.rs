use std::fmt;

use serde::{Deserialize, Serialize};

/// Departments offered by the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Department {
    #[default]
    Engineering,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position levels offered by the prediction form. Names are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PositionLevel {
    #[default]
    Junior,
    Mid,
    Senior,
    Lead,
    Manager,
}

impl PositionLevel {
    pub const ALL: [PositionLevel; 5] = [
        PositionLevel::Junior,
        PositionLevel::Mid,
        PositionLevel::Senior,
        PositionLevel::Lead,
        PositionLevel::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionLevel::Junior => "Junior",
            PositionLevel::Mid => "Mid",
            PositionLevel::Senior => "Senior",
            PositionLevel::Lead => "Lead",
            PositionLevel::Manager => "Manager",
        }
    }

    /// Senior, Lead and Manager earn the seniority bump in the adjusted score.
    pub fn is_senior(&self) -> bool {
        matches!(
            self,
            PositionLevel::Senior | PositionLevel::Lead | PositionLevel::Manager
        )
    }
}

impl fmt::Display for PositionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form submission. Lives for a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub years_experience: u32,
    pub performance_rating: f64,
    pub bonus_percentage: f64,
    #[serde(default)]
    pub department: Department,
    #[serde(default)]
    pub position_level: PositionLevel,
    #[serde(default)]
    pub email: Option<String>,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            years_experience: 5,
            performance_rating: 3.5,
            bonus_percentage: 10.0,
            department: Department::default(),
            position_level: PositionLevel::default(),
            email: None,
        }
    }
}

impl PredictionRequest {
    /// The email address to acknowledge, if a non-empty one was supplied.
    pub fn email_recipient(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_level_parse_is_case_sensitive() {
        let senior: PositionLevel = serde_json::from_str("\"Senior\"").unwrap();
        assert_eq!(senior, PositionLevel::Senior);
        assert!(serde_json::from_str::<PositionLevel>("\"senior\"").is_err());
        assert!(serde_json::from_str::<PositionLevel>("\"MANAGER\"").is_err());
    }

    #[test]
    fn test_only_senior_lead_manager_are_senior() {
        let senior: Vec<_> = PositionLevel::ALL
            .into_iter()
            .filter(PositionLevel::is_senior)
            .collect();
        assert_eq!(
            senior,
            vec![PositionLevel::Senior, PositionLevel::Lead, PositionLevel::Manager]
        );
    }

    #[test]
    fn test_hr_department_uses_acronym_on_the_wire() {
        let json = serde_json::to_string(&Department::Hr).unwrap();
        assert_eq!(json, "\"HR\"");
        let parsed: Department = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(parsed, Department::Hr);
        assert!(serde_json::from_str::<Department>("\"Hr\"").is_err());
    }

    #[test]
    fn test_empty_email_is_not_a_recipient() {
        let mut request = PredictionRequest {
            email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.email_recipient(), None);

        request.email = Some("ada@example.com".to_string());
        assert_eq!(request.email_recipient(), Some("ada@example.com"));
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        let request = PredictionRequest::default();
        assert_eq!(request.years_experience, 5);
        assert_eq!(request.performance_rating, 3.5);
        assert_eq!(request.bonus_percentage, 10.0);
        assert_eq!(request.department, Department::Engineering);
        assert_eq!(request.position_level, PositionLevel::Junior);
    }
}
