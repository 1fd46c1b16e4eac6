//! Payload Validator

use crate::error::ValidationError;
use feature_engine::{EmployeeProfile, WorkObservation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
///
/// Category allow-lists are per-service; the two attrition services ship
/// different department and gender literals, so neither list is baked
/// into the types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Valid login/logout hour range
    pub hour_range: (u32, u32),
    /// Minimum employee age
    pub min_age: u32,
    /// Valid performance rating range
    pub rating_range: (u32, u32),
    /// Allowed gender literals
    pub genders: Vec<String>,
    /// Allowed education literals
    pub educations: Vec<String>,
    /// Allowed department literals
    pub departments: Vec<String>,
    /// Allowed overtime literals
    pub overtime: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            hour_range: (0, 24),
            min_age: 18,
            rating_range: (1, 4),
            genders: to_strings(&["Male", "Female", "Other"]),
            educations: to_strings(&["Graduate", "Post-Graduate", "PhD"]),
            departments: to_strings(&["IT", "Sales", "HR", "Finance"]),
            overtime: to_strings(&["Yes", "No"]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Result of validating a full payload
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all fields passed
    pub valid: bool,
    /// Every violation found, not just the first
    pub errors: Vec<ValidationError>,
    /// Number of fields checked
    pub fields_checked: usize,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }
}

/// Validator for prediction request payloads
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with the given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a closed range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a value against a lower bound
    pub fn validate_minimum(
        &self,
        field: &'static str,
        value: f64,
        min: f64,
    ) -> Result<(), ValidationError> {
        if value < min {
            Err(ValidationError::BelowMinimum { field, value, min })
        } else {
            Ok(())
        }
    }

    /// Validate a categorical value against an allow-list
    pub fn validate_category(
        &self,
        field: &'static str,
        value: &str,
        allowed: &[String],
    ) -> Result<(), ValidationError> {
        if allowed.iter().any(|a| a == value) {
            Ok(())
        } else {
            Err(ValidationError::UnknownCategory {
                field,
                value: value.to_string(),
                allowed: allowed.join(", "),
            })
        }
    }

    /// Validate a login/logout hour
    pub fn validate_hour(&self, field: &'static str, hour: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.hour_range;
        self.validate_range(field, hour as f64, (min as f64, max as f64))
    }

    /// Validate a productivity shift observation.
    ///
    /// Task and absence counts are non-negative by type; only the hour
    /// bounds can fail.
    pub fn validate_observation(&self, obs: &WorkObservation) -> ValidationResult {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_hour("login_time", obs.login_time) {
            errors.push(e);
        }
        if let Err(e) = self.validate_hour("logout_time", obs.logout_time) {
            errors.push(e);
        }

        debug!(errors = errors.len(), "validated shift observation");
        ValidationResult::from_errors(errors, 4)
    }

    /// Validate an attrition employee profile.
    ///
    /// `job_role` is a free-form title in every service schema and is not
    /// checked against a list.
    pub fn validate_profile(&self, profile: &EmployeeProfile) -> ValidationResult {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_minimum("age", profile.age as f64, self.config.min_age as f64)
        {
            errors.push(e);
        }
        if let Err(e) = self.validate_minimum("monthly_income", profile.monthly_income, 0.0) {
            errors.push(e);
        }
        let (rating_min, rating_max) = self.config.rating_range;
        if let Err(e) = self.validate_range(
            "performance_rating",
            profile.performance_rating as f64,
            (rating_min as f64, rating_max as f64),
        ) {
            errors.push(e);
        }
        if let Err(e) = self.validate_category("gender", &profile.gender, &self.config.genders) {
            errors.push(e);
        }
        if let Err(e) =
            self.validate_category("education", &profile.education, &self.config.educations)
        {
            errors.push(e);
        }
        if let Err(e) =
            self.validate_category("department", &profile.department, &self.config.departments)
        {
            errors.push(e);
        }
        if let Err(e) = self.validate_category("overtime", &profile.overtime, &self.config.overtime)
        {
            errors.push(e);
        }

        debug!(errors = errors.len(), "validated employee profile");
        ValidationResult::from_errors(errors, 10)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_profile() -> EmployeeProfile {
        EmployeeProfile {
            age: 30,
            gender: "Female".to_string(),
            education: "Graduate".to_string(),
            department: "HR".to_string(),
            job_role: "Executive".to_string(),
            monthly_income: 45_000.0,
            years_at_company: 2,
            promotions: 0,
            overtime: "Yes".to_string(),
            performance_rating: 2,
        }
    }

    #[test]
    fn test_valid_observation() {
        let validator = Validator::default();
        let obs = WorkObservation {
            login_time: 9,
            logout_time: 17,
            total_tasks_completed: 20,
            weekly_absences: 1,
        };
        let result = validator.validate_observation(&obs);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_hour_out_of_range() {
        let validator = Validator::default();
        let obs = WorkObservation {
            login_time: 25,
            logout_time: 17,
            total_tasks_completed: 20,
            weekly_absences: 1,
        };
        let result = validator.validate_observation(&obs);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].to_string().contains("login_time"));
    }

    #[test]
    fn test_hour_boundaries_are_inclusive() {
        let validator = Validator::default();
        assert!(validator.validate_hour("login_time", 0).is_ok());
        assert!(validator.validate_hour("login_time", 24).is_ok());
        assert!(validator.validate_hour("login_time", 25).is_err());
    }

    #[test]
    fn test_valid_profile() {
        let validator = Validator::default();
        let result = validator.validate_profile(&sample_profile());
        assert!(result.valid);
    }

    #[test]
    fn test_underage_profile() {
        let validator = Validator::default();
        let mut profile = sample_profile();
        profile.age = 17;
        let result = validator.validate_profile(&profile);
        assert!(!result.valid);
        assert!(result.errors[0].to_string().contains("age"));
    }

    #[test]
    fn test_unknown_department() {
        let validator = Validator::default();
        let mut profile = sample_profile();
        profile.department = "R&D".to_string();
        let result = validator.validate_profile(&profile);
        assert!(!result.valid);
        assert!(result.errors[0].to_string().contains("department"));
    }

    #[test]
    fn test_drifted_department_list() {
        // The pipeline service allows R&D but not Finance
        let config = ValidationConfig {
            departments: vec![
                "HR".to_string(),
                "Sales".to_string(),
                "IT".to_string(),
                "R&D".to_string(),
            ],
            ..Default::default()
        };
        let validator = Validator::new(config);
        let mut profile = sample_profile();
        profile.department = "R&D".to_string();
        assert!(validator.validate_profile(&profile).valid);

        profile.department = "Finance".to_string();
        assert!(!validator.validate_profile(&profile).valid);
    }

    #[test]
    fn test_collects_every_violation() {
        let validator = Validator::default();
        let mut profile = sample_profile();
        profile.age = 16;
        profile.performance_rating = 9;
        profile.overtime = "Sometimes".to_string();
        let result = validator.validate_profile(&profile);
        assert_eq!(result.errors.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_hours_within_range_pass(hour in 0u32..=24) {
            let validator = Validator::default();
            prop_assert!(validator.validate_hour("login_time", hour).is_ok());
        }

        #[test]
        fn prop_hours_above_range_fail(hour in 25u32..1000) {
            let validator = Validator::default();
            prop_assert!(validator.validate_hour("login_time", hour).is_err());
        }
    }
}
