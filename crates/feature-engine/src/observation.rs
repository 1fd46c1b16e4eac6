//! Raw Observation Payloads

use serde::{Deserialize, Serialize};

/// A single shift observation for one employee.
///
/// Hours are whole hours of the day; `login_time` and `logout_time` are
/// bounded to [0, 24] by the request validator before reaching any model
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkObservation {
    /// Hour of day the employee logged in (0-24)
    pub login_time: u32,
    /// Hour of day the employee logged out (0-24)
    pub logout_time: u32,
    /// Tasks completed in the shift
    pub total_tasks_completed: u32,
    /// Absences in the week
    pub weekly_absences: u32,
}

/// An employee profile as submitted to the attrition services.
///
/// Categorical fields stay as free strings here; the allowed literals
/// differ between the two attrition services and are enforced by the
/// request validator, not by the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Employee age in years (18+)
    pub age: u32,
    pub gender: String,
    pub education: String,
    pub department: String,
    /// Specific role title, e.g. "Executive" or "Manager"
    pub job_role: String,
    /// Monthly gross income
    pub monthly_income: f64,
    pub years_at_company: u32,
    /// Count of promotions received
    pub promotions: u32,
    pub overtime: String,
    /// Performance score (1-4)
    pub performance_rating: u32,
}
