//! Derived Feature Assembly

use crate::observation::WorkObservation;
use serde::{Deserialize, Serialize};

/// Number of derived features fed to the scaler and regressor
pub const FEATURE_DIMENSION: usize = 5;

/// Column order the scaler and regressor are fitted on.
///
/// The downstream model consumes positions, not names; reordering these
/// corrupts predictions without any error being raised.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "daily_work_hours",
    "tasks_per_hour",
    "absenteeism_rate",
    "total_tasks_completed",
    "weekly_absences",
];

/// Working days assumed per week for the absenteeism rate
const WORK_DAYS_PER_WEEK: f64 = 5.0;

/// Engineered features for a single observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    /// Shift length in hours, clamped to at least 1
    pub daily_work_hours: f64,
    /// Tasks completed per worked hour
    pub tasks_per_hour: f64,
    /// Weekly absences as a fraction of the work week
    pub absenteeism_rate: f64,
    /// Tasks completed, passed through unchanged
    pub total_tasks_completed: f64,
    /// Absences, passed through unchanged
    pub weekly_absences: f64,
}

impl DerivedFeatures {
    /// Derive the feature set from a raw observation.
    ///
    /// Total over the input domain: an overnight shift (logout before
    /// login) clamps `daily_work_hours` to 1 instead of erroring, which
    /// also keeps the `tasks_per_hour` denominator non-zero.
    pub fn from_observation(obs: &WorkObservation) -> Self {
        let daily_work_hours = (obs.logout_time as f64 - obs.login_time as f64).max(1.0);
        let tasks_per_hour = obs.total_tasks_completed as f64 / daily_work_hours;
        let absenteeism_rate = obs.weekly_absences as f64 / WORK_DAYS_PER_WEEK;

        Self {
            daily_work_hours,
            tasks_per_hour,
            absenteeism_rate,
            total_tasks_completed: obs.total_tasks_completed as f64,
            weekly_absences: obs.weekly_absences as f64,
        }
    }

    /// Feature vector in fitted column order
    pub fn to_vector(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.daily_work_hours,
            self.tasks_per_hour,
            self.absenteeism_rate,
            self.total_tasks_completed,
            self.weekly_absences,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_shift() {
        let obs = WorkObservation {
            login_time: 9,
            logout_time: 17,
            total_tasks_completed: 20,
            weekly_absences: 1,
        };
        let features = DerivedFeatures::from_observation(&obs);

        assert_eq!(features.daily_work_hours, 8.0);
        assert_eq!(features.tasks_per_hour, 2.5);
        assert_eq!(features.absenteeism_rate, 0.2);
        assert_eq!(features.total_tasks_completed, 20.0);
        assert_eq!(features.weekly_absences, 1.0);
    }

    #[test]
    fn test_overnight_shift_clamps_to_one_hour() {
        // login=22, logout=6 would naively give -16 hours
        let obs = WorkObservation {
            login_time: 22,
            logout_time: 6,
            total_tasks_completed: 4,
            weekly_absences: 0,
        };
        let features = DerivedFeatures::from_observation(&obs);

        assert_eq!(features.daily_work_hours, 1.0);
        assert_eq!(features.tasks_per_hour, 4.0);
    }

    #[test]
    fn test_zero_length_shift_clamps_to_one_hour() {
        let obs = WorkObservation {
            login_time: 9,
            logout_time: 9,
            total_tasks_completed: 3,
            weekly_absences: 2,
        };
        let features = DerivedFeatures::from_observation(&obs);

        assert_eq!(features.daily_work_hours, 1.0);
        assert_eq!(features.tasks_per_hour, 3.0);
        assert_eq!(features.absenteeism_rate, 0.4);
    }

    #[test]
    fn test_vector_matches_column_order() {
        let obs = WorkObservation {
            login_time: 8,
            logout_time: 18,
            total_tasks_completed: 30,
            weekly_absences: 2,
        };
        let features = DerivedFeatures::from_observation(&obs);
        let vector = features.to_vector();

        assert_eq!(vector.len(), FEATURE_DIMENSION);
        assert_eq!(vector[0], features.daily_work_hours);
        assert_eq!(vector[1], features.tasks_per_hour);
        assert_eq!(vector[2], features.absenteeism_rate);
        assert_eq!(vector[3], features.total_tasks_completed);
        assert_eq!(vector[4], features.weekly_absences);
        assert_eq!(FEATURE_NAMES[0], "daily_work_hours");
        assert_eq!(FEATURE_NAMES[4], "weekly_absences");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let obs = WorkObservation {
            login_time: 7,
            logout_time: 15,
            total_tasks_completed: 12,
            weekly_absences: 3,
        };
        let first = DerivedFeatures::from_observation(&obs);
        let second = DerivedFeatures::from_observation(&obs);

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_work_hours_at_least_one(
            login in 0u32..=24,
            logout in 0u32..=24,
            tasks in 0u32..1000,
            absences in 0u32..100,
        ) {
            let obs = WorkObservation {
                login_time: login,
                logout_time: logout,
                total_tasks_completed: tasks,
                weekly_absences: absences,
            };
            let features = DerivedFeatures::from_observation(&obs);

            prop_assert!(features.daily_work_hours >= 1.0);
            prop_assert_eq!(
                features.tasks_per_hour,
                tasks as f64 / features.daily_work_hours
            );
            prop_assert_eq!(features.absenteeism_rate, absences as f64 / 5.0);
        }
    }
}
