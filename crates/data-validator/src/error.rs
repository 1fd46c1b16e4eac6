//! Validation Error Types

use thiserror::Error;

/// Errors during payload validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Value outside a closed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value below a lower bound
    #[error("{field} value {value} is below the minimum of {min}")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },

    /// Categorical value not in the allow-list
    #[error("{field} value '{value}' is not one of the allowed categories [{allowed}]")]
    UnknownCategory {
        field: &'static str,
        value: String,
        allowed: String,
    },
}
