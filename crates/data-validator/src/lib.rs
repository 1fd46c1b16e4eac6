//! Request Payload Validation
//!
//! Range checking and category allow-list enforcement for decoded
//! prediction requests. Payloads that fail here never reach the model.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
