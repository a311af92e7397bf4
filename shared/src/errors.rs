//! Error types for the calculation engine
//!
//! None of these are faults: they describe input that is not yet complete or
//! not inside a formula's domain, and the calculators surface them as an
//! absent result.

use crate::validation::get_field_display_label;
use thiserror::Error;

/// Reasons a calculator produced no result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field is absent, non-numeric or zero
    #[error("Missing input: {field}")]
    MissingInput { field: &'static str },

    /// A present value lies outside the formula's valid domain
    #[error("Domain violation for {field}: {message}")]
    DomainViolation { field: &'static str, message: String },

    /// A unit name could not be parsed
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

impl CalcError {
    pub fn missing(field: &'static str) -> Self {
        CalcError::MissingInput { field }
    }

    pub fn domain(field: &'static str, message: impl Into<String>) -> Self {
        CalcError::DomainViolation {
            field,
            message: message.into(),
        }
    }

    /// The field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalcError::MissingInput { field } | CalcError::DomainViolation { field, .. } => {
                Some(field)
            }
            CalcError::InvalidUnit(_) => None,
        }
    }

    /// Whether the calculator is simply waiting for more input
    pub fn is_missing_input(&self) -> bool {
        matches!(self, CalcError::MissingInput { .. })
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CalcError::MissingInput { field } => {
                format!("{}: required", get_field_display_label(field))
            }
            CalcError::DomainViolation { field, message } => {
                format!("{}: {}", get_field_display_label(field), message)
            }
            CalcError::InvalidUnit(message) => message.clone(),
        }
    }
}

/// Result alias used by every calculator
pub type CalcResult<T> = Result<T, CalcError>;
