//! Domain errors for undefined statistics and malformed employee fields.
//!
//! # Examples
//!
//! ```
//! use empstats::domain::error::StatsError;
//! use empstats::domain::stats::{mean, mode};
//!
//! assert!(matches!(mean(&[]), Err(StatsError::EmptyInput)));
//! assert!(matches!(mode(&[1, 2]), Err(StatsError::NoUniqueMode)));
//! ```

use thiserror::Error;

/// Errors that occur when a statistic is undefined for its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The statistic was requested over zero observations.
    #[error("statistic requires at least one observation")]
    EmptyInput,

    /// No single value has strictly the highest frequency.
    #[error("no unique mode")]
    NoUniqueMode,
}

/// A single employee field that is missing or has the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct FieldError {
    /// JSON key of the offending field.
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub reason: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
