//! Error types for fund construction.
//!
//! Errors here cover structural validity only (bad weights, empty
//! identifiers). Data insufficiency during analytics is not an error:
//! it is signalled with `None` by the analytics crate.

use thiserror::Error;

/// Result type for fund operations.
pub type FundResult<T> = Result<T, FundError>;

/// Errors that can occur while constructing a fund or holding.
#[derive(Error, Debug, Clone)]
pub enum FundError {
    /// Invalid fund configuration.
    #[error("Invalid fund: {reason}")]
    InvalidFund {
        /// The reason the fund is invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{ticker}': {reason}")]
    InvalidHolding {
        /// The holding ticker.
        ticker: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Allocation weight outside the [0, 100] percentage range.
    #[error("Invalid weight for holding '{ticker}': {value}")]
    InvalidWeight {
        /// The holding ticker.
        ticker: String,
        /// The invalid weight value.
        value: String,
    },
}

impl FundError {
    /// Create an invalid fund error.
    #[must_use]
    pub fn invalid_fund(reason: impl Into<String>) -> Self {
        Self::InvalidFund {
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub fn invalid_weight(ticker: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidWeight {
            ticker: ticker.into(),
            value: value.to_string(),
        }
    }
}
