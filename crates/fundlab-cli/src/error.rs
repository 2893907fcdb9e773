//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Portfolio file could not be read.
    #[error("Cannot read portfolio file '{path}': {source}")]
    PortfolioRead {
        /// The path that failed.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Portfolio file could not be parsed.
    #[error("Cannot parse portfolio file '{path}': {source}")]
    PortfolioParse {
        /// The path that failed.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Portfolio failed structural validation.
    #[error(transparent)]
    InvalidFund(#[from] fundlab_core::FundError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
