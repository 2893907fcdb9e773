//! Command implementations and shared helpers.

pub mod allocation;
pub mod backtest;
pub mod metrics;
pub mod sample;

pub use allocation::AllocationArgs;
pub use backtest::BacktestArgs;
pub use metrics::MetricsArgs;
pub use sample::SampleArgs;

use crate::error::{CliError, CliResult};
use chrono::NaiveDate;
use fundlab_core::types::Fund;
use std::path::Path;

/// Parses a YYYY-MM-DD date string.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Loads and validates a portfolio definition from a JSON file.
pub fn load_fund(path: &Path) -> CliResult<Fund> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::PortfolioRead {
        path: display.clone(),
        source,
    })?;
    let fund: Fund =
        serde_json::from_str(&contents).map_err(|source| CliError::PortfolioParse {
            path: display,
            source,
        })?;
    fund.validate()?;
    Ok(fund)
}
