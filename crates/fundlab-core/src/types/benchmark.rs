//! Benchmark return observations.

use serde::{Deserialize, Serialize};

/// Trailing returns for the fund's external benchmark index.
///
/// Supplied directly by the upstream data source rather than computed;
/// each horizon is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReturns {
    /// Trailing one-year total return, in percent.
    pub one_year: Option<f64>,

    /// Trailing three-year cumulative return, in percent.
    pub three_year: Option<f64>,

    /// Trailing five-year cumulative return, in percent.
    pub five_year: Option<f64>,
}

impl BenchmarkReturns {
    /// Creates new empty benchmark returns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the one-year return.
    #[must_use]
    pub fn with_one_year(mut self, pct: f64) -> Self {
        self.one_year = Some(pct);
        self
    }

    /// Sets the three-year return.
    #[must_use]
    pub fn with_three_year(mut self, pct: f64) -> Self {
        self.three_year = Some(pct);
        self
    }

    /// Sets the five-year return.
    #[must_use]
    pub fn with_five_year(mut self, pct: f64) -> Self {
        self.five_year = Some(pct);
        self
    }
}
