//! Fund representation and builder.

use super::{BenchmarkReturns, Holding};
use crate::constants::FULL_ALLOCATION_TOLERANCE;
use crate::error::{FundError, FundResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A simulated fund: a named set of holdings plus benchmark observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Fund display name.
    pub name: String,

    /// Fund constituents in presentation order.
    pub holdings: Vec<Holding>,

    /// Trailing returns of the external benchmark index.
    #[serde(default)]
    pub benchmark: BenchmarkReturns,
}

impl Fund {
    /// Returns a builder for fluent construction.
    #[must_use]
    pub fn builder() -> FundBuilder {
        FundBuilder::default()
    }

    /// Sum of allocation weights across all holdings, in percent.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.holdings
            .iter()
            .map(|h| h.weight.to_f64().unwrap_or(0.0))
            .sum()
    }

    /// Returns true if the weights sum to a full allocation of 100
    /// within tolerance.
    #[must_use]
    pub fn is_fully_allocated(&self) -> bool {
        (self.total_weight() - 100.0).abs() <= FULL_ALLOCATION_TOLERANCE
    }

    /// Validates structural invariants of the fund and every holding.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, any holding fails its own
    /// validation, or two holdings share a ticker.
    pub fn validate(&self) -> FundResult<()> {
        if self.name.trim().is_empty() {
            return Err(FundError::missing_field("name"));
        }
        let mut seen = std::collections::HashSet::new();
        for holding in &self.holdings {
            holding.validate()?;
            if !seen.insert(holding.ticker.as_str()) {
                return Err(FundError::invalid_holding(
                    holding.ticker.as_str(),
                    "duplicate ticker",
                ));
            }
        }
        Ok(())
    }
}

/// Builder for constructing a [`Fund`].
///
/// # Example
///
/// ```rust
/// use fundlab_core::types::{BenchmarkReturns, Fund, Holding};
/// use rust_decimal_macros::dec;
///
/// let fund = Fund::builder()
///     .name("Balanced Growth")
///     .add_holding(Holding::new("VTI", dec!(60)))
///     .add_holding(Holding::new("BND", dec!(40)))
///     .benchmark(BenchmarkReturns::new().with_five_year(55.0))
///     .build()
///     .unwrap();
/// assert_eq!(fund.holdings.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FundBuilder {
    name: Option<String>,
    holdings: Vec<Holding>,
    benchmark: BenchmarkReturns,
}

impl FundBuilder {
    /// Sets the fund name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a holding to the fund.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings to the fund.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Sets all holdings (replacing any existing).
    #[must_use]
    pub fn holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = holdings;
        self
    }

    /// Sets the benchmark returns.
    #[must_use]
    pub fn benchmark(mut self, benchmark: BenchmarkReturns) -> Self {
        self.benchmark = benchmark;
        self
    }

    /// Builds the fund, validating every holding.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing or validation fails.
    pub fn build(self) -> FundResult<Fund> {
        let fund = Fund {
            name: self.name.ok_or_else(|| FundError::missing_field("name"))?,
            holdings: self.holdings,
            benchmark: self.benchmark,
        };
        fund.validate()?;
        Ok(fund)
    }
}

/// Weight helper shared with the analytics crate: allocation weight as f64.
#[must_use]
pub fn weight_as_f64(weight: Decimal) -> f64 {
    weight.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_and_totals() {
        let fund = Fund::builder()
            .name("Test Fund")
            .add_holding(Holding::new("VTI", dec!(60)))
            .add_holding(Holding::new("BND", dec!(39.8)))
            .build()
            .unwrap();

        assert_relative_eq!(fund.total_weight(), 99.8);
        assert!(fund.is_fully_allocated());
    }

    #[test]
    fn test_underallocated() {
        let fund = Fund::builder()
            .name("Sparse")
            .add_holding(Holding::new("VTI", dec!(70)))
            .build()
            .unwrap();

        assert!(!fund.is_fully_allocated());
    }

    #[test]
    fn test_empty_fund_is_valid() {
        let fund = Fund::builder().name("Empty").build().unwrap();
        assert_eq!(fund.total_weight(), 0.0);
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let result = Fund::builder()
            .name("Dup")
            .add_holding(Holding::new("VTI", dec!(50)))
            .add_holding(Holding::new("VTI", dec!(50)))
            .build();

        assert!(matches!(result, Err(FundError::InvalidHolding { .. })));
    }

    #[test]
    fn test_invalid_holding_rejected() {
        let result = Fund::builder()
            .name("Bad")
            .add_holding(Holding::new("VTI", dec!(150)))
            .build();

        assert!(matches!(result, Err(FundError::InvalidWeight { .. })));
    }
}
