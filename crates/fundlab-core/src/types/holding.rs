//! Holding representation with partially-verified observed fields.

use super::HoldingReturns;
use crate::error::{FundError, FundResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One constituent of the simulated fund.
///
/// The allocation `weight` is a percentage of the fund in [0, 100].
/// Weights across a fund are expected to sum roughly, but not exactly,
/// to 100. The observed `returns` fields come from an upstream data
/// source and may be arbitrarily sparse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol identifying the asset.
    pub ticker: String,

    /// Display name, when known.
    pub name: Option<String>,

    /// Sector classification, when known.
    pub sector: Option<String>,

    /// Last observed price, when known.
    pub price: Option<Decimal>,

    /// Allocation weight as a percentage of the fund (0-100).
    pub weight: Decimal,

    /// Observed return and yield fields.
    #[serde(default)]
    pub returns: HoldingReturns,
}

impl Holding {
    /// Creates a holding with the given ticker and weight and no
    /// observed data.
    #[must_use]
    pub fn new(ticker: impl Into<String>, weight: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            sector: None,
            price: None,
            weight,
            returns: HoldingReturns::default(),
        }
    }

    /// Returns a builder for fluent construction.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::default()
    }

    /// Validates structural invariants: non-empty ticker and a weight
    /// in the [0, 100] percentage range.
    pub fn validate(&self) -> FundResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(FundError::missing_field("ticker"));
        }
        if self.weight < Decimal::ZERO || self.weight > Decimal::ONE_HUNDRED {
            return Err(FundError::invalid_weight(self.ticker.as_str(), self.weight));
        }
        Ok(())
    }
}

/// Builder for constructing a [`Holding`].
///
/// # Example
///
/// ```rust
/// use fundlab_core::types::{Holding, HoldingReturns};
/// use rust_decimal_macros::dec;
///
/// let holding = Holding::builder()
///     .ticker("VTI")
///     .weight(dec!(40))
///     .sector("Equity")
///     .returns(HoldingReturns::new().with_one_year(12.3))
///     .build()
///     .unwrap();
/// assert_eq!(holding.returns.one_year, Some(12.3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    ticker: Option<String>,
    name: Option<String>,
    sector: Option<String>,
    price: Option<Decimal>,
    weight: Option<Decimal>,
    returns: HoldingReturns,
}

impl HoldingBuilder {
    /// Sets the ticker symbol.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sector classification.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the last observed price.
    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the allocation weight (percent of fund).
    #[must_use]
    pub fn weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the observed return fields.
    #[must_use]
    pub fn returns(mut self, returns: HoldingReturns) -> Self {
        self.returns = returns;
        self
    }

    /// Builds the holding, validating structural invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker or weight is missing, the ticker is
    /// empty, or the weight falls outside [0, 100].
    pub fn build(self) -> FundResult<Holding> {
        let ticker = self.ticker.ok_or_else(|| FundError::missing_field("ticker"))?;
        let weight = self.weight.ok_or_else(|| FundError::missing_field("weight"))?;

        let holding = Holding {
            ticker,
            name: self.name,
            sector: self.sector,
            price: self.price,
            weight,
            returns: self.returns,
        };
        holding.validate()?;
        Ok(holding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder() {
        let holding = Holding::builder()
            .ticker("SCHD")
            .name("Schwab US Dividend Equity ETF")
            .sector("Equity")
            .weight(dec!(25))
            .price(dec!(82.41))
            .returns(HoldingReturns::new().with_dividend_yield(3.4))
            .build()
            .unwrap();

        assert_eq!(holding.ticker, "SCHD");
        assert_eq!(holding.weight, dec!(25));
        assert_eq!(holding.returns.dividend_yield, Some(3.4));
    }

    #[test]
    fn test_missing_ticker() {
        let result = Holding::builder().weight(dec!(10)).build();
        assert!(matches!(result, Err(FundError::MissingField { .. })));
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let result = Holding::builder().ticker("  ").weight(dec!(10)).build();
        assert!(matches!(result, Err(FundError::MissingField { .. })));
    }

    #[test]
    fn test_weight_out_of_range() {
        let result = Holding::builder().ticker("VTI").weight(dec!(120)).build();
        assert!(matches!(result, Err(FundError::InvalidWeight { .. })));

        let result = Holding::builder().ticker("VTI").weight(dec!(-1)).build();
        assert!(matches!(result, Err(FundError::InvalidWeight { .. })));
    }

    #[test]
    fn test_serde_round_trip() {
        let holding = Holding::builder()
            .ticker("QQQ")
            .weight(dec!(15.5))
            .returns(HoldingReturns::new().with_one_year(28.0))
            .build()
            .unwrap();

        let json = serde_json::to_string(&holding).unwrap();
        let parsed: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, holding);
    }
}
