//! Observed return and yield fields for a holding.

use serde::{Deserialize, Serialize};

/// Observed return/yield fields for a holding.
///
/// Every field is optional: `None` means "data unavailable for this
/// holding", which is distinct from a zero value. The upstream data source
/// populates whatever subset it could verify; the aggregator decides
/// whether the populated subset is sufficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingReturns {
    /// Trailing one-year total return, in percent.
    pub one_year: Option<f64>,

    /// Trailing three-year cumulative total return, in percent.
    pub three_year: Option<f64>,

    /// Trailing five-year cumulative total return, in percent.
    pub five_year: Option<f64>,

    /// Trailing dividend yield, in percent.
    pub dividend_yield: Option<f64>,
}

impl HoldingReturns {
    /// Creates new empty returns.
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

    /// Sets the dividend yield.
    #[must_use]
    pub fn with_dividend_yield(mut self, pct: f64) -> Self {
        self.dividend_yield = Some(pct);
        self
    }

    /// Returns the value of the selected field.
    #[must_use]
    pub fn get(&self, field: ReturnField) -> Option<f64> {
        match field {
            ReturnField::OneYear => self.one_year,
            ReturnField::ThreeYear => self.three_year,
            ReturnField::FiveYear => self.five_year,
            ReturnField::DividendYield => self.dividend_yield,
        }
    }

    /// Returns true if no field has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.one_year.is_none()
            && self.three_year.is_none()
            && self.five_year.is_none()
            && self.dividend_yield.is_none()
    }
}

/// Selector for one of the optional per-holding numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnField {
    /// Trailing one-year total return.
    OneYear,
    /// Trailing three-year cumulative return.
    ThreeYear,
    /// Trailing five-year cumulative return.
    FiveYear,
    /// Trailing dividend yield.
    DividendYield,
}

impl ReturnField {
    /// All selectable fields, in horizon order.
    pub const ALL: [Self; 4] = [
        Self::OneYear,
        Self::ThreeYear,
        Self::FiveYear,
        Self::DividendYield,
    ];

    /// Returns a human-readable label for the field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneYear => "1Y Return",
            Self::ThreeYear => "3Y Return",
            Self::FiveYear => "5Y Return",
            Self::DividendYield => "Dividend Yield",
        }
    }
}

impl std::fmt::Display for ReturnField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
