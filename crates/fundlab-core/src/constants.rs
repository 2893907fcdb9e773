//! Policy constants for the reconciliation and backtest engine.
//!
//! These values define the data-sufficiency policy and the fixed
//! assumptions of the simulated fund model. Changing any of them changes
//! every downstream numeric output.

/// Annual expense ratio subtracted from the weighted one-year return when
/// projecting forward, in percentage points.
pub const EXPENSE_RATIO: f64 = 0.10;

/// Annualized risk-free rate used in the Sharpe ratio, in percent.
pub const RISK_FREE_RATE: f64 = 4.25;

/// Scaling applied to the cross-sectional dispersion estimate to proxy for
/// imperfect correlation between holdings.
pub const DIVERSIFICATION_FACTOR: f64 = 0.7;

/// Minimum covered weight (percent of fund) required before a weighted
/// aggregate is considered defensible. The aggregator requires coverage
/// strictly above this value.
pub const MIN_COVERAGE_WEIGHT: f64 = 50.0;

/// Minimum number of holdings with one-year return data required for the
/// volatility proxy.
pub const MIN_VOLATILITY_HOLDINGS: usize = 3;

/// Notional starting capital for the reconstructed equity curve, in
/// fictional currency units.
pub const START_VALUE: f64 = 10_000.0;

/// Span of the reconstructed equity curve in months.
pub const BACKTEST_MONTHS: u32 = 60;

/// Number of points in the reconstructed equity curve (monthly, inclusive
/// of both endpoints).
pub const BACKTEST_POINTS: usize = 61;

/// Month index of the three-year anchor within the backtest span.
pub const THREE_YEAR_MONTH: u32 = 24;

/// Month index of the one-year anchor within the backtest span.
pub const ONE_YEAR_MONTH: u32 = 48;

/// Tolerance (percentage points) when checking that holding weights sum
/// to a full allocation of 100.
pub const FULL_ALLOCATION_TOLERANCE: f64 = 0.5;
