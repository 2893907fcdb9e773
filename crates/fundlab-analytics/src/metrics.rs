//! Derived fund metrics.
//!
//! Projected return, portfolio dividend yield, a cross-sectional
//! volatility proxy, and the Sharpe ratio. Every metric is independently
//! gated: an absent prerequisite propagates as `None`, never as zero.

use crate::aggregation::{aggregate_fund, FundAggregates};
use fundlab_core::constants::{
    DIVERSIFICATION_FACTOR, EXPENSE_RATIO, MIN_COVERAGE_WEIGHT, MIN_VOLATILITY_HOLDINGS,
    RISK_FREE_RATE,
};
use fundlab_core::types::{weight_as_f64, Fund, Holding};
use serde::{Deserialize, Serialize};

/// Derived metrics for a fund.
///
/// Each field is present only when its inputs cleared their sufficiency
/// gates. Consumers must render an explicit "data unavailable" state for
/// absent fields rather than substituting zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundMetrics {
    /// Projected annual return net of expenses, in percent.
    pub projected_return: Option<f64>,

    /// Weighted portfolio dividend yield, in percent.
    pub dividend_yield: Option<f64>,

    /// Cross-sectional volatility proxy, in percent.
    pub volatility: Option<f64>,

    /// Sharpe ratio of projected excess return over the volatility proxy.
    pub sharpe_ratio: Option<f64>,
}

/// Projected annual return: the weighted one-year return less the fixed
/// expense ratio.
///
/// # Returns
///
/// Returns `None` when the one-year aggregate is absent.
#[must_use]
pub fn projected_return(aggregates: &FundAggregates) -> Option<f64> {
    aggregates.one_year_return.map(|r| r - EXPENSE_RATIO)
}

/// Weighted portfolio dividend yield.
///
/// # Returns
///
/// Returns `None` when the dividend-yield aggregate is absent.
#[must_use]
pub fn portfolio_dividend_yield(aggregates: &FundAggregates) -> Option<f64> {
    aggregates.dividend_yield
}

/// Cross-sectional volatility proxy.
///
/// This is a dispersion estimate, not a time-series volatility: the
/// population standard deviation of the available one-year returns
/// (unweighted), scaled by the diversification factor to proxy for
/// imperfect correlation between holdings. Treat it as an approximation.
///
/// ## Formula
///
/// ```text
/// vol = stdev_pop(r_1..r_n) × 0.7
/// ```
///
/// # Returns
///
/// Returns `None` unless at least 3 holdings have a one-year return and
/// their combined weight is at least 50% of the fund.
#[must_use]
pub fn volatility_proxy(holdings: &[Holding]) -> Option<f64> {
    let covered: Vec<(f64, f64)> = holdings
        .iter()
        .filter_map(|h| h.returns.one_year.map(|r| (weight_as_f64(h.weight), r)))
        .collect();

    if covered.len() < MIN_VOLATILITY_HOLDINGS {
        return None;
    }
    let combined_weight: f64 = covered.iter().map(|(w, _)| w).sum();
    if combined_weight < MIN_COVERAGE_WEIGHT {
        return None;
    }

    let count = covered.len() as f64;
    let mean = covered.iter().map(|(_, r)| r).sum::<f64>() / count;
    let variance = covered
        .iter()
        .map(|(_, r)| (r - mean).powi(2))
        .sum::<f64>()
        / count;

    Some(variance.sqrt() * DIVERSIFICATION_FACTOR)
}

/// Sharpe ratio: projected excess return over the risk-free rate, per
/// unit of volatility proxy.
///
/// ## Formula
///
/// ```text
/// sharpe = (projected − 4.25) / volatility
/// ```
///
/// # Returns
///
/// Returns `None` when either input is absent or volatility is exactly
/// zero.
#[must_use]
pub fn sharpe_ratio(projected_return: Option<f64>, volatility: Option<f64>) -> Option<f64> {
    match (projected_return, volatility) {
        (Some(projected), Some(vol)) if vol != 0.0 => Some((projected - RISK_FREE_RATE) / vol),
        _ => None,
    }
}

/// Computes all derived metrics for a fund from fresh aggregates.
#[must_use]
pub fn calculate_fund_metrics(fund: &Fund) -> FundMetrics {
    let aggregates = aggregate_fund(fund);
    let projected = projected_return(&aggregates);
    let volatility = volatility_proxy(&fund.holdings);

    FundMetrics {
        projected_return: projected,
        dividend_yield: portfolio_dividend_yield(&aggregates),
        volatility,
        sharpe_ratio: sharpe_ratio(projected, volatility),
    }
}
