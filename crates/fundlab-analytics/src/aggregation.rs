//! Coverage-gated weighted aggregation.
//!
//! Aggregates one optional per-holding field across a fund, weighted by
//! allocation, with a data-sufficiency gate: a result exists only when
//! more than half the fund's weight has usable data for the field.

use fundlab_core::constants::MIN_COVERAGE_WEIGHT;
use fundlab_core::types::{weight_as_f64, BenchmarkReturns, Fund, Holding, ReturnField};
use serde::{Deserialize, Serialize};

/// Portfolio-level weighted aggregates of the per-holding fields, plus
/// pass-through benchmark observations.
///
/// Each field is present only when its coverage cleared the sufficiency
/// gate. Aggregates are recomputed fresh from the current holding set
/// whenever the fund changes; they are never patched in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundAggregates {
    /// Weighted trailing one-year return, in percent.
    pub one_year_return: Option<f64>,

    /// Weighted trailing three-year cumulative return, in percent.
    pub three_year_return: Option<f64>,

    /// Weighted trailing five-year cumulative return, in percent.
    pub five_year_return: Option<f64>,

    /// Weighted trailing dividend yield, in percent.
    pub dividend_yield: Option<f64>,

    /// Benchmark returns, supplied upstream rather than computed.
    pub benchmark: BenchmarkReturns,
}

impl FundAggregates {
    /// Returns the aggregate for the selected field.
    #[must_use]
    pub fn get(&self, field: ReturnField) -> Option<f64> {
        match field {
            ReturnField::OneYear => self.one_year_return,
            ReturnField::ThreeYear => self.three_year_return,
            ReturnField::FiveYear => self.five_year_return,
            ReturnField::DividendYield => self.dividend_yield,
        }
    }
}

/// Sum of allocation weights of holdings for which the selected field has
/// a present value, in percent of the fund.
#[must_use]
pub fn covered_weight(holdings: &[Holding], field: ReturnField) -> f64 {
    holdings
        .iter()
        .filter(|h| h.returns.get(field).is_some())
        .map(|h| weight_as_f64(h.weight))
        .sum()
}

/// Calculates the allocation-weighted value of one optional field.
///
/// ## Formula
///
/// ```text
/// aggregate = (Σ w_i/100 × v_i) / covered × 100    for covered holdings
/// ```
///
/// Where `covered = Σ w_i` over holdings with the field present. When
/// coverage is partial the weighted sum is renormalized as if the covered
/// holdings constituted the entire fund, keeping the result comparable in
/// scale to a full-coverage one. This deliberately treats the covered
/// subset as representative of the whole.
///
/// # Returns
///
/// Returns `None` unless covered weight is strictly above 50% of fund
/// weight; coverage of exactly 50 is insufficient.
#[must_use]
pub fn weighted_aggregate(holdings: &[Holding], field: ReturnField) -> Option<f64> {
    let (weighted_sum, covered) = holdings.iter().fold((0.0_f64, 0.0_f64), |(sum, cov), h| {
        match h.returns.get(field) {
            Some(value) => {
                let weight = weight_as_f64(h.weight);
                (sum + weight / 100.0 * value, cov + weight)
            }
            None => (sum, cov),
        }
    });

    if covered > MIN_COVERAGE_WEIGHT {
        Some(weighted_sum / covered * 100.0)
    } else {
        None
    }
}

/// Computes all portfolio-level aggregates for a fund.
///
/// Benchmark returns are carried through untouched; they are an external
/// observation, not an aggregate.
#[must_use]
pub fn aggregate_fund(fund: &Fund) -> FundAggregates {
    FundAggregates {
        one_year_return: weighted_aggregate(&fund.holdings, ReturnField::OneYear),
        three_year_return: weighted_aggregate(&fund.holdings, ReturnField::ThreeYear),
        five_year_return: weighted_aggregate(&fund.holdings, ReturnField::FiveYear),
        dividend_yield: weighted_aggregate(&fund.holdings, ReturnField::DividendYield),
        benchmark: fund.benchmark,
    }
}
