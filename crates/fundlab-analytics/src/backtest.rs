//! Equity-curve reconstruction from sparse return anchors.
//!
//! Rebuilds a 61-point monthly trajectory for a fund and its benchmark
//! from at most four known points per series: the notional start, and the
//! values implied by the 5-year, 3-year, and 1-year trailing returns.
//! Gaps are filled with piecewise exponential (compound-growth)
//! interpolation so that each window lands exactly on its endpoints and
//! total return compounds consistently.

use crate::aggregation::FundAggregates;
use chrono::{Months, NaiveDate};
use fundlab_core::constants::{BACKTEST_MONTHS, ONE_YEAR_MONTH, START_VALUE, THREE_YEAR_MONTH};
use fundlab_core::types::BenchmarkReturns;
use serde::{Deserialize, Serialize};

/// The trailing-return anchors for one reconstructed series.
///
/// Horizons are cumulative percentages. The five-year anchor is the hard
/// precondition for reconstruction; the others refine the path when
/// present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnchors {
    /// Trailing one-year return, in percent.
    pub one_year: Option<f64>,

    /// Trailing three-year cumulative return, in percent.
    pub three_year: Option<f64>,

    /// Trailing five-year cumulative return, in percent.
    pub five_year: Option<f64>,
}

impl SeriesAnchors {
    /// Creates empty anchors.
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

impl From<&FundAggregates> for SeriesAnchors {
    /// Fund-side anchors come from the weighted aggregates.
    fn from(aggregates: &FundAggregates) -> Self {
        Self {
            one_year: aggregates.one_year_return,
            three_year: aggregates.three_year_return,
            five_year: aggregates.five_year_return,
        }
    }
}

impl From<&BenchmarkReturns> for SeriesAnchors {
    /// Benchmark-side anchors are the supplied index returns.
    fn from(benchmark: &BenchmarkReturns) -> Self {
        Self {
            one_year: benchmark.one_year,
            three_year: benchmark.three_year,
            five_year: benchmark.five_year,
        }
    }
}

/// One point of the reconstructed equity curve.
///
/// Values are denominated in the fictional starting-capital currency and
/// rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestPoint {
    /// Month-granular timestamp of the point.
    pub date: NaiveDate,

    /// Reconstructed fund value.
    pub fund_value: f64,

    /// Reconstructed benchmark value.
    pub benchmark_value: f64,
}

/// Notional values implied by one series' anchors.
///
/// `start` sits at month 0, `three_year` at month 24, `one_year` at
/// month 48, `now` at month 60. The interior values are solved backwards
/// from `now`: a trailing return of r% over a horizon means the value at
/// the start of that horizon was `now / (1 + r/100)`.
#[derive(Debug, Clone, Copy)]
struct AnchorValues {
    start: f64,
    three_year: Option<f64>,
    one_year: Option<f64>,
    now: f64,
}

impl AnchorValues {
    /// Derives notional values from trailing returns.
    ///
    /// Returns `None` when the five-year anchor is missing or implies a
    /// non-positive value (a return of -100% or worse), since exponential
    /// interpolation needs positive endpoints. Interior anchors with
    /// non-positive growth are likewise treated as absent.
    fn derive(anchors: &SeriesAnchors) -> Option<Self> {
        let now = START_VALUE * growth_factor(anchors.five_year?)?;
        Some(Self {
            start: START_VALUE,
            three_year: anchors.three_year.and_then(growth_factor).map(|g| now / g),
            one_year: anchors.one_year.and_then(growth_factor).map(|g| now / g),
            now,
        })
    }

    /// Value at the given month offset (0..=60) along the curve.
    ///
    /// The span is divided into three windows with an ordered fallback
    /// rule per missing boundary:
    ///
    /// - months 0-24 run from `start` to the 3-year value; without a
    ///   3-year anchor the window degrades to the direct `start -> now`
    ///   path over the full 60-month fraction.
    /// - months 24-48 run from the 3-year value (else `start` at month 0)
    ///   to the 1-year value (else `now` at month 60).
    /// - months 48-60 run from the 1-year value (else 3-year, else
    ///   `start`) to `now`.
    ///
    /// Missing boundaries therefore chain to the nearest available anchor
    /// and every window still lands exactly on its effective endpoints.
    fn value_at(&self, month: u32) -> f64 {
        let m = f64::from(month);
        let three_year_m = f64::from(THREE_YEAR_MONTH);
        let one_year_m = f64::from(ONE_YEAR_MONTH);
        let end_m = f64::from(BACKTEST_MONTHS);

        if month <= THREE_YEAR_MONTH {
            match self.three_year {
                Some(v3) => grow(self.start, v3, m / three_year_m),
                None => grow(self.start, self.now, m / end_m),
            }
        } else if month <= ONE_YEAR_MONTH {
            let (from, from_m) = match self.three_year {
                Some(v3) => (v3, three_year_m),
                None => (self.start, 0.0),
            };
            let (to, to_m) = match self.one_year {
                Some(v1) => (v1, one_year_m),
                None => (self.now, end_m),
            };
            grow(from, to, (m - from_m) / (to_m - from_m))
        } else {
            let (from, from_m) = match (self.one_year, self.three_year) {
                (Some(v1), _) => (v1, one_year_m),
                (None, Some(v3)) => (v3, three_year_m),
                (None, None) => (self.start, 0.0),
            };
            grow(from, self.now, (m - from_m) / (end_m - from_m))
        }
    }
}

/// Converts a trailing return percentage into a growth factor, rejecting
/// factors that are not positive.
fn growth_factor(pct: f64) -> Option<f64> {
    let factor = 1.0 + pct / 100.0;
    (factor > 0.0 && factor.is_finite()).then_some(factor)
}

/// Exponential (compound-growth) interpolation between two values.
///
/// ```text
/// value(t) = start × (end/start)^t,  t in [0, 1]
/// ```
fn grow(start: f64, end: f64, fraction: f64) -> f64 {
    start * (end / start).powf(fraction)
}

/// Reconstructs the 61-point monthly equity curve for fund and benchmark.
///
/// Point `m` carries the timestamp `reference_date − (60 − m)` months, so
/// the series spans the trailing five years and ends at the reference
/// date. The reference date is an explicit parameter: identical anchors
/// and reference date always produce an identical series.
///
/// # Returns
///
/// Returns exactly 61 points, or an empty vector when either series lacks
/// a usable five-year anchor. No partial series is ever produced.
#[must_use]
pub fn reconstruct_series(
    fund: &SeriesAnchors,
    benchmark: &SeriesAnchors,
    reference_date: NaiveDate,
) -> Vec<BacktestPoint> {
    let (Some(fund_values), Some(benchmark_values)) =
        (AnchorValues::derive(fund), AnchorValues::derive(benchmark))
    else {
        return Vec::new();
    };

    (0..=BACKTEST_MONTHS)
        .map(|month| BacktestPoint {
            date: reference_date - Months::new(BACKTEST_MONTHS - month),
            fund_value: fund_values.value_at(month).round(),
            benchmark_value: benchmark_values.value_at(month).round(),
        })
        .collect()
}
