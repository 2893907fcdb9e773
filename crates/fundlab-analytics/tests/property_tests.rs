//! Property-based tests for fundlab-analytics.
//!
//! Verifies the data-sufficiency gate, renormalization bounds, and the
//! shape invariants of the reconstructed series across generated inputs.

use chrono::NaiveDate;
use fundlab_analytics::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// One generated holding: an integral weight and an optional 1Y return.
fn arb_holding() -> impl Strategy<Value = (u32, Option<f64>)> {
    (0u32..=100, proptest::option::of(-95.0f64..400.0))
}

fn build_holdings(entries: &[(u32, Option<f64>)]) -> Vec<Holding> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (weight, one_year))| {
            let mut returns = HoldingReturns::new();
            if let Some(r) = one_year {
                returns = returns.with_one_year(*r);
            }
            Holding::builder()
                .ticker(format!("H{i}"))
                .weight(Decimal::from(*weight))
                .returns(returns)
                .build()
                .unwrap()
        })
        .collect()
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
}

proptest! {
    // =========================================================================
    // WEIGHTED AGGREGATOR
    // =========================================================================

    #[test]
    fn aggregate_respects_sufficiency_gate(entries in prop::collection::vec(arb_holding(), 0..12)) {
        let holdings = build_holdings(&entries);
        let covered = covered_weight(&holdings, ReturnField::OneYear);
        let result = weighted_aggregate(&holdings, ReturnField::OneYear);

        prop_assert_eq!(result.is_some(), covered > 50.0);
    }

    #[test]
    fn aggregate_stays_within_covered_range(entries in prop::collection::vec(arb_holding(), 1..12)) {
        let holdings = build_holdings(&entries);

        if let Some(value) = weighted_aggregate(&holdings, ReturnField::OneYear) {
            let covered: Vec<f64> = holdings
                .iter()
                .filter_map(|h| h.returns.one_year)
                .collect();
            let min = covered.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = covered.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            // Renormalization is a weighted mean of the covered values.
            prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
        }
    }

    #[test]
    fn aggregate_is_idempotent(entries in prop::collection::vec(arb_holding(), 0..12)) {
        let holdings = build_holdings(&entries);
        prop_assert_eq!(
            weighted_aggregate(&holdings, ReturnField::OneYear),
            weighted_aggregate(&holdings, ReturnField::OneYear)
        );
    }

    // =========================================================================
    // DERIVED METRICS
    // =========================================================================

    #[test]
    fn volatility_is_non_negative(entries in prop::collection::vec(arb_holding(), 0..12)) {
        let holdings = build_holdings(&entries);
        if let Some(vol) = volatility_proxy(&holdings) {
            prop_assert!(vol >= 0.0);
        }
    }

    #[test]
    fn sharpe_requires_both_inputs(
        projected in proptest::option::of(-50.0f64..50.0),
        volatility in proptest::option::of(0.0f64..40.0),
    ) {
        let sharpe = sharpe_ratio(projected, volatility);
        match (projected, volatility) {
            (Some(_), Some(v)) if v != 0.0 => prop_assert!(sharpe.is_some()),
            _ => prop_assert_eq!(sharpe, None),
        }
        if let Some(s) = sharpe {
            prop_assert!(s.is_finite());
        }
    }

    // =========================================================================
    // BACKTEST RECONSTRUCTOR
    // =========================================================================

    #[test]
    fn series_is_all_or_nothing(
        fund_5y in proptest::option::of(-95.0f64..400.0),
        fund_3y in proptest::option::of(-95.0f64..400.0),
        fund_1y in proptest::option::of(-95.0f64..400.0),
        bench_5y in proptest::option::of(-95.0f64..400.0),
    ) {
        let mut fund = SeriesAnchors::new();
        fund.five_year = fund_5y;
        fund.three_year = fund_3y;
        fund.one_year = fund_1y;
        let mut benchmark = SeriesAnchors::new();
        benchmark.five_year = bench_5y;

        let series = reconstruct_series(&fund, &benchmark, reference_date());
        prop_assert!(series.len() == 61 || series.is_empty());
        prop_assert_eq!(
            series.len() == 61,
            fund_5y.is_some() && bench_5y.is_some()
        );
    }

    #[test]
    fn series_endpoints_are_exact(
        fund_5y in -95.0f64..400.0,
        bench_5y in -95.0f64..400.0,
    ) {
        let fund = SeriesAnchors::new().with_five_year(fund_5y);
        let benchmark = SeriesAnchors::new().with_five_year(bench_5y);

        let series = reconstruct_series(&fund, &benchmark, reference_date());
        prop_assert_eq!(series.len(), 61);
        prop_assert_eq!(series[0].fund_value, 10_000.0);
        prop_assert_eq!(series[0].benchmark_value, 10_000.0);
        prop_assert_eq!(
            series[60].fund_value,
            (10_000.0 * (1.0 + fund_5y / 100.0)).round()
        );
        prop_assert_eq!(
            series[60].benchmark_value,
            (10_000.0 * (1.0 + bench_5y / 100.0)).round()
        );
    }

    #[test]
    fn series_values_are_positive_and_rounded(
        fund_5y in -95.0f64..400.0,
        fund_3y in proptest::option::of(-95.0f64..400.0),
        fund_1y in proptest::option::of(-95.0f64..400.0),
    ) {
        let mut fund = SeriesAnchors::new().with_five_year(fund_5y);
        fund.three_year = fund_3y;
        fund.one_year = fund_1y;
        let benchmark = SeriesAnchors::new().with_five_year(20.0);

        for point in reconstruct_series(&fund, &benchmark, reference_date()) {
            prop_assert!(point.fund_value >= 0.0);
            prop_assert_eq!(point.fund_value, point.fund_value.round());
            prop_assert_eq!(point.benchmark_value, point.benchmark_value.round());
        }
    }

    #[test]
    fn series_dates_span_sixty_months(
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let fund = SeriesAnchors::new().with_five_year(40.0);

        let series = reconstruct_series(&fund, &fund, reference);
        prop_assert_eq!(series[60].date, reference);
        for pair in series.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }
}
