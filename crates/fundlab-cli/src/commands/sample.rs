//! Sample command implementation.
//!
//! Emits a well-formed portfolio definition for experimentation. Stands
//! in for the upstream data source, including its sparseness: one holding
//! deliberately lacks most fields.

use anyhow::Result;
use clap::Args;
use rust_decimal_macros::dec;
use std::path::PathBuf;

use fundlab_core::types::{BenchmarkReturns, Fund, Holding, HoldingReturns};
use fundlab_core::FundResult;

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Builds the sample portfolio.
pub fn sample_fund() -> FundResult<Fund> {
    Fund::builder()
        .name("Balanced Growth 60/40")
        .add_holding(
            Holding::builder()
                .ticker("VTI")
                .name("Vanguard Total Stock Market ETF")
                .sector("US Equity")
                .weight(dec!(35))
                .price(dec!(292.40))
                .returns(
                    HoldingReturns::new()
                        .with_one_year(16.2)
                        .with_three_year(31.8)
                        .with_five_year(84.5)
                        .with_dividend_yield(1.3),
                )
                .build()?,
        )
        .add_holding(
            Holding::builder()
                .ticker("VXUS")
                .name("Vanguard Total International Stock ETF")
                .sector("International Equity")
                .weight(dec!(25))
                .price(dec!(64.91))
                .returns(
                    HoldingReturns::new()
                        .with_one_year(9.8)
                        .with_three_year(14.6)
                        .with_five_year(29.3)
                        .with_dividend_yield(3.1),
                )
                .build()?,
        )
        .add_holding(
            Holding::builder()
                .ticker("BND")
                .name("Vanguard Total Bond Market ETF")
                .sector("Fixed Income")
                .weight(dec!(30))
                .price(dec!(73.57))
                .returns(
                    HoldingReturns::new()
                        .with_one_year(3.9)
                        .with_three_year(2.1)
                        .with_five_year(1.4)
                        .with_dividend_yield(4.4),
                )
                .build()?,
        )
        .add_holding(
            Holding::builder()
                .ticker("GLDM")
                .name("SPDR Gold MiniShares")
                .sector("Commodities")
                .weight(dec!(10))
                // Only a one-year observation could be verified.
                .returns(HoldingReturns::new().with_one_year(24.7))
                .build()?,
        )
        .benchmark(
            BenchmarkReturns::new()
                .with_one_year(12.4)
                .with_three_year(26.9)
                .with_five_year(68.2),
        )
        .build()
}

/// Execute the sample command.
pub fn execute(args: SampleArgs) -> Result<()> {
    let fund = sample_fund()?;
    let json = serde_json::to_string_pretty(&fund)?;

    match args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlab_analytics::prelude::*;

    #[test]
    fn test_sample_fund_is_valid_and_computable() {
        let fund = sample_fund().unwrap();
        assert!(fund.validate().is_ok());
        assert!(fund.is_fully_allocated());

        // The sample exercises every calculator end to end.
        let metrics = calculate_fund_metrics(&fund);
        assert!(metrics.projected_return.is_some());
        assert!(metrics.sharpe_ratio.is_some());

        let aggregates = aggregate_fund(&fund);
        let series = reconstruct_series(
            &SeriesAnchors::from(&aggregates),
            &SeriesAnchors::from(&fund.benchmark),
            chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        );
        assert_eq!(series.len(), 61);
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let fund = sample_fund().unwrap();
        let json = serde_json::to_string(&fund).unwrap();
        let parsed: Fund = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fund);
    }
}
