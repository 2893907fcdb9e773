//! Metrics command implementation.
//!
//! Runs the weighted aggregator and derived-metrics calculator over a
//! portfolio file.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use fundlab_analytics::{aggregate_fund, calculate_fund_metrics};

use crate::cli::OutputFormat;
use crate::commands::load_fund;
use crate::output::{format_optional, print_header, print_output, print_single, KeyValue};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Path to the portfolio JSON file
    #[arg(short, long)]
    pub portfolio: PathBuf,

    /// Also show the raw weighted aggregates alongside derived metrics
    #[arg(long)]
    pub aggregates: bool,
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, format: OutputFormat) -> Result<()> {
    let fund = load_fund(&args.portfolio)?;
    let aggregates = aggregate_fund(&fund);
    let metrics = calculate_fund_metrics(&fund);

    if format == OutputFormat::Json {
        return print_single(&metrics, format);
    }

    let mut rows = vec![
        KeyValue::percentage("Projected Return", metrics.projected_return),
        KeyValue::percentage("Dividend Yield", metrics.dividend_yield),
        KeyValue::percentage("Volatility (proxy)", metrics.volatility),
        KeyValue::new(
            "Sharpe Ratio",
            format_optional(metrics.sharpe_ratio, ""),
        ),
    ];

    if args.aggregates {
        rows.push(KeyValue::percentage("1Y Return (weighted)", aggregates.one_year_return));
        rows.push(KeyValue::percentage("3Y Return (weighted)", aggregates.three_year_return));
        rows.push(KeyValue::percentage("5Y Return (weighted)", aggregates.five_year_return));
    }

    if format == OutputFormat::Table {
        print_header(&format!("Metrics: {}", fund.name));
    }
    print_output(&rows, format)
}
