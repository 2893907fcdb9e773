//! Backtest command implementation.
//!
//! Reconstructs the 61-point monthly equity curve for the fund and its
//! benchmark from the portfolio's sparse return anchors.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use fundlab_analytics::{aggregate_fund, reconstruct_series, SeriesAnchors};

use crate::cli::OutputFormat;
use crate::commands::{load_fund, parse_date};
use crate::output::{print_header, print_output};

/// Arguments for the backtest command.
#[derive(Args, Debug)]
pub struct BacktestArgs {
    /// Path to the portfolio JSON file
    #[arg(short, long)]
    pub portfolio: PathBuf,

    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub as_of: Option<String>,
}

/// One row of the rendered equity curve.
#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    /// Month timestamp.
    #[tabled(rename = "Date")]
    date: String,

    /// Reconstructed fund value, whole currency units.
    #[tabled(rename = "Fund")]
    fund: String,

    /// Reconstructed benchmark value, whole currency units.
    #[tabled(rename = "Benchmark")]
    benchmark: String,
}

/// Execute the backtest command.
pub fn execute(args: BacktestArgs, format: OutputFormat) -> Result<()> {
    let fund = load_fund(&args.portfolio)?;

    // The reconstructor takes the reference date explicitly; the clock is
    // read here, at the orchestration edge.
    let reference_date = match args.as_of {
        Some(ref s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let aggregates = aggregate_fund(&fund);
    let series = reconstruct_series(
        &SeriesAnchors::from(&aggregates),
        &SeriesAnchors::from(&fund.benchmark),
        reference_date,
    );

    if series.is_empty() {
        // Not enough verified data; say so rather than inventing a curve.
        println!(
            "{}",
            "No backtest available: both the fund and the benchmark need a 5-year return anchor."
                .yellow()
        );
        return Ok(());
    }

    let rows: Vec<CurveRow> = series
        .iter()
        .map(|p| CurveRow {
            date: p.date.format("%Y-%m").to_string(),
            fund: format!("{:.0}", p.fund_value),
            benchmark: format!("{:.0}", p.benchmark_value),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!(
            "Simulated growth of 10,000: {} (as of {})",
            fund.name, reference_date
        ));
    }
    print_output(&rows, format)
}
