//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AllocationArgs, BacktestArgs, MetricsArgs, SampleArgs};

/// Fundlab - simulated fund analytics CLI
#[derive(Parser)]
#[command(name = "fundlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Derived fund metrics (projected return, yield, volatility, Sharpe)
    Metrics(MetricsArgs),

    /// Reconstruct the 5-year monthly equity curve vs the benchmark
    Backtest(BacktestArgs),

    /// Sector allocation breakdown
    Allocation(AllocationArgs),

    /// Emit a sample portfolio definition as JSON
    Sample(SampleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
