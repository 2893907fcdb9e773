//! Fundlab CLI - Command-line harness for simulated fund analytics.
//!
//! # Usage
//!
//! ```bash
//! # Emit a sample portfolio definition
//! fundlab sample > portfolio.json
//!
//! # Derived metrics (projected return, yield, volatility, Sharpe)
//! fundlab metrics --portfolio portfolio.json
//!
//! # Reconstructed 5-year equity curve vs benchmark
//! fundlab backtest --portfolio portfolio.json --as-of 2026-08-25
//!
//! # Sector allocation breakdown
//! fundlab allocation --portfolio portfolio.json --format json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Metrics(args) => commands::metrics::execute(args, format)?,
        Commands::Backtest(args) => commands::backtest::execute(args, format)?,
        Commands::Allocation(args) => commands::allocation::execute(args, format)?,
        Commands::Sample(args) => commands::sample::execute(args)?,
    }

    Ok(())
}
