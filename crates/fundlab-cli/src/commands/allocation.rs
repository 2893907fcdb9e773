//! Allocation command implementation.
//!
//! Sector allocation breakdown of a portfolio file.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use fundlab_analytics::allocate_by_sector;

use crate::cli::OutputFormat;
use crate::commands::load_fund;
use crate::output::{print_header, print_output};

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Path to the portfolio JSON file
    #[arg(short, long)]
    pub portfolio: PathBuf,
}

/// One row of the allocation table.
#[derive(Debug, Serialize, Tabled)]
struct AllocationRow {
    /// Sector label.
    #[tabled(rename = "Sector")]
    sector: String,

    /// Number of holdings.
    #[tabled(rename = "Holdings")]
    count: usize,

    /// Combined weight as a percentage of the fund.
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, format: OutputFormat) -> Result<()> {
    let fund = load_fund(&args.portfolio)?;
    let allocation = allocate_by_sector(&fund);

    let mut rows: Vec<AllocationRow> = allocation
        .sorted_by_weight()
        .into_iter()
        .map(|(sector, bucket)| AllocationRow {
            sector: sector.to_string(),
            count: bucket.count,
            weight: format!("{:.2}%", bucket.weight_pct),
        })
        .collect();

    if !allocation.uncategorized.is_empty() {
        rows.push(AllocationRow {
            sector: "Uncategorized".to_string(),
            count: allocation.uncategorized.count,
            weight: format!("{:.2}%", allocation.uncategorized.weight_pct),
        });
    }
    if allocation.unallocated_pct() > 0.0 {
        rows.push(AllocationRow {
            sector: "Unallocated".to_string(),
            count: 0,
            weight: format!("{:.2}%", allocation.unallocated_pct()),
        });
    }

    if format == OutputFormat::Table {
        print_header(&format!("Allocation: {}", fund.name));
    }
    print_output(&rows, format)
}
