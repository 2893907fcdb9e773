//! # Fundlab Analytics
//!
//! The quantitative reconciliation and backtest-reconstruction engine for
//! simulated funds.
//!
//! This crate aggregates possibly-incomplete per-asset observations into
//! portfolio-level statistics under a data-sufficiency policy, derives
//! secondary risk metrics from those aggregates, and reconstructs a
//! 61-point monthly equity curve from sparse return anchors.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation is stateless with explicit
//!   inputs, including the reference date of the backtest.
//! - **Absence is data**: insufficiency is signalled with `None` and flows
//!   unchanged through every dependent computation; it is never coerced
//!   to zero and never raised as an error.
//! - **Deterministic**: identical inputs always produce bit-identical
//!   outputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fundlab_analytics::prelude::*;
//! use fundlab_core::types::{Fund, Holding, HoldingReturns};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let fund = Fund::builder()
//!     .name("Balanced Growth")
//!     .add_holding(
//!         Holding::builder()
//!             .ticker("VTI")
//!             .weight(dec!(50))
//!             .returns(HoldingReturns::new().with_one_year(14.0).with_five_year(70.0))
//!             .build()
//!             .unwrap(),
//!     )
//!     .add_holding(
//!         Holding::builder()
//!             .ticker("BND")
//!             .weight(dec!(50))
//!             .returns(HoldingReturns::new().with_one_year(6.0).with_five_year(8.0))
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let aggregates = aggregate_fund(&fund);
//! assert_eq!(aggregates.one_year_return, Some(10.0));
//!
//! let metrics = calculate_fund_metrics(&fund);
//! assert_eq!(metrics.projected_return, Some(9.9));
//!
//! let series = reconstruct_series(
//!     &SeriesAnchors::from(&aggregates),
//!     &SeriesAnchors::from(&fund.benchmark),
//!     NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
//! );
//! // No benchmark five-year anchor: no series.
//! assert!(series.is_empty());
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregation`] - Coverage-gated weighted aggregation
//! - [`metrics`] - Projected return, yield, volatility proxy, Sharpe
//! - [`backtest`] - Monthly equity-curve reconstruction
//! - [`allocation`] - Sector allocation breakdown

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggregation;
pub mod allocation;
pub mod backtest;
pub mod metrics;

pub use aggregation::{aggregate_fund, covered_weight, weighted_aggregate, FundAggregates};
pub use allocation::{allocate_by_sector, SectorAllocation, SectorBucket};
pub use backtest::{reconstruct_series, BacktestPoint, SeriesAnchors};
pub use metrics::{
    calculate_fund_metrics, portfolio_dividend_yield, projected_return, sharpe_ratio,
    volatility_proxy, FundMetrics,
};

/// Convenience re-exports for downstream consumers.
pub mod prelude {
    pub use crate::aggregation::{
        aggregate_fund, covered_weight, weighted_aggregate, FundAggregates,
    };
    pub use crate::allocation::{allocate_by_sector, SectorAllocation, SectorBucket};
    pub use crate::backtest::{reconstruct_series, BacktestPoint, SeriesAnchors};
    pub use crate::metrics::{
        calculate_fund_metrics, portfolio_dividend_yield, projected_return, sharpe_ratio,
        volatility_proxy, FundMetrics,
    };
    pub use fundlab_core::types::{
        BenchmarkReturns, Fund, FundBuilder, Holding, HoldingBuilder, HoldingReturns, ReturnField,
    };
}
