//! # Fundlab Core
//!
//! Domain types for the simulated fund analytics engine.
//!
//! This crate defines the data model shared across the workspace: fund
//! holdings with optional, partially-verified observed fields, benchmark
//! return observations, and the policy constants that govern data
//! sufficiency.
//!
//! ## Design Philosophy
//!
//! - **Absence is data**: every observed field is an `Option`; `None`
//!   means "not verified", never zero.
//! - **Validation at the edges**: builders reject structurally invalid
//!   input (out-of-range weights, empty tickers). Once constructed, a
//!   [`types::Fund`] is safe to feed to any calculator.
//! - **No logic here**: aggregation and reconstruction live in
//!   `fundlab-analytics`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod error;
pub mod types;

pub use error::{FundError, FundResult};
pub use types::{
    BenchmarkReturns, Fund, FundBuilder, Holding, HoldingBuilder, HoldingReturns, ReturnField,
};
