//! Core domain types.

mod benchmark;
mod fund;
mod holding;
mod returns;

pub use benchmark::BenchmarkReturns;
pub use fund::{weight_as_f64, Fund, FundBuilder};
pub use holding::{Holding, HoldingBuilder};
pub use returns::{HoldingReturns, ReturnField};
