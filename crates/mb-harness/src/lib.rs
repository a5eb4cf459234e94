//! `mb-harness` - Drives the matrix multiply benchmark and reports results.
//!
//! This crate provides:
//! - `BenchConfig`: sizes, iteration counts, seeds and the language tag
//! - `BenchmarkRunner`: the per-iteration allocate/fill/time/sample loop
//! - `average_by_size`: per-size means over the recorded iterations
//! - `CsvReport` and console formatting for the averaged results
//! - `Platform`: the clock and memory probe the runner measures with
//! - `run_suite`: the whole pipeline from config to CSV file

pub mod aggregate;
pub mod config;
pub mod error;
pub mod platform;
pub mod record;
pub mod report;
pub mod runner;
pub mod suite;

pub use aggregate::average_by_size;
pub use config::BenchConfig;
pub use error::{HarnessError, Result};
pub use platform::{Platform, SystemPlatform};
pub use record::{BenchmarkRecord, SizeAverage};
pub use report::CsvReport;
pub use runner::BenchmarkRunner;
pub use suite::{run_suite, SuiteOutcome};
