use std::collections::HashSet;

use crate::error::{HarnessError, Result};

/// Matrix dimensions benchmarked when none are given.
pub const DEFAULT_SIZES: [usize; 4] = [128, 256, 512, 1024];
/// Measured iterations per size.
pub const DEFAULT_ITERATIONS: usize = 5;
/// Seed for the left operand.
pub const DEFAULT_SEED_LEFT: u64 = 42;
/// Seed for the right operand.
pub const DEFAULT_SEED_RIGHT: u64 = 43;
/// Tag written to the `Language` column and used in the output file name.
pub const DEFAULT_LANGUAGE: &str = "Rust";

/// Configuration for one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Matrix dimensions, benchmarked and reported in this order.
    pub sizes: Vec<usize>,
    /// Number of measured iterations per size.
    pub iterations: usize,
    /// Untimed iterations per size run before the measured ones.
    pub warmup_iterations: usize,
    /// Seed for operand A. The same seed is used for every size and iteration.
    pub seed_left: u64,
    /// Seed for operand B.
    pub seed_right: u64,
    /// Implementation tag for the CSV `Language` column.
    pub language: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: 0,
            seed_left: DEFAULT_SEED_LEFT,
            seed_right: DEFAULT_SEED_RIGHT,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl BenchConfig {
    /// Check that the configuration can produce a record for every size.
    ///
    /// Rejects an empty size list, zero or duplicate sizes, zero iterations
    /// and an empty language tag.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "at least one matrix size is required".to_string(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(HarnessError::InvalidConfig(
                "matrix sizes must be greater than zero".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if !seen.insert(size) {
                return Err(HarnessError::InvalidConfig(format!(
                    "matrix size {} is listed more than once",
                    size
                )));
            }
        }
        if self.iterations == 0 {
            return Err(HarnessError::InvalidConfig(
                "iterations must be greater than zero".to_string(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(HarnessError::InvalidConfig(
                "language tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Name of the CSV file written into the output directory,
    /// `benchmark_<language>.csv` with the tag lowercased.
    pub fn csv_file_name(&self) -> String {
        format!("benchmark_{}.csv", self.language.to_lowercase())
    }

    /// Total number of records a full run produces.
    pub fn total_records(&self) -> usize {
        self.sizes.len() * self.iterations
    }
}
