use std::hint::black_box;

use mb_matrix::{MatmulKernel, Matrix};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::record::BenchmarkRecord;

/// Runs the benchmark loop: every configured size, every iteration, in order.
///
/// Each iteration allocates and fills fresh operands, times only the
/// multiply call, and drops all three matrices before the next iteration
/// starts. Nothing is shared between iterations.
#[derive(Debug)]
pub struct BenchmarkRunner<'a> {
    config: &'a BenchConfig,
    kernel: &'a dyn MatmulKernel,
    platform: &'a dyn Platform,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new(
        config: &'a BenchConfig,
        kernel: &'a dyn MatmulKernel,
        platform: &'a dyn Platform,
    ) -> Self {
        BenchmarkRunner {
            config,
            kernel,
            platform,
        }
    }

    /// Allocate and fill the operand pair for one iteration.
    fn operands(&self, size: usize) -> Result<(Matrix, Matrix)> {
        let mut left = Matrix::allocate(size)?;
        let mut right = Matrix::allocate(size)?;
        left.fill_random(self.config.seed_left);
        right.fill_random(self.config.seed_right);
        Ok((left, right))
    }

    /// Run and measure a single multiply of `size x size` matrices.
    ///
    /// The recorded memory is the larger of the samples taken just before
    /// and just after the multiply.
    pub fn run_iteration(&self, size: usize, iteration: usize) -> Result<BenchmarkRecord> {
        let (left, right) = self.operands(size)?;

        let mem_before = self.platform.resident_memory_mb();
        let time_start = self.platform.now_seconds();

        let product = left.multiply(&right, self.kernel)?;

        let time_end = self.platform.now_seconds();
        let mem_after = self.platform.resident_memory_mb();

        debug!(
            size,
            iteration,
            trace = black_box(product.trace()),
            "multiply finished"
        );

        Ok(BenchmarkRecord {
            size,
            run_number: iteration,
            time_seconds: time_end - time_start,
            memory_mb: mem_before.max(mem_after),
        })
    }

    /// Untimed multiply used to warm caches before measuring a size.
    fn warm_up(&self, size: usize) -> Result<()> {
        let (left, right) = self.operands(size)?;
        black_box(left.multiply(&right, self.kernel)?);
        Ok(())
    }

    /// Run every configured size and iteration, returning the records in
    /// execution order.
    ///
    /// `on_record` is called once per measured iteration, right after its
    /// record is produced. Warmup iterations are neither recorded nor
    /// reported.
    pub fn run<F>(&self, mut on_record: F) -> Result<Vec<BenchmarkRecord>>
    where
        F: FnMut(&BenchmarkRecord),
    {
        let mut records = Vec::with_capacity(self.config.total_records());

        for &size in &self.config.sizes {
            info!(
                size,
                iterations = self.config.iterations,
                kernel = self.kernel.name(),
                "benchmarking size"
            );

            for _ in 0..self.config.warmup_iterations {
                self.warm_up(size)?;
            }

            for iteration in 1..=self.config.iterations {
                let record = self.run_iteration(size, iteration)?;
                on_record(&record);
                records.push(record);
            }
        }

        Ok(records)
    }
}
