use std::io::Write;
use std::path::{Path, PathBuf};

use mb_matrix::MatmulKernel;
use tracing::{info, warn};

use crate::aggregate::average_by_size;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::record::{BenchmarkRecord, SizeAverage};
use crate::report::{completion_line, progress_line, summary_table, CsvReport};
use crate::runner::BenchmarkRunner;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct SuiteOutcome {
    /// Path of the CSV that was written.
    pub csv_path: PathBuf,
    /// Every measured iteration, in execution order.
    pub records: Vec<BenchmarkRecord>,
    /// Per-size averages, in configured order.
    pub averages: Vec<SizeAverage>,
}

/// Run the full benchmark and write its results.
///
/// 1. Creates `output_dir` if it does not exist (failures are only logged;
///    opening the CSV reports them).
/// 2. Opens `benchmark_<language>.csv` and writes the header before any
///    benchmarking, so an unwritable path fails fast.
/// 3. Runs every size and iteration, printing a progress line to `console`
///    after each.
/// 4. Writes the averaged rows and closes the CSV.
/// 5. Prints the summary table and the completion line.
pub fn run_suite<C: Write>(
    config: &BenchConfig,
    kernel: &dyn MatmulKernel,
    platform: &dyn Platform,
    output_dir: &Path,
    console: &mut C,
) -> Result<SuiteOutcome> {
    config.validate()?;

    if let Err(e) = std::fs::create_dir_all(output_dir) {
        warn!(dir = %output_dir.display(), error = %e, "could not create output directory");
    }

    let csv_path = output_dir.join(config.csv_file_name());
    let mut report = CsvReport::create(&csv_path, &config.language)?;
    info!(path = %csv_path.display(), "writing results");

    writeln!(console, "Starting benchmark execution...")?;

    let runner = BenchmarkRunner::new(config, kernel, platform);
    let mut console_result = Ok(());
    let records = runner.run(|record| {
        if console_result.is_ok() {
            console_result = writeln!(console, "{}", progress_line(record));
        }
    })?;
    console_result?;

    let averages = average_by_size(&records, &config.sizes)?;
    report.write_averages(&averages)?;
    report.finish()?;

    write!(console, "{}", summary_table(&averages))?;
    writeln!(console, "{}", completion_line(&csv_path))?;

    Ok(SuiteOutcome {
        csv_path,
        records,
        averages,
    })
}
