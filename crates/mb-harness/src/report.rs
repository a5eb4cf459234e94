use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{HarnessError, Result};
use crate::record::{BenchmarkRecord, SizeAverage};

/// Column names of the results CSV.
pub const CSV_HEADER: [&str; 4] = ["Language", "Matrix_Size", "Time_ms", "Memory_MB"];

/// Averaged results writer.
///
/// The header row is written as soon as the report is created; one row per
/// size follows when the averages are known. Times are in milliseconds with
/// three decimals, memory in MiB with two.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    language: String,
}

impl CsvReport<File> {
    /// Create (or truncate) the CSV file at `path` and write its header.
    pub fn create(path: &Path, language: &str) -> Result<Self> {
        let file = File::create(path).map_err(|source| HarnessError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        CsvReport::new(file, language)
    }
}

impl<W: Write> CsvReport<W> {
    /// Wrap `writer` and write the header row.
    pub fn new(writer: W, language: &str) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        writer.write_record(CSV_HEADER)?;
        Ok(CsvReport {
            writer,
            language: language.to_string(),
        })
    }

    /// Append one row per average, in the order given.
    pub fn write_averages(&mut self, averages: &[SizeAverage]) -> Result<()> {
        for avg in averages {
            self.writer.write_record([
                self.language.clone(),
                avg.size.to_string(),
                format!("{:.3}", avg.avg_time_ms()),
                format!("{:.2}", avg.avg_memory_mb),
            ])?;
        }
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| {
            let err = e.error();
            HarnessError::Io(io::Error::new(err.kind(), err.to_string()))
        })
    }
}

/// Progress line printed after each measured iteration.
pub fn progress_line(record: &BenchmarkRecord) -> String {
    format!(
        "Size {} | Iteration {} | Time: {:.5}s",
        record.size, record.run_number, record.time_seconds
    )
}

/// Console summary table.
///
/// Time is shown in seconds and memory in MiB, both with five decimals,
/// unlike the CSV which uses milliseconds with three and MiB with two.
pub fn summary_table(averages: &[SizeAverage]) -> String {
    let mut out = String::from("\n===== AVERAGE RESULTS =====\n");
    out.push_str(&format!(
        "{:<12} {:<18} {:<20}\n",
        "Size", "Avg Time (s)", "Avg Memory (MB)"
    ));
    for avg in averages {
        out.push_str(&format!(
            "{:<12} {:<18.5} {:<20.5}\n",
            avg.size, avg.avg_time_seconds, avg.avg_memory_mb
        ));
    }
    out
}

/// Final line naming the CSV that was written.
pub fn completion_line(path: &Path) -> String {
    format!("\nBenchmark completed. Results saved at: {}", path.display())
}
