use crate::error::{HarnessError, Result};
use crate::record::{BenchmarkRecord, SizeAverage};

/// Average time and memory per size, in the order `sizes` lists them.
///
/// Each mean is taken over exactly the records carrying that size. Every
/// listed size must have at least one record; a size without records is
/// reported as `HarnessError::MissingRecords`.
pub fn average_by_size(
    records: &[BenchmarkRecord],
    sizes: &[usize],
) -> Result<Vec<SizeAverage>> {
    sizes
        .iter()
        .map(|&size| {
            let mut total_time = 0.0;
            let mut total_mem = 0.0;
            let mut count = 0usize;

            for record in records.iter().filter(|r| r.size == size) {
                total_time += record.time_seconds;
                total_mem += record.memory_mb;
                count += 1;
            }

            if count == 0 {
                return Err(HarnessError::MissingRecords(size));
            }

            Ok(SizeAverage {
                size,
                avg_time_seconds: total_time / count as f64,
                avg_memory_mb: total_mem / count as f64,
            })
        })
        .collect()
}
