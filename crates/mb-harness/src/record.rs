/// One timed multiply: a single (size, iteration) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Matrix dimension N.
    pub size: usize,
    /// 1-based iteration number within this size.
    pub run_number: usize,
    /// Wall-clock time of the multiply call alone.
    pub time_seconds: f64,
    /// Larger of the memory samples taken before and after the multiply.
    pub memory_mb: f64,
}

/// Mean time and memory over every record of one size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeAverage {
    pub size: usize,
    pub avg_time_seconds: f64,
    pub avg_memory_mb: f64,
}

impl SizeAverage {
    /// Average time in milliseconds, the unit written to the CSV.
    pub fn avg_time_ms(&self) -> f64 {
        self.avg_time_seconds * 1000.0
    }
}
