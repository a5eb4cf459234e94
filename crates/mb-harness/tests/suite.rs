use std::cell::Cell;
use std::fs;

use mb_harness::config::DEFAULT_SIZES;
use mb_harness::{
    average_by_size, run_suite, BenchConfig, CsvReport, HarnessError, Platform, SizeAverage,
};
use mb_matrix::NaiveKernel;

/// Clock that advances a fixed step on every read; memory grows by 1 MiB
/// per sample.
#[derive(Debug)]
struct SteppingPlatform {
    tick: Cell<f64>,
    step: f64,
    memory: Cell<f64>,
}

impl SteppingPlatform {
    fn new(step: f64) -> Self {
        SteppingPlatform {
            tick: Cell::new(0.0),
            step,
            memory: Cell::new(100.0),
        }
    }
}

impl Platform for SteppingPlatform {
    fn now_seconds(&self) -> f64 {
        let t = self.tick.get();
        self.tick.set(t + self.step);
        t
    }

    fn resident_memory_mb(&self) -> f64 {
        let m = self.memory.get();
        self.memory.set(m + 1.0);
        m
    }
}

fn small_config() -> BenchConfig {
    BenchConfig {
        sizes: vec![2, 4],
        iterations: 2,
        ..BenchConfig::default()
    }
}

#[test]
fn test_end_to_end_two_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("results");
    let platform = SteppingPlatform::new(0.5);
    let mut console: Vec<u8> = Vec::new();

    let outcome = run_suite(
        &small_config(),
        &NaiveKernel::new(),
        &platform,
        &out_dir,
        &mut console,
    )
    .unwrap();

    assert_eq!(outcome.records.len(), 4);
    assert_eq!(outcome.records.iter().filter(|r| r.size == 2).count(), 2);
    assert_eq!(outcome.records.iter().filter(|r| r.size == 4).count(), 2);
    assert!(outcome.records.iter().all(|r| r.time_seconds == 0.5));

    let sizes: Vec<usize> = outcome.averages.iter().map(|a| a.size).collect();
    assert_eq!(sizes, vec![2, 4]);

    // Memory samples: 100/101, 102/103, 104/105, 106/107 -> max of each pair.
    assert_eq!(outcome.averages[0].avg_memory_mb, 102.0);
    assert_eq!(outcome.averages[1].avg_memory_mb, 106.0);

    assert_eq!(outcome.csv_path, out_dir.join("benchmark_rust.csv"));
    let csv = fs::read_to_string(&outcome.csv_path).unwrap();
    assert_eq!(
        csv,
        "Language,Matrix_Size,Time_ms,Memory_MB\n\
         Rust,2,500.000,102.00\n\
         Rust,4,500.000,106.00\n"
    );

    let console = String::from_utf8(console).unwrap();
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines[0], "Starting benchmark execution...");
    assert_eq!(lines[1], "Size 2 | Iteration 1 | Time: 0.50000s");
    assert_eq!(lines[2], "Size 2 | Iteration 2 | Time: 0.50000s");
    assert_eq!(lines[3], "Size 4 | Iteration 1 | Time: 0.50000s");
    assert_eq!(lines[4], "Size 4 | Iteration 2 | Time: 0.50000s");
    assert!(console.contains("===== AVERAGE RESULTS ====="));
    assert!(console.contains("2            0.50000            102.00000"));
    assert!(console
        .trim_end()
        .ends_with(&format!("Results saved at: {}", outcome.csv_path.display())));
}

#[test]
fn test_existing_output_dir_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let platform = SteppingPlatform::new(0.1);
    let config = BenchConfig {
        sizes: vec![3],
        iterations: 1,
        language: "C".to_string(),
        ..BenchConfig::default()
    };

    let first = run_suite(
        &config,
        &NaiveKernel::new(),
        &platform,
        dir.path(),
        &mut Vec::<u8>::new(),
    )
    .unwrap();
    let second = run_suite(
        &config,
        &NaiveKernel::new(),
        &platform,
        dir.path(),
        &mut Vec::<u8>::new(),
    )
    .unwrap();

    assert_eq!(first.csv_path, second.csv_path);
    let csv = fs::read_to_string(&second.csv_path).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("C,3,"));
}

#[test]
fn test_unopenable_output_fails_before_benchmarking() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"occupied").unwrap();

    let platform = SteppingPlatform::new(1.0);
    let mut console: Vec<u8> = Vec::new();
    let err = run_suite(
        &small_config(),
        &NaiveKernel::new(),
        &platform,
        &blocker,
        &mut console,
    )
    .unwrap_err();

    assert!(matches!(err, HarnessError::CreateOutput { .. }));
    assert!(err.to_string().starts_with("Cannot open file"));
    assert!(console.is_empty());
    assert_eq!(platform.tick.get(), 0.0);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig {
        iterations: 0,
        ..small_config()
    };
    let err = run_suite(
        &config,
        &NaiveKernel::new(),
        &SteppingPlatform::new(1.0),
        dir.path(),
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig(_)));
}

#[test]
fn test_csv_shape_for_default_sizes() {
    let averages: Vec<SizeAverage> = DEFAULT_SIZES
        .iter()
        .map(|&size| SizeAverage {
            size,
            avg_time_seconds: size as f64 / 1000.0,
            avg_memory_mb: 1.0,
        })
        .collect();

    let mut report = CsvReport::new(Vec::new(), "Rust").unwrap();
    report.write_averages(&averages).unwrap();
    let csv = String::from_utf8(report.finish().unwrap()).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Language,Matrix_Size,Time_ms,Memory_MB");
    let sizes: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(sizes, vec!["128", "256", "512", "1024"]);
    assert!(lines[1..].iter().all(|l| l.split(',').count() == 4));
}

#[test]
fn test_average_matches_reference_times() {
    let records: Vec<_> = [0.1, 0.2, 0.3]
        .iter()
        .enumerate()
        .map(|(i, &t)| mb_harness::BenchmarkRecord {
            size: 128,
            run_number: i + 1,
            time_seconds: t,
            memory_mb: t * 100.0,
        })
        .collect();
    let avgs = average_by_size(&records, &[128]).unwrap();
    approx::assert_abs_diff_eq!(avgs[0].avg_time_seconds, 0.2, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(avgs[0].avg_memory_mb, 20.0, epsilon = 1e-9);
}
