//! Command-line surface for matmul-bench: argument parsing, logging setup
//! and the call into the benchmark suite.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use mb_harness::config::{
    DEFAULT_ITERATIONS, DEFAULT_LANGUAGE, DEFAULT_SEED_LEFT, DEFAULT_SEED_RIGHT, DEFAULT_SIZES,
};
use mb_harness::{run_suite, BenchConfig, Result, SuiteOutcome, SystemPlatform};
use mb_matrix::NaiveKernel;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "matmul-bench",
    version,
    about = "Benchmark naive square matrix multiplication and write averaged results to CSV"
)]
pub struct Cli {
    /// Directory the results CSV is written into (created if missing)
    pub output_dir: PathBuf,

    /// Matrix sizes to benchmark, comma separated, in report order
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<usize>,

    /// Measured iterations per size
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Untimed warmup iterations per size
    #[arg(long, default_value_t = 0)]
    pub warmup: usize,

    /// Seed for the left operand
    #[arg(long, default_value_t = DEFAULT_SEED_LEFT)]
    pub seed_a: u64,

    /// Seed for the right operand
    #[arg(long, default_value_t = DEFAULT_SEED_RIGHT)]
    pub seed_b: u64,

    /// Language tag for the CSV rows and file name
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Log verbosity on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> BenchConfig {
        BenchConfig {
            sizes: self.sizes.clone(),
            iterations: self.iterations,
            warmup_iterations: self.warmup,
            seed_left: self.seed_a,
            seed_right: self.seed_b,
            language: self.language.clone(),
        }
    }

    fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Run the benchmark described by `cli` on the host platform, printing
/// progress and the summary to stdout.
pub fn execute(cli: &Cli) -> Result<SuiteOutcome> {
    let config = cli.to_config();
    let kernel = NaiveKernel::new();
    let platform = SystemPlatform::new();
    let stdout = io::stdout();
    let mut console = stdout.lock();
    run_suite(&config, &kernel, &platform, &cli.output_dir, &mut console)
}
