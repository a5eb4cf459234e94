use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use mb_cli::{execute, init_tracing, Cli};
use tracing::error;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(1);
            }
        },
    };

    init_tracing(&cli);

    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "benchmark run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
