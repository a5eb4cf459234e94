use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot open file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("matrix error: {0}")]
    Matrix(#[from] mb_matrix::MatrixError),
    #[error("no benchmark records for size {0}")]
    MissingRecords(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
