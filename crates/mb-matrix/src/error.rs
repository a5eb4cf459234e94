use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("failed to allocate {dimension}x{dimension} matrix")]
    Allocation { dimension: usize },
    #[error("matrix dimension must be greater than zero")]
    ZeroDimension,
    #[error("dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    #[error("invalid matrix data: expected {expected} elements, got {got}")]
    InvalidData { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
