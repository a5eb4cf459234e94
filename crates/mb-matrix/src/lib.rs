//! `mb-matrix` - Square matrix storage and multiply kernels for matmul-bench.
//!
//! This crate provides:
//! - A `Matrix` type: an owned, contiguous, row-major N x N grid of f64
//! - A `MatmulKernel` trait for pluggable multiply implementations
//! - The `NaiveKernel` reference implementation (textbook i-j-k loop)
//! - Seeded, reproducible random fill

pub mod error;
pub mod kernel;
pub mod matrix;
pub mod naive;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use kernel::MatmulKernel;
pub use matrix::Matrix;
pub use naive::NaiveKernel;
