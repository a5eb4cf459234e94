use std::fmt::Debug;

use crate::error::Result;

/// Trait for pluggable square matrix multiply kernels.
///
/// Data is passed in as row-major slices of `dimension * dimension` elements
/// and the product is written into a caller-provided buffer of the same
/// length. Kernels must not read from `out` before writing it.
pub trait MatmulKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "naive").
    fn name(&self) -> &str;

    /// Square matrix multiplication: out = left @ right.
    ///
    /// - `left`: row-major data of shape [dimension, dimension]
    /// - `right`: row-major data of shape [dimension, dimension]
    /// - `out`: row-major destination of shape [dimension, dimension]
    fn multiply(
        &self,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
        dimension: usize,
    ) -> Result<()>;
}
