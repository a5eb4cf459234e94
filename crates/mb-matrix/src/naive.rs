use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;

/// Textbook triple-loop multiply in i-j-k order.
///
/// The inner loop walks `right` with stride `dimension`, so this is the
/// cache-unfriendly baseline being measured. It is not blocked, tiled,
/// vectorized or parallelized.
#[derive(Debug, Clone)]
pub struct NaiveKernel;

impl NaiveKernel {
    pub fn new() -> Self {
        NaiveKernel
    }
}

impl Default for NaiveKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulKernel for NaiveKernel {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(
        &self,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
        dimension: usize,
    ) -> Result<()> {
        let n = dimension;
        check_len(left.len(), n * n)?;
        check_len(right.len(), n * n)?;
        check_len(out.len(), n * n)?;

        for row in 0..n {
            for col in 0..n {
                let mut sum = 0.0f64;
                for idx in 0..n {
                    sum += left[row * n + idx] * right[idx * n + col];
                }
                out[row * n + col] = sum;
            }
        }
        Ok(())
    }
}

fn check_len(got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(MatrixError::InvalidData { expected, got });
    }
    Ok(())
}
