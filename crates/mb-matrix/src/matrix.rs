use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;

/// A square matrix of f64 values.
///
/// Holds `dimension * dimension` elements in a single contiguous, row-major
/// buffer. The buffer is released when the matrix is dropped, so every exit
/// path frees it. Multiplication is dispatched to a `MatmulKernel`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    dimension: usize,
}

impl Matrix {
    /// Allocate a zero-filled `dimension x dimension` matrix.
    ///
    /// # Errors
    /// Returns `MatrixError::ZeroDimension` for a zero dimension and
    /// `MatrixError::Allocation` if the buffer cannot be reserved.
    pub fn allocate(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(MatrixError::ZeroDimension);
        }
        let len = dimension
            .checked_mul(dimension)
            .ok_or(MatrixError::Allocation { dimension })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { dimension })?;
        data.resize(len, 0.0);

        Ok(Matrix { data, dimension })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns an error if `data.len() != dimension * dimension`.
    pub fn from_vec(dimension: usize, data: Vec<f64>) -> Result<Self> {
        if dimension == 0 {
            return Err(MatrixError::ZeroDimension);
        }
        let expected = dimension * dimension;
        if data.len() != expected {
            return Err(MatrixError::InvalidData {
                expected,
                got: data.len(),
            });
        }
        Ok(Matrix { data, dimension })
    }

    /// Create a matrix from a list of rows. Every row must have as many
    /// entries as there are rows.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let dimension = rows.len();
        let mut data = Vec::with_capacity(dimension * dimension);
        for row in rows {
            if row.len() != dimension {
                return Err(MatrixError::InvalidData {
                    expected: dimension,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Matrix::from_vec(dimension, data)
    }

    /// The `dimension x dimension` identity matrix.
    pub fn identity(dimension: usize) -> Result<Self> {
        let mut m = Matrix::allocate(dimension)?;
        for i in 0..dimension {
            m.data[i * dimension + i] = 1.0;
        }
        Ok(m)
    }

    /// Side length N of this N x N matrix.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the value at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dimension && col < self.dimension);
        self.data[row * self.dimension + col]
    }

    /// Sets the value at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.dimension && col < self.dimension);
        self.data[row * self.dimension + col] = value;
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dimension;
        &self.data[start..start + self.dimension]
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> f64 {
        (0..self.dimension)
            .map(|i| self.data[i * self.dimension + i])
            .sum()
    }

    /// Fill with pseudo-random values in [0, 1) from a generator seeded
    /// with `seed`.
    ///
    /// A fresh generator is created on every call, so the same seed and
    /// dimension always reproduce the same matrix.
    pub fn fill_random(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.fill_from_rng(&mut rng);
    }

    /// Fill in row-major order with values in [0, 1) drawn from `rng`.
    pub fn fill_from_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = rng.gen::<f64>();
        }
    }

    /// Multiply `self @ other` using the given kernel.
    ///
    /// Returns a newly allocated result; neither operand is modified.
    pub fn multiply(&self, other: &Matrix, kernel: &dyn MatmulKernel) -> Result<Matrix> {
        if self.dimension != other.dimension {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimension,
                right: other.dimension,
            });
        }

        let mut result = Matrix::allocate(self.dimension)?;
        kernel.multiply(&self.data, &other.data, &mut result.data, self.dimension)?;
        Ok(result)
    }

    /// Elementwise comparison with an absolute tolerance.
    ///
    /// Stops at the first element whose difference exceeds `tolerance`.
    /// Matrices of different dimensions are never equal.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        if self.dimension != other.dimension {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
