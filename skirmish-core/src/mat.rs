//! A minimal row-major matrix used at the value-function seam.
use serde::{Deserialize, Serialize};

/// Two-dimensional `f32` matrix, row-major.
///
/// This is the data type exchanged with a [`ValueFn`](crate::ValueFn):
/// observation batches of shape `(n, input_dim)` and Q-value batches of
/// shape `(n, num_actions)`. Shape mismatches are programming errors and
/// panic rather than being silently coerced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat {
    data: Vec<f32>,
    nrows: usize,
    ncols: usize,
}

impl Mat {
    /// A `(nrows, ncols)` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Builds a matrix from row-major data.
    pub fn from_vec(data: Vec<f32>, nrows: usize, ncols: usize) -> Self {
        assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    /// A single-row matrix holding a copy of the given slice.
    pub fn from_row(row: &[f32]) -> Self {
        Self {
            data: row.to_vec(),
            nrows: 1,
            ncols: row.len(),
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The underlying row-major data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The `r`-th row.
    pub fn row(&self, r: usize) -> &[f32] {
        &self.data[r * self.ncols..(r + 1) * self.ncols]
    }

    /// Mutable access to the `r`-th row.
    pub fn row_mut(&mut self, r: usize) -> &mut [f32] {
        &mut self.data[r * self.ncols..(r + 1) * self.ncols]
    }

    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Mat) -> Mat {
        assert_eq!(self.ncols, other.nrows);
        let mut out = Mat::zeros(self.nrows, other.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let v = self.data[i * self.ncols + k];
                if v == 0.0 {
                    continue;
                }
                for j in 0..other.ncols {
                    out.data[i * other.ncols + j] += v * other.data[k * other.ncols + j];
                }
            }
        }
        out
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Mat {
        let mut out = Mat::zeros(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                out.data[j * self.nrows + i] = self.data[i * self.ncols + j];
            }
        }
        out
    }

    /// Adds a `(1, ncols)` row to every row of `self`.
    pub fn add_row(&self, row: &Mat) -> Mat {
        assert_eq!(row.nrows, 1);
        assert_eq!(row.ncols, self.ncols);
        let mut out = self.clone();
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                out.data[i * self.ncols + j] += row.data[j];
            }
        }
        out
    }

    /// Elementwise difference `self - other`.
    pub fn sub(&self, other: &Mat) -> Mat {
        assert_eq!(self.nrows, other.nrows);
        assert_eq!(self.ncols, other.ncols);
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Mat::from_vec(data, self.nrows, self.ncols)
    }

    /// Elementwise product.
    pub fn hadamard(&self, other: &Mat) -> Mat {
        assert_eq!(self.nrows, other.nrows);
        assert_eq!(self.ncols, other.ncols);
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Mat::from_vec(data, self.nrows, self.ncols)
    }

    /// Scalar multiple.
    pub fn scale(&self, k: f32) -> Mat {
        self.map(|v| v * k)
    }

    /// Applies `f` to every element.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Mat {
        let data = self.data.iter().map(|&v| f(v)).collect();
        Mat::from_vec(data, self.nrows, self.ncols)
    }

    /// Logistic sigmoid of every element.
    pub fn sigmoid(&self) -> Mat {
        self.map(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// Column sums as a `(1, ncols)` matrix.
    pub fn col_sum(&self) -> Mat {
        let mut out = Mat::zeros(1, self.ncols);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                out.data[j] += self.data[i * self.ncols + j];
            }
        }
        out
    }
}
