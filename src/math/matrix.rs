use rand::prelude::*;
use serde::{Serialize, Serializer, Deserialize};

use crate::error::{NetworkError, Result};

/// Half-width of the interval `Matrix::random` draws from.
const INIT_RANGE: f64 = 0.05;

/// Dense, row-major weight matrix.
///
/// Each row holds the incoming weights of one destination unit; the last
/// column is the bias weight, which is multiplied by an implicit input of 1.
/// Rows are never empty and always share the same width.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Random matrix with entries drawn uniformly from (-0.05, 0.05).
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with(&mut rand::thread_rng(), rows, cols)
    }

    /// Same as [`Matrix::random`] but with a caller-supplied generator, so
    /// seeded runs are reproducible.
    pub fn random_with<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for row in res.data.iter_mut() {
            for w in row.iter_mut() {
                // gen_range is half-open; reject the lower bound to keep the interval open.
                *w = loop {
                    let v = rng.gen_range(-INIT_RANGE..INIT_RANGE);
                    if v != -INIT_RANGE {
                        break v;
                    }
                };
            }
        }

        res
    }

    /// Builds a matrix from nested rows, rejecting empty and ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        if rows == 0 {
            return Err(NetworkError::dimension("matrix row count (minimum)", 1, 0));
        }
        let cols = data[0].len();
        if cols == 0 {
            return Err(NetworkError::dimension("matrix column count (minimum)", 1, 0));
        }
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NetworkError::dimension("matrix row width", cols, row.len()));
        }

        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Weighted sum of `input` over row `i`, plus the row's bias weight.
    ///
    /// `input.len()` must be `cols - 1`; callers check this up front.
    pub fn weighted_sum(&self, i: usize, input: &[f64]) -> f64 {
        let row = &self.data[i];
        let (weights, bias) = row.split_at(input.len());
        let mut sum = 0.0;
        for (x, w) in input.iter().zip(weights) {
            sum += x * w;
        }
        sum + bias[0]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = NetworkError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_data(data)
    }
}

// Serialized as plain nested rows; the shape is implied by the data.
impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn from_data_tracks_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
    }

    #[test]
    fn from_data_rejects_empty_and_ragged() {
        assert!(matches!(
            Matrix::from_data(vec![]),
            Err(NetworkError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Matrix::from_data(vec![vec![], vec![]]),
            Err(NetworkError::DimensionMismatch { .. })
        ));
        assert_eq!(
            Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(NetworkError::DimensionMismatch {
                context: "matrix row width",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn random_stays_inside_open_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_with(&mut rng, 20, 31);
        assert_eq!((m.rows(), m.cols()), (20, 31));
        assert!(m.iter_rows().flatten().all(|w| *w > -0.05 && *w < 0.05));
        // Not all the same value.
        assert!(m.iter_rows().flatten().any(|w| *w != m.get(0, 0)));
    }

    #[test]
    fn random_with_is_reproducible() {
        let a = Matrix::random_with(&mut StdRng::seed_from_u64(42), 3, 4);
        let b = Matrix::random_with(&mut StdRng::seed_from_u64(42), 3, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn weighted_sum_adds_bias() {
        let m = Matrix::from_data(vec![vec![0.5, -1.0, 0.25]]).unwrap();
        assert_eq!(m.weighted_sum(0, &[2.0, 3.0]), 0.5 * 2.0 - 3.0 + 0.25);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let m = Matrix::from_data(vec![vec![1.5, -2.0], vec![0.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.5,-2.0],[0.0,4.0]]");
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0,3.0]]").is_err());
    }
}
