use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::{utils::math::sparse::SparseVec, vectorizer::TermWeightMatrix};

/// Dense pairwise cosine similarity over the rows of a term weight matrix.
///
/// - symmetric
/// - `M[i][i] == 1.0` when row `i` is non-zero
/// - a zero row is `0.0` against everything, itself included
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    /// row-major n x n
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the full matrix.
    /// The upper triangle is computed row by row, on the rayon pool once
    /// the row count reaches `parallel_threshold`, then mirrored.
    pub fn compute<N>(matrix: &TermWeightMatrix<N>, parallel_threshold: usize) -> Self
    where
        N: Float + Send + Sync,
    {
        let rows = &matrix.rows;
        let n = rows.len();

        let upper: Vec<Vec<f64>> = if n >= parallel_threshold {
            (0..n).into_par_iter().map(|i| upper_row(rows, i)).collect()
        } else {
            (0..n).map(|i| upper_row(rows, i)).collect()
        };

        let mut values = vec![0.0; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + offset;
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }
        debug!(n, parallel = n >= parallel_threshold, "computed similarity matrix");
        Self { n, values }
    }

    /// number of rows (and columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// similarity between documents `i` and `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// similarities of document `i` against every document
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

/// `[M[i][i], M[i][i+1], .., M[i][n-1]]`
fn upper_row<N>(rows: &[SparseVec<N>], i: usize) -> Vec<f64>
where
    N: Float,
{
    let a = &rows[i];
    (i..rows.len())
        .map(|j| {
            if i == j {
                if a.is_zero() { 0.0 } else { 1.0 }
            } else {
                cell(a, &rows[j])
            }
        })
        .collect()
}

#[inline]
fn cell<N>(a: &SparseVec<N>, b: &SparseVec<N>) -> f64
where
    N: Float,
{
    let sim = a.cosine_similarity(b).to_f64().unwrap_or(0.0);
    // rounding can push identical documents slightly past 1
    sim.clamp(0.0, 1.0)
}
