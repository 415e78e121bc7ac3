use std::cmp::Ordering;

use num::Float;

/// Sparse vector that stores only non-zero elements.
///
/// `indices` are kept strictly ascending so two vectors can be combined
/// with a single merge pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<N>
where
    N: Float,
{
    indices: Vec<usize>,
    values: Vec<N>,
    /// logical dimension
    len: usize,
}

impl<N> SparseVec<N>
where
    N: Float,
{
    /// Empty vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zeros are dropped, duplicate indices are summed.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);

        let mut indices: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut values: Vec<N> = Vec::with_capacity(pairs.len());
        for (idx, val) in pairs {
            debug_assert!(idx < len, "index {idx} out of range for dimension {len}");
            match indices.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = values.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    indices.push(idx);
                    values.push(val);
                }
            }
        }
        let mut vec = Self { indices, values, len };
        vec.drop_zeros();
        vec
    }

    fn drop_zeros(&mut self) {
        let mut w = 0;
        for r in 0..self.values.len() {
            if !self.values[r].is_zero() {
                self.indices[w] = self.indices[r];
                self.values[w] = self.values[r];
                w += 1;
            }
        }
        self.indices.truncate(w);
        self.values.truncate(w);
    }

    /// logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// true when no element is non-zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(index, value)` over the non-zero elements in index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Element at `index`, zero when absent
    pub fn get(&self, index: usize) -> N {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => N::zero(),
        }
    }

    /// Multiply each stored element by the dense weight at the same index.
    /// Missing weights count as zero.
    pub fn hadamard_dense(&mut self, weights: &[N]) {
        for (idx, val) in self.indices.iter().zip(self.values.iter_mut()) {
            *val = *val * weights.get(*idx).copied().unwrap_or_else(N::zero);
        }
        self.drop_zeros();
    }

    /// Σ v_i^2
    #[inline]
    pub fn norm_sq(&self) -> N {
        self.values.iter().fold(N::zero(), |acc, v| acc + *v * *v)
    }

    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Scale to unit L2 norm.
    /// Returns false and leaves the vector untouched when its norm is zero.
    pub fn l2_normalize(&mut self) -> bool {
        let norm = self.norm();
        if norm.is_zero() || !norm.is_finite() {
            return false;
        }
        let inv = norm.recip();
        for v in self.values.iter_mut() {
            *v = *v * inv;
        }
        true
    }

    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len, other.len,
            "Vectors must be of the same length to compute dot product."
        );
        let mut result = N::zero();
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Equal => {
                    result = result + self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// A zero vector on either side yields zero instead of NaN.
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let denom = self.norm() * other.norm();
        if denom.is_zero() {
            return N::zero();
        }
        self.dot(other) / denom
    }
}
