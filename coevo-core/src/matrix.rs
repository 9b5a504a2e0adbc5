//! Symmetric pairwise matrices over alignment columns.
//!
//! Joint entropy and every score matrix in the pipeline are symmetric with
//! an unused diagonal, so only the strict upper triangle is stored.
//! `get(i, j)` and `get(j, i)` resolve to the same cell, which makes the
//! symmetry invariant hold by construction and halves memory for the
//! O(cols²) matrices that dominate large alignments.

use rayon::prelude::*;

/// Symmetric `dim × dim` matrix storing only cells `(i, j)` with `i < j`.
///
/// The diagonal is not stored; accessing it is a programming error and
/// panics.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T> PairMatrix<T> {
    /// Number of rows/columns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (unordered) pairs.
    #[must_use]
    pub fn num_pairs(&self) -> usize {
        self.cells.len()
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i != j, "the diagonal of a PairMatrix is not stored");
        assert!(
            i < self.dim && j < self.dim,
            "pair ({i}, {j}) out of range for dimension {}",
            self.dim
        );
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        lo * self.dim - lo * (lo + 1) / 2 + (hi - lo - 1)
    }

    /// Value of the unordered pair `(i, j)`; order of the indices does not
    /// matter.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.cells[self.offset(i, j)]
    }

    /// Set the value of the unordered pair `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let offset = self.offset(i, j);
        self.cells[offset] = value;
    }

    /// Iterate over all pairs in ascending `(i, j)` order with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let dim = self.dim;
        (0..dim)
            .flat_map(move |i| (i + 1..dim).map(move |j| (i, j)))
            .zip(self.cells.iter())
            .map(|((i, j), value)| (i, j, value))
    }

    /// Build a matrix by evaluating `f` once per pair, sequentially.
    pub fn from_fn<F>(dim: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(dim * dim.saturating_sub(1) / 2);
        for i in 0..dim {
            for j in (i + 1)..dim {
                cells.push(f(i, j));
            }
        }
        Self { dim, cells }
    }

    /// Build a matrix by evaluating `f` once per pair, parallelized across
    /// row stripes of the upper triangle. Each worker writes a disjoint
    /// slice of the result, so no locking is involved.
    pub fn from_fn_par<F>(dim: usize, f: F) -> Self
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync,
    {
        let rows: Vec<Vec<T>> = (0..dim)
            .into_par_iter()
            .map(|i| ((i + 1)..dim).map(|j| f(i, j)).collect())
            .collect();
        let cells = rows.into_iter().flatten().collect();
        Self { dim, cells }
    }
}

impl<T: Clone + Default> PairMatrix<T> {
    /// Matrix of the given dimension with every pair set to `T::default()`.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![T::default(); dim * dim.saturating_sub(1) / 2],
        }
    }
}
