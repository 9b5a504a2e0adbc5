//! Pairwise joint Shannon entropy over column pairs.

use std::collections::HashMap;

use crate::alignment::Alignment;
use crate::constants::GAP;
use crate::matrix::PairMatrix;
use crate::scoring::entropy::shannon_entropy;

/// Joint Shannon entropy of the paired-symbol distribution for every
/// unordered column pair.
///
/// When `ignore_gaps` is set, rows with a gap in either column are
/// skipped, so the joint distribution covers only fully observed symbol
/// pairs. A pair with no surviving rows has joint entropy 0, which the
/// NMI zero-denominator guard later maps to `NO_DATA`.
///
/// This is the dominant cost of the pipeline, O(cols²·rows); the pair
/// space is partitioned into row stripes of the upper triangle and
/// computed on the rayon pool, each worker filling disjoint output cells.
#[must_use]
pub fn joint_entropies(msa: &Alignment, ignore_gaps: bool) -> PairMatrix<f64> {
    PairMatrix::from_fn_par(msa.cols(), |c1, c2| {
        let mut counts: HashMap<(u8, u8), usize> = HashMap::new();
        let mut total = 0usize;

        for row in 0..msa.rows() {
            let (a, b) = (msa.get(row, c1), msa.get(row, c2));
            if ignore_gaps && (a == GAP || b == GAP) {
                continue;
            }
            *counts.entry((a, b)).or_insert(0) += 1;
            total += 1;
        }

        shannon_entropy(counts.into_values(), total)
    })
}
