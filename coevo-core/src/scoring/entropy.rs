//! Per-column Shannon entropy and gap-fraction estimators.

use crate::alignment::Alignment;
use crate::constants::GAP;

/// Shannon entropy (natural log) of a tallied distribution.
///
/// `total` must be the sum of the counts. A distribution with no observed
/// symbols has entropy 0 by definition here; the quality filter removes
/// the all-gap columns that produce this case before they reach any
/// output.
pub(crate) fn shannon_entropy(counts: impl Iterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let norm = 1.0 / total as f64;
    let mut entropy = 0.0;
    for count in counts {
        let prob = count as f64 * norm;
        entropy -= prob * prob.ln();
    }
    entropy
}

/// Per-column Shannon entropy over symbol frequencies.
///
/// Gap symbols are excluded from the tally when `ignore_gaps` is set, for
/// consistency with the Brown & Brown treatment of gaps. O(rows·cols).
#[must_use]
pub fn column_entropies(msa: &Alignment, ignore_gaps: bool) -> Vec<f64> {
    (0..msa.cols())
        .map(|col| {
            let mut counts = [0usize; 256];
            let mut total = 0usize;

            for row in 0..msa.rows() {
                let symbol = msa.get(row, col);
                if ignore_gaps && symbol == GAP {
                    continue;
                }
                counts[symbol as usize] += 1;
                total += 1;
            }

            shannon_entropy(counts.iter().copied().filter(|&count| count > 0), total)
        })
        .collect()
}

/// Per-column fraction of gap symbols, each in `[0, 1]`.
#[must_use]
pub fn gap_fractions(msa: &Alignment) -> Vec<f64> {
    (0..msa.cols())
        .map(|col| {
            let gaps = (0..msa.rows())
                .filter(|&row| msa.get(row, col) == GAP)
                .count();
            gaps as f64 / msa.rows() as f64
        })
        .collect()
}
