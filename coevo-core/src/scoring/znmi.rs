//! Z-normalized mutual information, the final coevolution score.
//!
//! NMI carries a composition-dependent bias: some columns yield a high
//! background NMI against every partner regardless of true coevolution.
//! Following Brown & Brown, each pairwise NMI value is converted into a
//! Z-score against the background distributions of its two columns. The
//! per-column statistics must be complete before any pair is transformed,
//! so the two steps are strictly sequential.

use crate::constants::ZERO_THRESHOLD;
use crate::matrix::PairMatrix;
use crate::scoring::mi::normalized_mutual_information;
use crate::types::CoevoError;

/// Background NMI distribution parameters of one column.
#[derive(Debug, Clone, Copy)]
struct ColumnStats {
    mean: f64,
    variance: f64,
}

/// Mask every pair involving a low-entropy or heavily gapped column.
///
/// A column fails when its entropy is below `min_entropy` or its gap
/// fraction is at or above `max_gap_fraction`; both produce statistically
/// unreliable MI estimates.
pub fn apply_quality_filter(
    scores: &mut PairMatrix<Option<f64>>,
    entropies: &[f64],
    gap_fractions: &[f64],
    min_entropy: f64,
    max_gap_fraction: f64,
) {
    let dim = scores.dim();
    for col in 0..dim {
        if entropies[col] < min_entropy || gap_fractions[col] >= max_gap_fraction {
            for other in 0..dim {
                if other != col {
                    scores.set(col, other, None);
                }
            }
        }
    }
}

/// Mean and variance of the surviving values in one column, excluding the
/// diagonal. Two passes: the mean is fixed before the deviations are
/// accumulated. Returns `None` when no value in the column survived.
fn column_stats(scores: &PairMatrix<Option<f64>>, column: usize) -> Option<ColumnStats> {
    let dim = scores.dim();

    let mut sum = 0.0;
    let mut count = 0usize;
    for other in (0..dim).filter(|&other| other != column) {
        if let Some(value) = *scores.get(column, other) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;

    let mut squared_deviations = 0.0;
    for other in (0..dim).filter(|&other| other != column) {
        if let Some(value) = *scores.get(column, other) {
            let delta = value - mean;
            squared_deviations += delta * delta;
        }
    }

    // Population divisor, not n-1, for compatibility with the Brown &
    // Brown reference implementation.
    Some(ColumnStats {
        mean,
        variance: squared_deviations / count as f64,
    })
}

/// Convert each surviving score into a Z-score against the pooled
/// background distribution of its two columns:
///
/// ```text
/// zmean = (mean1·var2 + mean2·var1) / (var1 + var2)
/// zstd  = sqrt(var1·var2 / (var1 + var2))
/// ```
///
/// A pair becomes `None` when either column has no background statistics,
/// the pooled variance degenerates (a fully conserved column always has
/// variance 0), or the pair was already masked. Degenerate pools yield
/// `None` rather than ±∞; this is deliberate policy.
#[must_use]
pub fn z_normalize(scores: &PairMatrix<Option<f64>>) -> PairMatrix<Option<f64>> {
    let dim = scores.dim();
    let stats: Vec<Option<ColumnStats>> = (0..dim)
        .map(|column| column_stats(scores, column))
        .collect();

    PairMatrix::from_fn(dim, |c1, c2| {
        let (Some(stats1), Some(stats2)) = (stats[c1], stats[c2]) else {
            return None;
        };

        let pooled_variance = stats1.variance + stats2.variance;
        if pooled_variance <= ZERO_THRESHOLD {
            return None;
        }

        let zstd = (stats1.variance * stats2.variance / pooled_variance).sqrt();
        if zstd <= ZERO_THRESHOLD {
            return None;
        }

        let zmean =
            (stats1.mean * stats2.variance + stats2.mean * stats1.variance) / pooled_variance;
        scores.get(c1, c2).map(|value| (value - zmean) / zstd)
    })
}

/// The full ZNMI pipeline: NMI, quality filter, Z-transform.
///
/// # Errors
///
/// Returns [`CoevoError::DimensionMismatch`] when the entropy vector, gap
/// vector, and joint entropy matrix disagree on the number of columns.
pub fn znmi(
    entropies: &[f64],
    joint: &PairMatrix<f64>,
    gap_fractions: &[f64],
    min_entropy: f64,
    max_gap_fraction: f64,
    suppress_negative: bool,
) -> Result<PairMatrix<Option<f64>>, CoevoError> {
    if gap_fractions.len() != entropies.len() {
        return Err(CoevoError::DimensionMismatch {
            expected: entropies.len(),
            actual: gap_fractions.len(),
        });
    }

    let mut scores = normalized_mutual_information(entropies, joint, suppress_negative)?;
    apply_quality_filter(
        &mut scores,
        entropies,
        gap_fractions,
        min_entropy,
        max_gap_fraction,
    );
    Ok(z_normalize(&scores))
}
