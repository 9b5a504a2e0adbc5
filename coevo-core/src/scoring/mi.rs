//! Mutual information and normalized mutual information.
//!
//! Both estimators derive pairwise scores from the column entropy vector
//! and the joint entropy matrix. When gaps were excluded from the tallies
//! (the Brown & Brown treatment), the marginal and joint distributions are
//! estimated over different row subsets and the resulting MI can come out
//! negative; callers can suppress those artifacts to `NO_DATA`.

use crate::constants::ZERO_THRESHOLD;
use crate::matrix::PairMatrix;
use crate::types::CoevoError;

fn check_dimensions(entropies: &[f64], joint: &PairMatrix<f64>) -> Result<(), CoevoError> {
    if entropies.len() != joint.dim() {
        return Err(CoevoError::DimensionMismatch {
            expected: entropies.len(),
            actual: joint.dim(),
        });
    }
    Ok(())
}

/// Plain mutual information `e1 + e2 - je` for every column pair.
///
/// # Errors
///
/// Returns [`CoevoError::DimensionMismatch`] when the entropy vector and
/// the joint entropy matrix disagree on the number of columns.
pub fn mutual_information(
    entropies: &[f64],
    joint: &PairMatrix<f64>,
    suppress_negative: bool,
) -> Result<PairMatrix<Option<f64>>, CoevoError> {
    check_dimensions(entropies, joint)?;

    Ok(PairMatrix::from_fn(joint.dim(), |c1, c2| {
        let value = entropies[c1] + entropies[c2] - joint.get(c1, c2);
        if suppress_negative && value < 0.0 {
            None
        } else {
            Some(value)
        }
    }))
}

/// Normalized mutual information `(e1 + e2 - je) / je` for every column
/// pair.
///
/// Pairs whose joint entropy is at or below [`ZERO_THRESHOLD`] are too
/// degenerate to normalize and become `None` instead of dividing by a
/// near-zero denominator.
///
/// # Errors
///
/// Returns [`CoevoError::DimensionMismatch`] when the entropy vector and
/// the joint entropy matrix disagree on the number of columns.
pub fn normalized_mutual_information(
    entropies: &[f64],
    joint: &PairMatrix<f64>,
    suppress_negative: bool,
) -> Result<PairMatrix<Option<f64>>, CoevoError> {
    check_dimensions(entropies, joint)?;

    Ok(PairMatrix::from_fn(joint.dim(), |c1, c2| {
        let joint_entropy = *joint.get(c1, c2);
        if joint_entropy <= ZERO_THRESHOLD {
            return None;
        }

        let value = (entropies[c1] + entropies[c2] - joint_entropy) / joint_entropy;
        if suppress_negative && value < 0.0 {
            None
        } else {
            Some(value)
        }
    }))
}
