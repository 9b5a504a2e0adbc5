use crate::matrix::PairMatrix;

/// Coevolution scores from a pipeline run.
///
/// Contains the final pairwise score matrix together with the per-column
/// statistics the pipeline derived along the way, so callers can inspect
/// why a pair was masked without recomputing anything.
///
/// # Examples
///
/// ```rust,no_run
/// use coevo_core::{CoevoAnalyzer, config::CoevoConfig};
///
/// let analyzer = CoevoAnalyzer::new(CoevoConfig::default())?;
/// let results = analyzer.analyze_file("family.fasta")?;
///
/// println!(
///     "{} of {} pairs scored",
///     results.alignment_info.scored_pairs,
///     results.scores.num_pairs()
/// );
/// # Ok::<(), coevo_core::types::CoevoError>(())
/// ```
#[derive(Debug)]
pub struct CoevoResults {
    /// Final pairwise score matrix; `None` cells are undefined or
    /// filtered pairs.
    pub scores: PairMatrix<Option<f64>>,

    /// Per-column Shannon entropy (natural-log nats).
    pub entropies: Vec<f64>,

    /// Per-column gap fractions in `[0, 1]`.
    pub gap_fractions: Vec<f64>,

    /// Metadata about the analyzed alignment.
    pub alignment_info: AlignmentInfo,
}

/// Shape and outcome statistics for one analyzed alignment.
#[derive(Debug, Clone)]
pub struct AlignmentInfo {
    /// Number of aligned sequences.
    pub rows: usize,

    /// Number of alignment positions.
    pub cols: usize,

    /// Column pairs carrying a defined score.
    pub scored_pairs: usize,

    /// Column pairs masked as `NO_DATA`.
    pub masked_pairs: usize,
}
