use std::path::Path;

use crate::alignment::Alignment;
use crate::alignment::io::read_alignment;
use crate::config::{Algorithm, CoevoConfig};
use crate::results::{AlignmentInfo, CoevoResults};
use crate::scoring::{
    column_entropies, gap_fractions, joint_entropies, mutual_information,
    normalized_mutual_information, znmi,
};
use crate::types::CoevoError;

/// Coevolution analysis engine.
///
/// Owns a [`CoevoConfig`] and runs the configured scoring pipeline over an
/// alignment: entropy, gap fractions, and joint entropy first, then the
/// algorithm-specific derivation. This is the recommended entry point; the
/// individual estimators in [`scoring`](crate::scoring) remain available
/// for callers that need intermediate matrices.
///
/// # Examples
///
/// ## Analyze an alignment file
///
/// ```rust,no_run
/// use coevo_core::{CoevoAnalyzer, config::CoevoConfig};
///
/// let analyzer = CoevoAnalyzer::new(CoevoConfig::default())?;
/// let results = analyzer.analyze_file("family.fasta")?;
///
/// println!(
///     "Scored {} column pairs ({} masked)",
///     results.alignment_info.scored_pairs,
///     results.alignment_info.masked_pairs
/// );
/// # Ok::<(), coevo_core::types::CoevoError>(())
/// ```
///
/// ## Analyze an in-memory alignment
///
/// ```rust
/// use coevo_core::{CoevoAnalyzer, alignment::Alignment, config::CoevoConfig};
///
/// let msa = Alignment::new(vec![
///     ("s1".to_string(), b"AAT".to_vec()),
///     ("s2".to_string(), b"AAT".to_vec()),
///     ("s3".to_string(), b"ATT".to_vec()),
///     ("s4".to_string(), b"ATA".to_vec()),
/// ])?;
///
/// let analyzer = CoevoAnalyzer::new(CoevoConfig {
///     quiet: true,
///     ..Default::default()
/// })?;
/// let results = analyzer.analyze_alignment(&msa)?;
/// # Ok::<(), coevo_core::types::CoevoError>(())
/// ```
#[derive(Debug)]
pub struct CoevoAnalyzer {
    /// Configuration options for the analysis
    pub config: CoevoConfig,
}

impl CoevoAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoevoError::InvalidConfig`] if thread pool configuration
    /// fails or a threshold is out of range.
    pub fn new(config: CoevoConfig) -> Result<Self, CoevoError> {
        if !(0.0..=1.0).contains(&config.max_gap_fraction) {
            return Err(CoevoError::InvalidConfig(format!(
                "max gap fraction must be within [0, 1], got {}",
                config.max_gap_fraction
            )));
        }

        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    CoevoError::InvalidConfig(format!("failed to configure thread pool: {e}"))
                })?;
        }

        Ok(Self { config })
    }

    /// Loads an alignment file (in the configured input format) and runs
    /// the scoring pipeline on it.
    ///
    /// # Errors
    ///
    /// Returns [`CoevoError`] if the file cannot be read, the alignment is
    /// malformed, or the pipeline fails.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<CoevoResults, CoevoError> {
        let alignment = read_alignment(path, self.config.input_format)?;
        self.analyze_alignment(&alignment)
    }

    /// Runs the configured scoring pipeline over an in-memory alignment.
    ///
    /// The estimator stages always run in the same order: column entropy,
    /// gap fractions, joint entropy (parallel), then the algorithm-specific
    /// derivation. For ZNMI/ZNDAMI the per-column background statistics are
    /// completed for every column before any pair is Z-transformed.
    ///
    /// # Errors
    ///
    /// Returns [`CoevoError::DimensionMismatch`] when derived vectors and
    /// matrices disagree, which indicates a bug upstream rather than a
    /// data problem.
    pub fn analyze_alignment(&self, msa: &Alignment) -> Result<CoevoResults, CoevoError> {
        let (ignore_gaps, suppress_negative) = self.effective_flags();

        if !self.config.quiet {
            eprintln!(
                "Scoring {} x {} alignment with {}...",
                msa.rows(),
                msa.cols(),
                self.config.algorithm
            );
        }

        let entropies = column_entropies(msa, ignore_gaps);
        let gaps = gap_fractions(msa);
        let joint = joint_entropies(msa, ignore_gaps);

        let scores = match self.config.algorithm {
            Algorithm::Mi => mutual_information(&entropies, &joint, suppress_negative)?,
            Algorithm::Nmi => {
                normalized_mutual_information(&entropies, &joint, suppress_negative)?
            }
            Algorithm::Znmi | Algorithm::Zndami => znmi(
                &entropies,
                &joint,
                &gaps,
                self.config.min_entropy,
                self.config.max_gap_fraction,
                suppress_negative,
            )?,
        };

        let scored_pairs = scores.pairs().filter(|(_, _, value)| value.is_some()).count();
        let masked_pairs = scores.num_pairs() - scored_pairs;

        if !self.config.quiet {
            eprintln!("Scored {scored_pairs} pairs, masked {masked_pairs}");
        }

        Ok(CoevoResults {
            scores,
            entropies,
            gap_fractions: gaps,
            alignment_info: AlignmentInfo {
                rows: msa.rows(),
                cols: msa.cols(),
                scored_pairs,
                masked_pairs,
            },
        })
    }

    /// Gap treatment and suppression for the configured algorithm. The
    /// DAMI variant counts gaps as ordinary symbols (its distributions are
    /// complete, so negative MI is not a gap artifact) and therefore never
    /// suppresses negatives.
    fn effective_flags(&self) -> (bool, bool) {
        match self.config.algorithm {
            Algorithm::Zndami => (false, false),
            _ => (self.config.ignore_gaps, self.config.suppress_negative),
        }
    }
}
