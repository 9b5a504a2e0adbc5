use crate::constants::{DEFAULT_MAX_GAP_FRACTION, DEFAULT_MIN_ENTROPY};

/// Coevolution scoring algorithms.
///
/// All four operate on the same entropy/joint-entropy estimates; they
/// differ in normalization, bias correction, and gap treatment.
///
/// # Algorithms
///
/// - **MI**: plain mutual information `e1 + e2 - je`
/// - **NMI**: mutual information normalized by joint entropy
/// - **ZNMI**: NMI converted to a Z-score against each column's background
///   NMI distribution (Brown & Brown), after quality filtering
/// - **ZNDAMI**: the gapped variant of ZNMI, where gaps participate as
///   ordinary alphabet symbols and negative scores are not suppressed
///
/// # Examples
///
/// ```rust
/// use coevo_core::config::{Algorithm, CoevoConfig};
///
/// let config = CoevoConfig {
///     algorithm: Algorithm::Nmi,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Plain mutual information, no normalization.
    Mi,

    /// Normalized mutual information (MI divided by joint entropy).
    Nmi,

    /// Z-normalized mutual information; the final coevolution score of the
    /// Brown & Brown method. Applies the quality filter before the
    /// Z-transform.
    Znmi,

    /// Z-normalized dash-aware mutual information. Same pipeline as ZNMI
    /// but gaps count as a regular symbol and negative values survive.
    Zndami,
}

impl Algorithm {
    /// Lowercase name as used on the command line and in progress output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mi => "mi",
            Self::Nmi => "nmi",
            Self::Znmi => "znmi",
            Self::Zndami => "zndami",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input alignment formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// FASTA format (`>name` header lines followed by sequence lines).
    Fasta,

    /// Fodor format: one `name<TAB>sequence` record per line.
    Fodor,
}

/// Output format options for score matrices.
///
/// # Formats
///
/// - **XYZ**: sparse tab-separated triplets, one surviving pair per line.
///   The interchange format consumed by downstream network tools.
/// - **Raster**: dense matrix dump with `null`/`id` placeholders, useful
///   for eyeballing small alignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sparse upper-triangular `i\tj\tscore` lines after a header.
    Xyz,

    /// Full-matrix dump, one alignment column per row.
    Raster,
}

/// Configuration settings for a coevolution analysis run.
///
/// # Examples
///
/// ## Default configuration (ZNMI with reference thresholds)
///
/// ```rust
/// use coevo_core::config::CoevoConfig;
///
/// let config = CoevoConfig::default();
/// ```
///
/// ## Custom thresholds and multiple threads
///
/// ```rust
/// use coevo_core::config::{Algorithm, CoevoConfig};
///
/// let config = CoevoConfig {
///     algorithm: Algorithm::Znmi,
///     min_entropy: 0.3,
///     num_threads: Some(8),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CoevoConfig {
    /// Scoring algorithm to run.
    ///
    /// **Default**: [`Algorithm::Znmi`]
    pub algorithm: Algorithm,

    /// Format of the input alignment file.
    ///
    /// **Default**: [`InputFormat::Fasta`]
    pub input_format: InputFormat,

    /// Minimum column entropy (natural-log nats) for the quality filter.
    ///
    /// Columns below this are near-invariant and produce statistically
    /// unreliable MI estimates; every pair involving such a column is
    /// masked. Only consulted by the ZNMI/ZNDAMI pipelines.
    ///
    /// **Default**: `0.198515243` (reference value)
    pub min_entropy: f64,

    /// Maximum per-column gap fraction for the quality filter.
    ///
    /// Columns whose gap fraction is at or above this are masked from
    /// every pair. Only consulted by the ZNMI/ZNDAMI pipelines.
    ///
    /// **Default**: `0.1`
    pub max_gap_fraction: f64,

    /// Exclude gap symbols from the entropy and joint-entropy tallies.
    ///
    /// Matches the Brown & Brown treatment of gaps. Ignored by
    /// [`Algorithm::Zndami`], which always counts gaps as symbols.
    ///
    /// **Default**: `true`
    pub ignore_gaps: bool,

    /// Replace negative MI/NMI values with `NO_DATA`.
    ///
    /// Negative values are an artifact of gap exclusion, not a meaningful
    /// signal. Ignored by [`Algorithm::Zndami`], which never suppresses.
    ///
    /// **Default**: `true`
    pub suppress_negative: bool,

    /// Number of threads for the joint-entropy stage.
    ///
    /// When set, configures the global rayon pool. `None` uses all
    /// available cores.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,

    /// Suppress progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for CoevoConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Znmi,
            input_format: InputFormat::Fasta,
            min_entropy: DEFAULT_MIN_ENTROPY,
            max_gap_fraction: DEFAULT_MAX_GAP_FRACTION,
            ignore_gaps: true,
            suppress_negative: true,
            num_threads: None,
            quiet: false,
        }
    }
}
