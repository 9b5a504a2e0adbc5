/// Version string for coevo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gap symbol used in alignments
pub const GAP: u8 = b'-';

/// Threshold below which a joint entropy or pooled deviation is treated as zero
pub const ZERO_THRESHOLD: f64 = 1e-10;

/// Default minimum column entropy (natural-log nats) for the quality filter
pub const DEFAULT_MIN_ENTROPY: f64 = 0.198515243;

/// Default maximum per-column gap fraction for the quality filter
pub const DEFAULT_MAX_GAP_FRACTION: f64 = 0.1;

/// Header line of the sparse XYZ score format
pub const XYZ_HEADER: &str = "i\tj\tscore";
