//! Information-theoretic coevolution estimators.
//!
//! The pipeline runs leaves-first over an [`Alignment`](crate::alignment::Alignment):
//!
//! 1. [`entropy`]: per-column Shannon entropy and gap fractions
//! 2. [`joint`]: pairwise joint entropy (the O(cols²·rows) hot spot)
//! 3. [`mi`]: plain and normalized mutual information
//! 4. [`znmi`]: quality filtering and the pooled Z-transform
//!
//! Degenerate pairs (near-zero joint entropy, suppressed negatives,
//! filtered columns, zero-variance pooling) are represented as `None`
//! cells, never as errors and never as NaN/∞: downstream formatting simply
//! omits them.

pub mod entropy;
pub mod joint;
pub mod mi;
pub mod znmi;

pub use entropy::{column_entropies, gap_fractions};
pub use joint::joint_entropies;
pub use mi::{mutual_information, normalized_mutual_information};
pub use znmi::{apply_quality_filter, z_normalize, znmi};
