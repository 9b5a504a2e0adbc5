//! # Coevo - Coevolution Scoring for Multiple Sequence Alignments
//!
//! A Rust implementation of the Z-normalized mutual information (ZNMI)
//! coevolution-scoring method, quantifying statistical dependence between
//! aligned positions across the sequences of a protein or nucleotide
//! family.
//!
//! ## Overview
//!
//! Given a multiple sequence alignment, coevo derives per-column Shannon
//! entropy, per-column gap fractions, and pairwise joint entropy, then
//! computes one of four coevolution scores: plain mutual information (MI),
//! normalized mutual information (NMI), Z-normalized MI (ZNMI, the
//! Brown & Brown bias-corrected score), or its gap-inclusive variant
//! (ZNDAMI). Degenerate and quality-filtered pairs are tracked as `None`
//! cells and omitted from output rather than surfacing as NaN, infinity,
//! or errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coevo_core::{CoevoAnalyzer, config::CoevoConfig};
//!
//! // Create an analyzer with the reference configuration
//! let analyzer = CoevoAnalyzer::new(CoevoConfig::default())?;
//!
//! // Score a FASTA alignment
//! let results = analyzer.analyze_file("family.fasta")?;
//!
//! println!("Scored {} column pairs", results.alignment_info.scored_pairs);
//! # Ok::<(), coevo_core::types::CoevoError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options and algorithm selection
//! - [`engine`]: Pipeline orchestration
//! - [`alignment`]: Alignment storage, loading, and manipulation
//! - [`matrix`]: Symmetric pairwise matrices
//! - [`scoring`]: Entropy, joint entropy, MI/NMI, and ZNMI estimators
//! - [`output`]: Score serialization (sparse XYZ, raster dump)
//! - [`results`]: Analysis results
//! - [`types`]: Error types
//! - [`constants`]: Reference thresholds and shared constants
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, CoevoError>`](types::CoevoError).
//! Malformed alignments, dimension mismatches, and I/O problems are fatal;
//! numeric degeneracies (conserved columns, heavily gapped columns,
//! zero-variance backgrounds) are expected and handled locally as `None`
//! scores, never as errors.

pub mod alignment;
pub mod config;
pub mod constants;
pub mod engine;
pub mod matrix;
pub mod output;
pub mod results;
pub mod scoring;
pub mod types;

pub use alignment::Alignment;
pub use config::{Algorithm, CoevoConfig, InputFormat, OutputFormat};
pub use engine::CoevoAnalyzer;
pub use matrix::PairMatrix;
pub use results::CoevoResults;
pub use types::CoevoError;
