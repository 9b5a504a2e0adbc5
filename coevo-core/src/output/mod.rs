//! Output formatting for coevolution score matrices.
//!
//! The interchange format is the sparse XYZ layout: a fixed `i\tj\tscore`
//! header followed by one tab-separated line per surviving pair, masked
//! pairs omitted. A dense raster dump is available for inspection. Both
//! writers report how many pairs they printed and how many they
//! suppressed.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use coevo_core::{CoevoAnalyzer, config::{CoevoConfig, OutputFormat}};
//! use coevo_core::output::write_scores;
//! use std::io::stdout;
//!
//! let analyzer = CoevoAnalyzer::new(CoevoConfig::default())?;
//! let results = analyzer.analyze_file("family.fasta")?;
//!
//! write_scores(&mut stdout(), &results.scores, OutputFormat::Xyz)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::config::OutputFormat;
use crate::matrix::PairMatrix;
use crate::types::CoevoError;

mod formats {
    pub mod raster;
    pub mod xyz;
}

pub use formats::xyz::{ScoredPair, read_xyz_format};

use formats::raster::write_raster_format;
use formats::xyz::write_xyz_format;

/// How many pairs a writer printed and how many it suppressed as
/// `NO_DATA`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounts {
    pub printed: usize,
    pub suppressed: usize,
}

/// Writes a score matrix in the specified format.
pub fn write_scores<W: Write>(
    writer: &mut W,
    scores: &PairMatrix<Option<f64>>,
    format: OutputFormat,
) -> Result<ScoreCounts, CoevoError> {
    match format {
        OutputFormat::Xyz => write_xyz_format(writer, scores),
        OutputFormat::Raster => write_raster_format(writer, scores),
    }
}

/// Writes a score matrix to a file, gzip-compressed when the path ends in
/// `.gz`.
///
/// # Errors
///
/// Returns [`CoevoError::OutputExists`] when the path already exists; an
/// existing result is never clobbered.
pub fn write_scores_to_path<P: AsRef<Path>>(
    path: P,
    scores: &PairMatrix<Option<f64>>,
    format: OutputFormat,
) -> Result<ScoreCounts, CoevoError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(CoevoError::OutputExists(path.to_path_buf()));
    }

    let file = File::create(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let counts = write_scores(&mut encoder, scores, format)?;
        encoder.finish()?;
        Ok(counts)
    } else {
        let mut writer = BufWriter::new(file);
        let counts = write_scores(&mut writer, scores, format)?;
        writer.flush()?;
        Ok(counts)
    }
}
