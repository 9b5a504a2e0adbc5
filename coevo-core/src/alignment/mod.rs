//! Multiple sequence alignment storage and manipulation.
//!
//! An [`Alignment`] is an immutable `rows × cols` grid of single-byte
//! symbols (amino acids, nucleotides, or the gap symbol `-`), one row per
//! aligned sequence. All scoring stages consume it through read-only
//! indexed access; the editing utilities (`strip_gap_columns`,
//! `strip_redundant`) return new alignments instead of mutating.

pub mod io;

use crate::constants::GAP;
use crate::types::CoevoError;

/// A fixed-width multiple sequence alignment.
///
/// Invariant: every row has the same length, enforced at construction.
///
/// # Examples
///
/// ```rust
/// use coevo_core::alignment::Alignment;
///
/// let msa = Alignment::new(vec![
///     ("seq1".to_string(), b"AC-T".to_vec()),
///     ("seq2".to_string(), b"ACGT".to_vec()),
/// ])?;
///
/// assert_eq!(msa.rows(), 2);
/// assert_eq!(msa.cols(), 4);
/// assert_eq!(msa.get(0, 2), b'-');
/// # Ok::<(), coevo_core::types::CoevoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Row-major symbol storage, `rows * cols` bytes
    data: Vec<u8>,
    names: Vec<String>,
    rows: usize,
    cols: usize,
}

impl Alignment {
    /// Builds an alignment from `(name, sequence)` records.
    ///
    /// # Errors
    ///
    /// Returns [`CoevoError::InvalidAlignment`] when the record list is
    /// empty or the sequences are not all the same length.
    pub fn new(records: Vec<(String, Vec<u8>)>) -> Result<Self, CoevoError> {
        if records.is_empty() {
            return Err(CoevoError::InvalidAlignment(
                "alignment contains no sequences".to_string(),
            ));
        }

        let cols = records[0].1.len();
        let rows = records.len();

        let mut data = Vec::with_capacity(rows * cols);
        let mut names = Vec::with_capacity(rows);
        for (index, (name, sequence)) in records.into_iter().enumerate() {
            if sequence.len() != cols {
                return Err(CoevoError::InvalidAlignment(format!(
                    "sequence '{}' (record {}) has length {} but the alignment is {} columns wide",
                    name,
                    index + 1,
                    sequence.len(),
                    cols
                )));
            }
            data.extend_from_slice(&sequence);
            names.push(name);
        }

        Ok(Self {
            data,
            names,
            rows,
            cols,
        })
    }

    /// Number of aligned sequences.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of alignment positions.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sequence names, one per row.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Symbol at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    /// Full aligned sequence of one row.
    #[must_use]
    pub fn sequence(&self, row: usize) -> &[u8] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Sequence of one row with all gap symbols removed.
    #[must_use]
    pub fn ungapped_sequence(&self, row: usize) -> Vec<u8> {
        self.sequence(row)
            .iter()
            .copied()
            .filter(|&symbol| symbol != GAP)
            .collect()
    }

    /// Fraction of positions at which two rows carry the same non-gap
    /// symbol. Positions where both rows are gapped are ignored; a gap
    /// paired with a symbol counts as a mismatch. Returns 0.0 when no
    /// position is comparable.
    #[must_use]
    pub fn row_identity(&self, row1: usize, row2: usize) -> f64 {
        let mut hit = 0usize;
        let mut miss = 0usize;
        for col in 0..self.cols {
            let (a, b) = (self.get(row1, col), self.get(row2, col));
            if a == b && a != GAP {
                hit += 1;
            } else if a != b {
                miss += 1;
            }
        }
        if hit + miss == 0 {
            return 0.0;
        }
        hit as f64 / (hit + miss) as f64
    }

    /// New alignment without the columns that consist entirely of gaps.
    #[must_use]
    pub fn strip_gap_columns(&self) -> Self {
        let keep: Vec<usize> = (0..self.cols)
            .filter(|&col| (0..self.rows).any(|row| self.get(row, col) != GAP))
            .collect();

        let mut data = Vec::with_capacity(self.rows * keep.len());
        for row in 0..self.rows {
            for &col in &keep {
                data.push(self.get(row, col));
            }
        }

        Self {
            data,
            names: self.names.clone(),
            rows: self.rows,
            cols: keep.len(),
        }
    }

    /// New alignment with redundant rows removed: scanning top to bottom,
    /// a row is dropped when its identity to an already-retained row
    /// exceeds `threshold`.
    #[must_use]
    pub fn strip_redundant(&self, threshold: f64) -> Self {
        let mut redundant = vec![false; self.rows];
        for row1 in 0..self.rows {
            if redundant[row1] {
                continue;
            }
            for row2 in (row1 + 1)..self.rows {
                if !redundant[row2] && self.row_identity(row1, row2) > threshold {
                    redundant[row2] = true;
                }
            }
        }

        let mut data = Vec::new();
        let mut names = Vec::new();
        for row in 0..self.rows {
            if !redundant[row] {
                data.extend_from_slice(self.sequence(row));
                names.push(self.names[row].clone());
            }
        }

        Self {
            rows: names.len(),
            cols: self.cols,
            data,
            names,
        }
    }

    /// Serializes the alignment back to FASTA text.
    #[must_use]
    pub fn to_fasta(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            out.push('>');
            out.push_str(&self.names[row]);
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(self.sequence(row)));
            out.push('\n');
        }
        out
    }
}
