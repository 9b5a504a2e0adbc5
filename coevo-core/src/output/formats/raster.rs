use std::io::Write;

use crate::matrix::PairMatrix;
use crate::output::ScoreCounts;
use crate::types::CoevoError;

/// Write scores as a dense matrix dump, one alignment column per row.
/// Masked cells print as `null`, the (unstored) diagonal as `id`. Meant
/// for eyeballing small alignments, not for machine consumption.
pub fn write_raster_format<W: Write>(
    writer: &mut W,
    scores: &PairMatrix<Option<f64>>,
) -> Result<ScoreCounts, CoevoError> {
    let dim = scores.dim();
    let mut counts = ScoreCounts::default();

    for row in 0..dim {
        for col in 0..dim {
            if col > 0 {
                write!(writer, "\t")?;
            }
            if row == col {
                write!(writer, "id")?;
            } else {
                match scores.get(row, col) {
                    Some(score) => {
                        write!(writer, "{score:.9e}")?;
                        if row < col {
                            counts.printed += 1;
                        }
                    }
                    None => {
                        write!(writer, "null")?;
                        if row < col {
                            counts.suppressed += 1;
                        }
                    }
                }
            }
        }
        writeln!(writer)?;
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_raster_layout() {
        let mut scores: PairMatrix<Option<f64>> = PairMatrix::new(2);
        scores.set(0, 1, Some(0.5));

        let mut buffer = Vec::new();
        let counts = write_raster_format(&mut Cursor::new(&mut buffer), &scores).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "id\t5.000000000e-1\n5.000000000e-1\tid\n");
        assert_eq!(counts.printed, 1);
        assert_eq!(counts.suppressed, 0);
    }

    #[test]
    fn test_raster_masked_cells_print_null() {
        let scores: PairMatrix<Option<f64>> = PairMatrix::new(2);

        let mut buffer = Vec::new();
        let counts = write_raster_format(&mut Cursor::new(&mut buffer), &scores).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "id\tnull\nnull\tid\n");
        assert_eq!(counts.suppressed, 1);
    }
}
