use std::io::{BufRead, Write};

use crate::constants::XYZ_HEADER;
use crate::matrix::PairMatrix;
use crate::output::ScoreCounts;
use crate::types::CoevoError;

/// One parsed line of the sparse XYZ format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair {
    pub i: usize,
    pub j: usize,
    pub score: f64,
}

/// Write scores in XYZ format: a fixed `i\tj\tscore` header, then one line
/// per surviving pair in ascending `(i, j)` order with `i < j`. Masked
/// pairs are omitted entirely.
pub fn write_xyz_format<W: Write>(
    writer: &mut W,
    scores: &PairMatrix<Option<f64>>,
) -> Result<ScoreCounts, CoevoError> {
    writeln!(writer, "{XYZ_HEADER}")?;

    let mut counts = ScoreCounts::default();
    for (i, j, value) in scores.pairs() {
        match value {
            Some(score) => {
                writeln!(writer, "{i}\t{j}\t{score}")?;
                counts.printed += 1;
            }
            None => counts.suppressed += 1,
        }
    }
    Ok(counts)
}

/// Parse XYZ-format scores back into a pair list. Pairs absent from the
/// input were masked at write time; callers that need a matrix treat them
/// as `None`.
pub fn read_xyz_format<R: BufRead>(reader: R) -> Result<Vec<ScoredPair>, CoevoError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| CoevoError::ParseError("empty XYZ input".to_string()))?;
    if header != XYZ_HEADER {
        return Err(CoevoError::ParseError(format!(
            "unexpected XYZ header: '{header}'"
        )));
    }

    let mut pairs = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(CoevoError::ParseError(format!(
                "XYZ line {} does not contain three fields",
                index + 2
            )));
        }

        let parse_error =
            |what: &str| CoevoError::ParseError(format!("XYZ line {}: bad {what}", index + 2));
        pairs.push(ScoredPair {
            i: fields[0].parse().map_err(|_| parse_error("column index"))?,
            j: fields[1].parse().map_err(|_| parse_error("column index"))?,
            score: fields[2].parse().map_err(|_| parse_error("score"))?,
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn score_matrix(dim: usize, values: &[(usize, usize, f64)]) -> PairMatrix<Option<f64>> {
        let mut matrix = PairMatrix::new(dim);
        for &(i, j, value) in values {
            matrix.set(i, j, Some(value));
        }
        matrix
    }

    #[test]
    fn test_write_xyz_format_omits_masked_pairs() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let scores = score_matrix(3, &[(0, 1, 0.5), (1, 2, -0.3)]);
        let counts = write_xyz_format(&mut cursor, &scores).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "i\tj\tscore\n0\t1\t0.5\n1\t2\t-0.3\n");
        assert_eq!(counts.printed, 2);
        assert_eq!(counts.suppressed, 1);
    }

    #[test]
    fn test_write_xyz_format_all_masked_is_header_only() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let scores: PairMatrix<Option<f64>> = PairMatrix::new(4);
        let counts = write_xyz_format(&mut cursor, &scores).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "i\tj\tscore\n");
        assert_eq!(counts.printed, 0);
        assert_eq!(counts.suppressed, 6);
    }

    #[test]
    fn test_round_trip_with_suppression_yields_single_pair() {
        // Suppression on: the negative pair (1,2) and the undefined pair
        // (0,2) are both masked before writing.
        let mut scores = score_matrix(3, &[(0, 1, 0.5)]);
        scores.set(0, 2, None);
        scores.set(1, 2, None);

        let mut buffer = Vec::new();
        write_xyz_format(&mut Cursor::new(&mut buffer), &scores).unwrap();

        let pairs = read_xyz_format(&buffer[..]).unwrap();
        assert_eq!(
            pairs,
            vec![ScoredPair {
                i: 0,
                j: 1,
                score: 0.5
            }]
        );
    }

    #[test]
    fn test_read_xyz_format_rejects_bad_header() {
        let result = read_xyz_format(&b"a\tb\tc\n0\t1\t0.5\n"[..]);
        assert!(matches!(result, Err(CoevoError::ParseError(_))));
    }

    #[test]
    fn test_read_xyz_format_rejects_malformed_line() {
        let result = read_xyz_format(&b"i\tj\tscore\n0\t1\n"[..]);
        match result {
            Err(CoevoError::ParseError(msg)) => assert!(msg.contains("line 2")),
            _ => panic!("Expected ParseError"),
        }

        let result = read_xyz_format(&b"i\tj\tscore\n0\tx\t0.5\n"[..]);
        assert!(matches!(result, Err(CoevoError::ParseError(_))));
    }

    #[test]
    fn test_read_xyz_format_empty_input() {
        assert!(matches!(
            read_xyz_format(&b""[..]),
            Err(CoevoError::ParseError(_))
        ));
    }
}
