//! Alignment readers for FASTA and fodor formats.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use bio::io::fasta;

use crate::alignment::Alignment;
use crate::config::InputFormat;
use crate::types::CoevoError;

/// Read an alignment file in the given format.
pub fn read_alignment<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
) -> Result<Alignment, CoevoError> {
    match format {
        InputFormat::Fasta => read_fasta_alignment(path),
        InputFormat::Fodor => read_fodor_alignment(path),
    }
}

/// Read a FASTA-format alignment file using rust-bio.
pub fn read_fasta_alignment<P: AsRef<Path>>(path: P) -> Result<Alignment, CoevoError> {
    let file = File::open(path)?;
    read_fasta(file)
}

/// Read a FASTA-format alignment from any reader.
pub fn read_fasta<R: Read>(reader: R) -> Result<Alignment, CoevoError> {
    let reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| CoevoError::ParseError(e.to_string()))?;
        records.push((record.id().to_string(), record.seq().to_vec()));
    }

    Alignment::new(records)
}

/// Read a fodor-format alignment file: one `name<TAB>sequence` record per
/// line (runs of tabs/spaces collapse into one delimiter).
pub fn read_fodor_alignment<P: AsRef<Path>>(path: P) -> Result<Alignment, CoevoError> {
    let file = File::open(path)?;
    read_fodor(BufReader::new(file))
}

/// Read a fodor-format alignment from any buffered reader.
pub fn read_fodor<R: BufRead>(reader: R) -> Result<Alignment, CoevoError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(CoevoError::ParseError(format!(
                "fodor line {} does not contain two fields",
                index + 1
            )));
        }
        records.push((fields[0].to_string(), fields[1].as_bytes().to_vec()));
    }

    Alignment::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_read_fasta_basic() {
        let fasta_content = ">seq1 first sequence\nAC-T\n>seq2\nACGT\n";

        let temp_dir = env::temp_dir();
        let temp_file = temp_dir.join("coevo_test_fasta.fa");
        fs::write(&temp_file, fasta_content).unwrap();

        let msa = read_fasta_alignment(&temp_file).unwrap();
        assert_eq!(msa.rows(), 2);
        assert_eq!(msa.cols(), 4);
        assert_eq!(msa.names(), &["seq1", "seq2"]);
        assert_eq!(msa.sequence(0), b"AC-T");

        let _ = fs::remove_file(temp_file);
    }

    #[test]
    fn test_read_fasta_multiline_sequence() {
        let msa = read_fasta(&b">seq1\nACGT\nACGT\n>seq2\nTTTT\nAAAA\n"[..]).unwrap();
        assert_eq!(msa.rows(), 2);
        assert_eq!(msa.cols(), 8);
        assert_eq!(msa.sequence(0), b"ACGTACGT");
    }

    #[test]
    fn test_read_fasta_unequal_lengths_is_fatal() {
        let result = read_fasta(&b">seq1\nACGT\n>seq2\nAC\n"[..]);
        assert!(matches!(result, Err(CoevoError::InvalidAlignment(_))));
    }

    #[test]
    fn test_read_fasta_file_not_found() {
        let result = read_fasta_alignment("nonexistent_alignment.fa");
        match result {
            Err(CoevoError::IoError(_)) => {}
            _ => panic!("Expected IoError for missing file"),
        }
    }

    #[test]
    fn test_read_fodor_basic() {
        let msa = read_fodor(&b"seq1\tAC-T\nseq2\tACGT\n"[..]).unwrap();
        assert_eq!(msa.rows(), 2);
        assert_eq!(msa.names(), &["seq1", "seq2"]);
        assert_eq!(msa.sequence(0), b"AC-T");
    }

    #[test]
    fn test_read_fodor_collapses_delimiter_runs() {
        let msa = read_fodor(&b"seq1\t\t  AC-T\nseq2   ACGT\n"[..]).unwrap();
        assert_eq!(msa.rows(), 2);
        assert_eq!(msa.sequence(1), b"ACGT");
    }

    #[test]
    fn test_read_fodor_wrong_field_count() {
        let result = read_fodor(&b"seq1\tACGT\textra\n"[..]);
        match result {
            Err(CoevoError::ParseError(msg)) => assert!(msg.contains("line 1")),
            _ => panic!("Expected ParseError for three fields"),
        }
    }

    #[test]
    fn test_read_alignment_dispatches_on_format() {
        let temp_dir = env::temp_dir();
        let temp_file = temp_dir.join("coevo_test_fodor.txt");
        fs::write(&temp_file, "seq1\tACGT\nseq2\tACGA\n").unwrap();

        let msa = read_alignment(&temp_file, InputFormat::Fodor).unwrap();
        assert_eq!(msa.rows(), 2);

        let _ = fs::remove_file(temp_file);
    }
}
