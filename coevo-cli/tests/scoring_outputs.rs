mod common;

use std::fs;
use std::io::Read;

use flate2::read::GzDecoder;
use insta::assert_snapshot;
use tempfile::TempDir;

use crate::common::{coevo, write_single_sequence_alignment, write_small_alignment};

#[test]
fn znmi_scores_match_hand_computation() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());
    let output = dir.path().join("scores.tsv");

    coevo(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--min-entropy",
        "0",
        "--max-gap",
        "1.0",
        "--keep-negative",
        "-q",
    ])
    .assert()
    .success();

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "i\tj\tscore");
    // The invariant column 0 has zero background variance, so only the
    // (1, 2) pair survives, at exactly sqrt(2).
    assert_eq!(lines.len(), 2);
    let fields: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(&fields[..2], &["1", "2"]);
    let score: f64 = fields[2].parse().unwrap();
    assert!((score - std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn default_thresholds_mask_the_invariant_column() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());

    let assert = coevo(&["-i", input.to_str().unwrap(), "-q"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // Column 0 falls below the reference entropy floor, and with only two
    // surviving columns every background distribution has a single value
    // (variance 0), so nothing survives the Z-transform.
    assert_eq!(stdout.trim_end(), "i\tj\tscore");
}

#[test]
fn single_sequence_alignment_yields_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_single_sequence_alignment(dir.path());

    let assert = coevo(&["-i", input.to_str().unwrap(), "-q"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_snapshot!(stdout.trim_end(), @"i	j	score");
}

#[test]
fn refuses_to_clobber_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());
    let output = dir.path().join("scores.tsv");
    fs::write(&output, "precious").unwrap();

    let result = coevo(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-q",
    ])
    .output()
    .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("refusing to clobber"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "precious");
}

#[test]
fn gzip_output_by_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());
    let output = dir.path().join("scores.tsv.gz");

    coevo(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-q",
    ])
    .assert()
    .success();

    let mut decoded = String::new();
    GzDecoder::new(fs::File::open(&output).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    assert!(decoded.starts_with("i\tj\tscore\n"));
}

#[test]
fn fodor_input_format() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("small.fodor");
    fs::write(&input, "s1\tAAT\ns2\tAAT\ns3\tATT\ns4\tATA\n").unwrap();

    let assert = coevo(&[
        "-i",
        input.to_str().unwrap(),
        "--input-format",
        "fodor",
        "-q",
    ])
    .assert()
    .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("i\tj\tscore\n"));
}

#[test]
fn raster_format_prints_dense_matrix() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());

    let assert = coevo(&["-i", input.to_str().unwrap(), "-f", "raster", "-q"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // 3 columns -> 3 raster rows, diagonal marked.
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.starts_with("id\t"));
    assert!(stdout.contains("null"));
}

#[test]
fn missing_input_fails() {
    let result = coevo(&["-i", "nonexistent_alignment.fa", "-q"])
        .output()
        .unwrap();
    assert!(!result.status.success());
}

#[test]
fn invalid_algorithm_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());

    let result = coevo(&["-i", input.to_str().unwrap(), "-a", "omes", "-q"])
        .output()
        .unwrap();
    assert!(!result.status.success());
}

#[test]
fn notice_reports_printed_and_suppressed_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_small_alignment(dir.path());

    let result = coevo(&[
        "-i",
        input.to_str().unwrap(),
        "--min-entropy",
        "0",
        "--max-gap",
        "1.0",
    ])
    .output()
    .unwrap();
    assert!(result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Notice: printed 1 pairs while suppressing 2 pairs of no_data"));
}
