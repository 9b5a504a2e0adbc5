#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Builds a `coevo` command with the given arguments.
pub fn coevo(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("coevo").unwrap();
    cmd.args(args);
    cmd
}

/// Writes the 4 x 3 hand-checkable alignment to `dir` and returns its
/// path. Column 0 is invariant, columns 1 and 2 co-vary weakly.
pub fn write_small_alignment(dir: &Path) -> PathBuf {
    let path = dir.join("small.fasta");
    fs::write(&path, ">s1\nAAT\n>s2\nAAT\n>s3\nATT\n>s4\nATA\n").unwrap();
    path
}

/// Writes a single-sequence alignment; every pair it produces is masked.
pub fn write_single_sequence_alignment(dir: &Path) -> PathBuf {
    let path = dir.join("single.fasta");
    fs::write(&path, ">only\nACGT\n").unwrap();
    path
}
