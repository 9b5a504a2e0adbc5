//! # Coevo CLI - Command-Line Coevolution Scoring
//!
//! A command-line interface for ZNMI coevolution scoring of multiple
//! sequence alignments.
//!
//! ## Usage
//!
//! ```bash
//! # ZNMI scores with the reference thresholds
//! coevo -i family.fasta -o family.znmi.tsv
//!
//! # Gzip-compressed output (by extension)
//! coevo -i family.fasta -o family.znmi.tsv.gz
//!
//! # The gapped DAMI variant
//! coevo -i family.fasta -a zndami -o family.zndami.tsv
//!
//! # Plain NMI to stdout, fodor-format input
//! coevo -i family.fodor --input-format fodor -a nmi
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input alignment file
//! - `-o, --output <FILE>`: Output file (default: stdout); an existing
//!   file is never overwritten
//! - `-a, --algorithm <ALG>`: mi, nmi, znmi, zndami (default: znmi)
//! - `-f, --format <FORMAT>`: Output format: xyz or raster (default: xyz)
//! - `--input-format <FORMAT>`: fasta or fodor (default: fasta)
//! - `--min-entropy <NATS>`: Quality-filter entropy floor (default: 0.198515243)
//! - `--max-gap <FRACTION>`: Quality-filter gap ceiling (default: 0.1)
//! - `--count-gaps`: Tally gaps as ordinary symbols
//! - `--keep-negative`: Do not suppress negative MI/NMI values
//! - `-t, --threads <N>`: Worker threads (default: all cores)
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command};
use coevo_core::CoevoAnalyzer;
use coevo_core::config::{Algorithm, CoevoConfig, InputFormat, OutputFormat};
use coevo_core::output::{write_scores, write_scores_to_path};
use std::io::{self, BufWriter, Write};

/// Main entry point for the coevo CLI application.
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Parses command-line arguments, runs the configured scoring pipeline,
/// and writes the score matrix in the requested format.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("coevo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Coevolution scoring for multiple sequence alignments")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input alignment file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file, .gz for compressed (default: stdout)"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .value_name("ALG")
                .help("Scoring algorithm: mi, nmi, znmi, zndami")
                .default_value("znmi"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: xyz, raster")
                .default_value("xyz"),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .value_name("FORMAT")
                .help("Input format: fasta, fodor")
                .default_value("fasta"),
        )
        .arg(
            Arg::new("min-entropy")
                .long("min-entropy")
                .value_name("NATS")
                .help("Minimum column entropy for the quality filter"),
        )
        .arg(
            Arg::new("max-gap")
                .long("max-gap")
                .value_name("FRACTION")
                .help("Maximum column gap fraction for the quality filter"),
        )
        .arg(
            Arg::new("count-gaps")
                .long("count-gaps")
                .action(ArgAction::SetTrue)
                .help("Tally gap symbols as part of the alphabet"),
        )
        .arg(
            Arg::new("keep-negative")
                .long("keep-negative")
                .action(ArgAction::SetTrue)
                .help("Keep negative MI/NMI values instead of masking them"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let mut options = CoevoConfig {
        ignore_gaps: !matches.get_flag("count-gaps"),
        suppress_negative: !matches.get_flag("keep-negative"),
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    options.algorithm = match matches.get_one::<String>("algorithm").unwrap().as_str() {
        "mi" => Algorithm::Mi,
        "nmi" => Algorithm::Nmi,
        "znmi" => Algorithm::Znmi,
        "zndami" => Algorithm::Zndami,
        _ => return Err("Invalid algorithm".into()),
    };

    options.input_format = match matches.get_one::<String>("input-format").unwrap().as_str() {
        "fasta" => InputFormat::Fasta,
        "fodor" => InputFormat::Fodor,
        _ => return Err("Invalid input format".into()),
    };

    let output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "xyz" => OutputFormat::Xyz,
        "raster" => OutputFormat::Raster,
        _ => return Err("Invalid output format".into()),
    };

    if let Some(min_entropy) = matches.get_one::<String>("min-entropy") {
        options.min_entropy = min_entropy
            .parse()
            .map_err(|_| "Invalid minimum entropy")?;
    }

    if let Some(max_gap) = matches.get_one::<String>("max-gap") {
        options.max_gap_fraction = max_gap.parse().map_err(|_| "Invalid gap fraction")?;
    }

    if let Some(threads) = matches.get_one::<String>("threads") {
        options.num_threads = Some(threads.parse().map_err(|_| "Invalid thread count")?);
    }

    let quiet = options.quiet;
    let analyzer = CoevoAnalyzer::new(options)?;
    let results = analyzer.analyze_file(matches.get_one::<String>("input").unwrap())?;

    let counts = if let Some(output_file) = matches.get_one::<String>("output") {
        write_scores_to_path(output_file, &results.scores, output_format)?
    } else {
        let mut writer = BufWriter::new(io::stdout());
        let counts = write_scores(&mut writer, &results.scores, output_format)?;
        writer.flush()?;
        counts
    };

    if !quiet {
        eprintln!(
            "Notice: printed {} pairs while suppressing {} pairs of no_data",
            counts.printed, counts.suppressed
        );
    }

    Ok(())
}
