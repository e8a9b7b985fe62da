//! Command-line interface definitions for elfdwt.

use clap::Parser;
use std::path::PathBuf;

/// Vector-table checksum patcher for 32-bit little-endian ELF files.
///
/// Sums the first 7 words of the section at index 1 and stores the value
/// that makes the 8-word window sum to zero as the 8th word, overwriting
/// the input file in place.
#[derive(Parser)]
#[command(name = "elfdwt", version, about)]
pub struct Cli {
    /// The ELF file to patch (modified in place).
    pub file: PathBuf,

    /// Suppress everything except errors and the final summary.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print per-stage diagnostics.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
