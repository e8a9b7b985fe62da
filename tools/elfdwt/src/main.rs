//! Vector-table checksum patcher for 32-bit little-endian ELF files.
//!
//! Usage: `elfdwt <FILE>`
//!
//! Reads the whole file, validates it as a little-endian ELF32 whose first
//! real section (index 1, after the reserved null entry) is a `progbits`
//! vector table, sums the table's first 7 words, stores the negated sum as
//! the 8th word, and writes the file back in place. After a successful run
//! the 8-word window sums to 0 mod 2^32.
//!
//! Exit code 0 on success, nonzero on any argument, validation, or I/O
//! failure. Nothing is written unless validation passed in full.

mod checksum;
mod cli;
mod patch;
mod verbose;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::verbose::{dprintln, vprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    dprintln!("ELFdwt for little endian");

    let mut data = std::fs::read(&cli.file)
        .with_context(|| format!("could not open file {}", cli.file.display()))?;
    if data.is_empty() {
        bail!("could not open file {} (file is empty)", cli.file.display());
    }
    vprintln!("read {} bytes from {}", data.len(), cli.file.display());

    let report = patch::patch_vector_checksum(&mut data)
        .with_context(|| format!("validating {}", cli.file.display()))?;

    vprintln!("vector table at file offset 0x{:08x}", report.section_offset);
    dprintln!(
        "Checksum over 0x{:08x}..0x{:08x}: 0x{:08x}",
        report.section_offset,
        report.section_offset + checksum::CHECKSUM_OFFSET,
        report.checksum
    );

    std::fs::write(&cli.file, &data)
        .with_context(|| format!("writing {}", cli.file.display()))?;

    println!("Processing completed, success");
    Ok(())
}
