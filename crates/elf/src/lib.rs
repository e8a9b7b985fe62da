//! Minimal ELF32 parser for the elfdwt checksum patcher.
//!
//! Parses the ELF32 file header and section header entries from raw byte
//! slices using safe field extraction (`from_le_bytes`). No unsafe code,
//! no allocations.
//!
//! The parser is deliberately permissive: beyond the magic bytes and the
//! header length it validates nothing. The ELF class byte, data encoding,
//! machine type, and `e_shentsize` are all ignored, and section headers are
//! read with the fixed 40-byte ELF32 stride. Callers that need stricter
//! guarantees (section table bounds, section types) perform those checks
//! themselves on top of [`ElfFile::section`].
//!
//! # Usage
//!
//! ```
//! use elfdwt_elf::ElfFile;
//!
//! fn first_real_section(data: &[u8]) {
//!     let elf = ElfFile::parse(data).expect("valid ELF");
//!     // Index 0 is the reserved null entry; index 1 is the first real section.
//!     if let Some(section) = elf.section(1) {
//!         let _ = (section.sh_type, section.sh_offset);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod file;
pub mod header;
pub mod section;

pub use file::ElfFile;
pub use header::{ELF32_EHDR_SIZE, Elf32Header, ElfError};
pub use section::{ELF32_SHDR_SIZE, Elf32SectionHeader, SHT_NULL, SHT_PROGBITS};
