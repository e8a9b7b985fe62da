//! ELF32 file header parsing.
//!
//! Decodes the 52-byte ELF32 file header from a raw byte slice using safe
//! field extraction via `from_le_bytes()`. No struct overlays, no
//! host-endianness assumptions.

use core::fmt;

/// ELF magic bytes: `\x7fELF`.
pub(crate) const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Size of the ELF32 file header (52 bytes).
pub const ELF32_EHDR_SIZE: usize = 52;

/// Read a little-endian `u16` from `data` at byte offset `off`.
///
/// # Panics
///
/// Panics if `off + 2 > data.len()`. Callers must bounds-check first.
pub(crate) fn le_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(*data[off..].first_chunk().unwrap())
}

/// Read a little-endian `u32` from `data` at byte offset `off`.
pub(crate) fn le_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(*data[off..].first_chunk().unwrap())
}

/// Errors that can occur when parsing an ELF32 file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// The file does not start with the ELF magic bytes.
    BadMagic,
    /// The input data is too short for the ELF32 file header.
    Truncated,
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "invalid ELF file (no header)"),
            Self::Truncated => write!(f, "invalid ELF file (too small for header)"),
        }
    }
}

/// Parsed ELF32 file header.
///
/// All fields after the 16-byte identification block, decoded from their
/// documented offsets. Nothing beyond the magic and the header length is
/// validated; in particular `e_shentsize` is decoded but never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf32Header {
    /// Object file type (`ET_REL`, `ET_EXEC`, ...).
    pub e_type: u16,
    /// Target machine architecture.
    pub e_machine: u16,
    /// Object file version.
    pub e_version: u32,
    /// Virtual address of the entry point.
    pub e_entry: u32,
    /// Offset of the program header table in the file.
    pub e_phoff: u32,
    /// Offset of the section header table in the file.
    pub e_shoff: u32,
    /// Processor-specific flags.
    pub e_flags: u32,
    /// Size of this header.
    pub e_ehsize: u16,
    /// Size of each program header entry.
    pub e_phentsize: u16,
    /// Number of program header entries.
    pub e_phnum: u16,
    /// Size of each section header entry (declared, not trusted).
    pub e_shentsize: u16,
    /// Number of section header entries.
    pub e_shnum: u16,
    /// Section header string table index.
    pub e_shstrndx: u16,
}

impl Elf32Header {
    /// Parse an ELF32 file header from raw bytes.
    ///
    /// The magic is checked before the length, so a short buffer that does
    /// not start with `\x7fELF` reports [`ElfError::BadMagic`] rather than
    /// [`ElfError::Truncated`].
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::BadMagic`] if the magic bytes are missing and
    /// [`ElfError::Truncated`] if fewer than 52 bytes are available.
    pub fn parse(data: &[u8]) -> Result<Self, ElfError> {
        if data.first_chunk::<4>() != Some(&ELF_MAGIC) {
            return Err(ElfError::BadMagic);
        }

        if data.len() < ELF32_EHDR_SIZE {
            return Err(ElfError::Truncated);
        }

        // Field offsets are safe because we checked len >= 52 above.
        Ok(Self {
            e_type: le_u16(data, 16),
            e_machine: le_u16(data, 18),
            e_version: le_u32(data, 20),
            e_entry: le_u32(data, 24),
            e_phoff: le_u32(data, 28),
            e_shoff: le_u32(data, 32),
            e_flags: le_u32(data, 36),
            e_ehsize: le_u16(data, 40),
            e_phentsize: le_u16(data, 42),
            e_phnum: le_u16(data, 44),
            e_shentsize: le_u16(data, 46),
            e_shnum: le_u16(data, 48),
            e_shstrndx: le_u16(data, 50),
        })
    }
}
