//! ELF32 file view.
//!
//! Provides [`ElfFile`] as the entry point for reading an ELF32 binary: a
//! borrowed view over the raw data plus the parsed file header, with
//! bounds-checked access to individual section headers.

use crate::header::{Elf32Header, ElfError};
use crate::section::{ELF32_SHDR_SIZE, Elf32SectionHeader};

/// A parsed ELF32 file, holding a reference to the raw data and the parsed header.
#[derive(Debug, Clone, Copy)]
pub struct ElfFile<'a> {
    data: &'a [u8],
    header: Elf32Header,
}

impl<'a> ElfFile<'a> {
    /// Parse an ELF32 file from raw bytes.
    ///
    /// Only the magic bytes and the file header length are validated; see
    /// [`Elf32Header::parse`]. The section header table is not checked
    /// against the file size here — use [`ElfFile::section_table_end`].
    ///
    /// # Errors
    ///
    /// Returns [`ElfError`] if the magic is missing or the data is too
    /// short for the file header.
    pub fn parse(data: &'a [u8]) -> Result<Self, ElfError> {
        let header = Elf32Header::parse(data)?;
        Ok(Self { data, header })
    }

    /// Returns the parsed ELF32 file header.
    #[must_use]
    pub fn header(&self) -> &Elf32Header {
        &self.header
    }

    /// Returns the file offset one past the declared section header table.
    ///
    /// Computed as `e_shoff + e_shnum * 40` in 64-bit arithmetic, so the
    /// result cannot wrap for any combination of header fields. The table
    /// fits in the file iff this is `<= data.len()`.
    #[must_use]
    pub fn section_table_end(&self) -> u64 {
        u64::from(self.header.e_shoff)
            + u64::from(self.header.e_shnum) * ELF32_SHDR_SIZE as u64
    }

    /// Returns the section header at the given 0-based index.
    ///
    /// Returns `None` if the index is not below `e_shnum` or the entry does
    /// not lie fully within the file data. Entries are located with the
    /// fixed 40-byte ELF32 stride, ignoring `e_shentsize`.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<Elf32SectionHeader> {
        if index >= usize::from(self.header.e_shnum) {
            return None;
        }
        let offset = u64::from(self.header.e_shoff) + index as u64 * ELF32_SHDR_SIZE as u64;
        if offset + ELF32_SHDR_SIZE as u64 > self.data.len() as u64 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "offset < data.len() was checked above, so it fits in usize"
        )]
        let offset = offset as usize;
        Some(Elf32SectionHeader::parse(self.data, offset))
    }

    /// Returns the underlying raw ELF data.
    #[must_use]
    pub fn raw_data(&self) -> &'a [u8] {
        self.data
    }
}
