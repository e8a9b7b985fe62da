//! The vector-table checksum window.
//!
//! The window is the first 8 words (32 bytes) of the target section: 7 data
//! words followed by 1 checksum word. The checksum is the two's-complement
//! negation of the wrapping sum of the data words, so the whole window sums
//! to 0 mod 2^32. A plain additive sum, not a CRC.

/// Number of data words covered by the checksum.
pub const VECTOR_WORDS: usize = 7;

/// Byte offset of the checksum slot within the window (the 8th word).
pub const CHECKSUM_OFFSET: usize = VECTOR_WORDS * 4;

/// Total size of the checksum window in bytes (data words + checksum word).
pub const WINDOW_SIZE: usize = CHECKSUM_OFFSET + 4;

/// Read the 7 little-endian data words starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 28 > data.len()`. Callers must bounds-check first;
/// the validator guarantees room for the full 32-byte window.
pub fn read_vector_words(data: &[u8], offset: usize) -> [u32; VECTOR_WORDS] {
    let mut words = [0u32; VECTOR_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        let at = offset + i * 4;
        *word = u32::from_le_bytes(*data[at..].first_chunk().unwrap());
    }
    words
}

/// Compute the checksum over the data words.
///
/// `0 - (w0 + w1 + ... + w6)` with unsigned 32-bit wraparound at every step.
#[must_use]
pub fn vector_checksum(words: &[u32; VECTOR_WORDS]) -> u32 {
    words
        .iter()
        .fold(0u32, |sum, word| sum.wrapping_add(*word))
        .wrapping_neg()
}

/// Store `checksum` little-endian at `offset`, touching exactly 4 bytes.
///
/// # Panics
///
/// Panics if `offset + 4 > data.len()`. Callers must bounds-check first.
pub fn write_checksum(data: &mut [u8], offset: usize, checksum: u32) {
    data[offset..offset + 4].copy_from_slice(&checksum.to_le_bytes());
}
