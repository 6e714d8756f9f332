//! checksum.rs
//!
//! Incremental CRC32C (Castagnoli) accumulator.
//!
//! The writer feeds this with *logical* field content, not wire bytes:
//!
//! ```text
//! field_number  (u32 LE, 4 bytes)
//! value         (native width, LE: i64 = 8, f64 = 8, bool = 1)
//! payload bytes (strings, verbatim)
//! ```
//!
//! A varint-encoded `42` and a ten-byte varint of the same number would fold
//! identically; the checksum is independent of encoding width.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::CRC_INIT;

/// One-shot CRC32C over `data`.
#[inline]
pub fn compute_checksum(data: &[u8]) -> u32 {
    crc32c::crc32c(data)
}

/// Running CRC32C. `Checksum::default()` is the empty-input value (0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: u32,
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum {
    #[inline]
    pub const fn new() -> Self {
        Self { value: CRC_INIT }
    }

    /// Current CRC32C of everything folded so far.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn reset(&mut self) {
        self.value = CRC_INIT;
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.value = crc32c::crc32c_append(self.value, data);
    }

    #[inline]
    pub fn update_field_number(&mut self, field_number: u32) {
        self.update_u32(field_number);
    }

    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        let mut raw = [0u8; 4];
        LittleEndian::write_u32(&mut raw, value);
        self.update(&raw);
    }

    #[inline]
    pub fn update_i64(&mut self, value: i64) {
        let mut raw = [0u8; 8];
        LittleEndian::write_i64(&mut raw, value);
        self.update(&raw);
    }

    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        let mut raw = [0u8; 8];
        LittleEndian::write_f64(&mut raw, value);
        self.update(&raw);
    }

    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update(&[value as u8]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_init() {
        let c = Checksum::new();
        assert_eq!(c.value(), CRC_INIT);
        assert_eq!(compute_checksum(&[]), CRC_INIT);
    }

    #[test]
    fn known_vector() {
        // RFC 3720 / iSCSI check value
        assert_eq!(compute_checksum(b"123456789"), 0xE306_9283);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut c = Checksum::new();
        c.update(b"1234");
        c.update(b"56789");
        assert_eq!(c.value(), compute_checksum(b"123456789"));
    }

    #[test]
    fn typed_updates_fold_le_bytes() {
        let mut c = Checksum::new();
        c.update_field_number(1);
        c.update_i64(42);
        c.update_bool(true);
        c.update_f64(0.5);

        let mut raw = Vec::new();
        raw.extend_from_slice(&1u32.to_le_bytes());
        raw.extend_from_slice(&42i64.to_le_bytes());
        raw.push(1);
        raw.extend_from_slice(&0.5f64.to_le_bytes());

        assert_eq!(c.value(), compute_checksum(&raw));
    }

    #[test]
    fn reset_returns_to_init() {
        let mut c = Checksum::new();
        c.update(b"abc");
        assert_ne!(c.value(), CRC_INIT);
        c.reset();
        assert_eq!(c, Checksum::default());
    }
}
