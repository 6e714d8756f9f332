//! constants.rs
//! Reserved field numbers, checksum seed and buffer sizing defaults.

/// Reserved field numbers for the framing trailers.
///
/// These sit at the top of the field-number space used by the deployed
/// format. Caller fields must never use them; this is not validated.
pub mod reserved_tags {
    /// Terminates one record; value is the record's CRC32C.
    pub const RECORD_END: u32 = 33_553_408;
    /// Stream footer: number of records written (sint64).
    pub const META_TOTAL_RECORDS: u32 = 33_554_430;
    /// Stream footer: CRC32C over all record checksums (uint32).
    pub const META_CHECKSUM: u32 = 33_554_431;

    pub const ALL: [u32; 3] = [RECORD_END, META_TOTAL_RECORDS, META_CHECKSUM];

    #[inline]
    pub const fn is_reserved(field_number: u32) -> bool {
        field_number == RECORD_END
            || field_number == META_TOTAL_RECORDS
            || field_number == META_CHECKSUM
    }
}

/// Seed of every checksum accumulator (CRC32C of the empty input).
pub const CRC_INIT: u32 = 0;

/// Largest field number representable in a protobuf tag.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Defaults when the config leaves a value out.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024; // 4 KiB
pub const DEFAULT_BLOCK_SIZE: usize = 10 * 1024 * 1024; // 10 MiB
/// Block size sanity bound (256 MiB).
pub const MAX_BLOCK_SIZE: usize = 256 * 1024 * 1024;
