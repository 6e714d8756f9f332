//! Protobuf wire encoders.
//!
//! Every function appends to a `BufMut`; none of them touch checksums.
//! Checksum folding is the writer's business and differs per operation.

use bytes::BufMut;

use crate::wire::types::WireType;

/// Encode an unsigned integer as a varint (7 payload bits per byte).
#[inline]
pub fn encode_varint(buf: &mut impl BufMut, mut value: u64) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;

        if value == 0 {
            buf.put_u8(byte);
            break;
        }
        buf.put_u8(byte | 0x80); // continuation bit
    }
}

#[inline]
pub fn encode_varint32(buf: &mut impl BufMut, value: u32) {
    encode_varint(buf, u64::from(value));
}

/// ZigZag: 0 => 0, -1 => 1, 1 => 2, -2 => 3, ...
#[inline(always)]
pub const fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline(always)]
pub const fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Number of bytes `encode_varint` emits for `value`.
#[inline]
pub const fn encoded_len_varint(value: u64) -> usize {
    // 1 byte per started group of 7 bits, minimum 1.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

#[inline]
pub fn encode_tag(buf: &mut impl BufMut, field_number: u32, wire_type: WireType) {
    encode_varint(buf, wire_type.make_tag(field_number));
}

// ---------------------------------------------------------------------------
// Payload-only encoders
// ---------------------------------------------------------------------------

#[inline]
pub fn encode_sint64_no_tag(buf: &mut impl BufMut, value: i64) {
    encode_varint(buf, zigzag_encode64(value));
}

#[inline]
pub fn encode_bool_no_tag(buf: &mut impl BufMut, value: bool) {
    buf.put_u8(value as u8);
}

#[inline]
pub fn encode_double_no_tag(buf: &mut impl BufMut, value: f64) {
    buf.put_f64_le(value);
}

#[inline]
pub fn encode_uint32_no_tag(buf: &mut impl BufMut, value: u32) {
    encode_varint32(buf, value);
}

/// Varint length prefix followed by the raw bytes.
#[inline]
pub fn encode_bytes_no_tag(buf: &mut impl BufMut, value: &[u8]) {
    encode_varint(buf, value.len() as u64);
    buf.put_slice(value);
}

// ---------------------------------------------------------------------------
// Tagged encoders
// ---------------------------------------------------------------------------

#[inline]
pub fn encode_sint64(buf: &mut impl BufMut, field_number: u32, value: i64) {
    encode_tag(buf, field_number, WireType::Varint);
    encode_sint64_no_tag(buf, value);
}

#[inline]
pub fn encode_bool(buf: &mut impl BufMut, field_number: u32, value: bool) {
    encode_tag(buf, field_number, WireType::Varint);
    encode_bool_no_tag(buf, value);
}

#[inline]
pub fn encode_double(buf: &mut impl BufMut, field_number: u32, value: f64) {
    encode_tag(buf, field_number, WireType::Fixed64);
    encode_double_no_tag(buf, value);
}

#[inline]
pub fn encode_uint32(buf: &mut impl BufMut, field_number: u32, value: u32) {
    encode_tag(buf, field_number, WireType::Varint);
    encode_uint32_no_tag(buf, value);
}

#[inline]
pub fn encode_bytes(buf: &mut impl BufMut, field_number: u32, value: &[u8]) {
    encode_tag(buf, field_number, WireType::LengthDelimited);
    encode_bytes_no_tag(buf, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_boundaries() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00][..]),
            (1, &[0x01][..]),
            (127, &[0x7F][..]),
            (128, &[0x80, 0x01][..]),
            (300, &[0xAC, 0x02][..]),
            (16_383, &[0xFF, 0x7F][..]),
            (16_384, &[0x80, 0x80, 0x01][..]),
        ];
        for (value, expected) in cases {
            let mut buf: Vec<u8> = Vec::new();
            encode_varint(&mut buf, *value);
            assert_eq!(&buf[..], *expected, "value {}", value);
            assert_eq!(encoded_len_varint(*value), expected.len());
        }
    }

    #[test]
    fn varint_max_is_ten_bytes() {
        let mut buf: Vec<u8> = Vec::new();
        encode_varint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), crate::constants::MAX_VARINT_LEN);
        assert_eq!(buf[9], 0x01);
        assert_eq!(encoded_len_varint(u64::MAX), 10);
    }

    #[test]
    fn zigzag_mapping() {
        assert_eq!(zigzag_encode64(0), 0);
        assert_eq!(zigzag_encode64(-1), 1);
        assert_eq!(zigzag_encode64(1), 2);
        assert_eq!(zigzag_encode64(-2), 3);
        assert_eq!(zigzag_encode64(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode64(i64::MIN), u64::MAX);

        for v in [0, 1, -1, 42, -42, i64::MAX, i64::MIN] {
            assert_eq!(zigzag_decode64(zigzag_encode64(v)), v);
        }
    }

    #[test]
    fn tagged_sint64_matches_protobuf() {
        // field 1, sint64 42 -> tag 0x08, zigzag(42) = 84 = 0x54
        let mut buf: Vec<u8> = Vec::new();
        encode_sint64(&mut buf, 1, 42);
        assert_eq!(buf, vec![0x08, 0x54]);
    }

    #[test]
    fn tagged_double_is_fixed64_le() {
        let mut buf: Vec<u8> = Vec::new();
        encode_double(&mut buf, 2, 1.0);
        assert_eq!(buf[0], 0x11);
        assert_eq!(&buf[1..], &1.0f64.to_le_bytes());
    }

    #[test]
    fn tagged_bytes_has_length_prefix() {
        let mut buf: Vec<u8> = Vec::new();
        encode_bytes(&mut buf, 3, b"abc");
        assert_eq!(buf, vec![0x1A, 0x03, b'a', b'b', b'c']);
    }
}
