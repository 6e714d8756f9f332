// Test-only protobuf wire decoder.
//
// Handles tagged scalar and length-delimited fields. Array/map columns are
// not length-prefixed by byte size, so streams containing them are checked
// byte by byte instead.
#![allow(dead_code)]

use pbframe_core::checksum::compute_checksum;
use pbframe_core::constants::reserved_tags;
use pbframe_core::wire::{zigzag_decode64, WireType};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Varint(u64),
    Fixed64(u64),
    Bytes(Vec<u8>),
    Fixed32(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub number: u64,
    pub value: FieldValue,
}

impl Field {
    pub fn varint(&self) -> u64 {
        match self.value {
            FieldValue::Varint(v) => v,
            ref other => panic!("field {} is not a varint: {:?}", self.number, other),
        }
    }

    pub fn sint64(&self) -> i64 {
        zigzag_decode64(self.varint())
    }

    pub fn double(&self) -> f64 {
        match self.value {
            FieldValue::Fixed64(v) => f64::from_bits(v),
            ref other => panic!("field {} is not fixed64: {:?}", self.number, other),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.value {
            FieldValue::Bytes(v) => v,
            other => panic!("field {} is not length-delimited: {:?}", self.number, other),
        }
    }
}

pub fn decode_varint(buf: &mut &[u8]) -> u64 {
    let mut value = 0u64;
    let mut shift = 0;
    loop {
        let bytes: &[u8] = *buf;
        let (byte, rest) = bytes.split_first().expect("truncated varint");
        *buf = rest;
        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return value;
        }
        shift += 7;
        assert!(shift < 70, "varint too long");
    }
}

pub fn decode_fields(mut data: &[u8]) -> Vec<Field> {
    let mut out = Vec::new();
    while !data.is_empty() {
        let (number, wt) = WireType::split_tag(decode_varint(&mut data));
        let wire_type = WireType::try_from(wt).expect("unknown wire type");
        let value = match wire_type {
            WireType::Varint => FieldValue::Varint(decode_varint(&mut data)),
            WireType::Fixed64 => {
                let (raw, rest) = data.split_at(8);
                data = rest;
                FieldValue::Fixed64(u64::from_le_bytes(raw.try_into().unwrap()))
            }
            WireType::Fixed32 => {
                let (raw, rest) = data.split_at(4);
                data = rest;
                FieldValue::Fixed32(u32::from_le_bytes(raw.try_into().unwrap()))
            }
            WireType::LengthDelimited => {
                let len = decode_varint(&mut data) as usize;
                let (raw, rest) = data.split_at(len);
                data = rest;
                FieldValue::Bytes(raw.to_vec())
            }
        };
        out.push(Field { number, value });
    }
    out
}

/// Fields split into records (each ending at a RECORD_END field) plus the
/// footer fields that follow the last record.
pub struct DecodedStream {
    pub records: Vec<Vec<Field>>,
    pub record_checksums: Vec<u32>,
    pub total_records: Option<i64>,
    pub stream_checksum: Option<u32>,
}

pub fn decode_stream(data: &[u8]) -> DecodedStream {
    let mut stream = DecodedStream {
        records: Vec::new(),
        record_checksums: Vec::new(),
        total_records: None,
        stream_checksum: None,
    };
    let mut current = Vec::new();

    for field in decode_fields(data) {
        match field.number as u32 {
            reserved_tags::RECORD_END => {
                stream.record_checksums.push(field.varint() as u32);
                stream.records.push(std::mem::take(&mut current));
            }
            reserved_tags::META_TOTAL_RECORDS => stream.total_records = Some(field.sint64()),
            reserved_tags::META_CHECKSUM => stream.stream_checksum = Some(field.varint() as u32),
            _ => current.push(field),
        }
    }
    assert!(current.is_empty(), "trailing fields without RECORD_END");
    stream
}

/// CRC32C over the concatenation of `parts`.
pub fn crc_of(parts: &[&[u8]]) -> u32 {
    let joined: Vec<u8> = parts.concat();
    compute_checksum(&joined)
}

/// Stream checksum for a list of record checksums.
pub fn stream_crc_of(record_checksums: &[u32]) -> u32 {
    let raw: Vec<u8> = record_checksums
        .iter()
        .flat_map(|c| c.to_le_bytes())
        .collect();
    compute_checksum(&raw)
}
