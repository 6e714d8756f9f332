//! Protobuf wire encoding primitives.
//!
//! Responsibilities:
//! - Varint, zigzag, fixed-width and length-delimited encoders
//! - Tag construction
//!
//! Non-responsibilities:
//! - Checksums
//! - Record / stream framing
//! - Decoding

pub mod types;
pub mod encode;

pub use types::WireType;
pub use encode::{
    encode_varint,
    encode_varint32,
    encoded_len_varint,
    zigzag_decode64,
    zigzag_encode64,
};
