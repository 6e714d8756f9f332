use num_enum::TryFromPrimitive;

/// Protobuf wire types carried in the low 3 bits of a tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireType {
    Varint          = 0,
    Fixed64         = 1,
    LengthDelimited = 2,
    Fixed32         = 5,
}

impl WireType {
    pub const BITS: u32 = 3;
    pub const MASK: u32 = (1 << Self::BITS) - 1;

    /// Build the tag value `(field_number << 3) | wire_type`.
    ///
    /// Computed in 64 bits so field numbers past the protobuf limit still
    /// produce a well-defined (if non-conforming) tag.
    #[inline(always)]
    pub const fn make_tag(self, field_number: u32) -> u64 {
        ((field_number as u64) << Self::BITS) | self as u64
    }

    /// Split a decoded tag back into `(field_number, wire_type bits)`.
    #[inline(always)]
    pub const fn split_tag(tag: u64) -> (u64, u8) {
        (tag >> Self::BITS, (tag & Self::MASK as u64) as u8)
    }
}
