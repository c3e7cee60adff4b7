//! Byte order of multi-byte scalars.
//!
//! Endianness is chosen per declaration at compile time: every [`crate::Item`] is generic over
//! an [`Endian`] marker, and the marker is passed down to each constituent. Only multi-byte
//! scalars read it; single bytes and structural framing are identical under both orders.

/// Runtime view of a byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

/// Compile-time byte order marker.
pub trait Endian: 'static {
    const ORDER: Endianness;
}

/// Most significant byte first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl Endian for BigEndian {
    const ORDER: Endianness = Endianness::Big;
}

/// Least significant byte first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

impl Endian for LittleEndian {
    const ORDER: Endianness = Endianness::Little;
}
