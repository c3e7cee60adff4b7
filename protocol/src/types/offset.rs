//! Integers stored relative to a fixed base.
//!
//! [`Offset<D, OFF>`] decodes to a `D` but stores `value - OFF` on the wire, in the footprint
//! of a `D`. `Offset<u16, 2000>` stores the year 2024 as 24.

use crate::{Decl, Endian, ErrorRecord, Integer, Item, Mark, Reader};
use bytes::BufMut;
use core::marker::PhantomData;

/// A `D` encoded as its distance from `OFF`.
///
/// Encoding panics if `value - OFF` is not representable as a `D`. Decoding fails with
/// [`Mark::OutOfBounds`] (at the offset of the integer) if `raw + OFF` is not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset<D, const OFF: i128>(PhantomData<D>);

impl<D: Integer, const OFF: i128> Decl for Offset<D, OFF> {
    type Value = D;
    const MIN_SIZE: usize = D::MIN_SIZE;
    const MAX_SIZE: usize = D::MAX_SIZE;
}

impl<E, D, const OFF: i128> Item<E> for Offset<D, OFF>
where
    E: Endian,
    D: Integer + Item<E>,
{
    #[inline]
    fn encode_size(value: &D) -> usize {
        D::encode_size(value)
    }

    fn write(value: &D, buf: &mut impl BufMut) {
        let raw = value
            .to_i128()
            .checked_sub(OFF)
            .and_then(D::from_i128)
            .expect("value minus offset is not representable");
        D::write(&raw, buf);
    }

    fn read(reader: &mut Reader<'_>) -> Result<D, ErrorRecord> {
        let start = reader.offset();
        let raw = D::read(reader)?;
        raw.to_i128()
            .checked_add(OFF)
            .and_then(D::from_i128)
            .ok_or(ErrorRecord::new(Mark::OutOfBounds, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian};

    type Year = Offset<u16, 2000>;
    type Trim = Offset<i8, -10>;

    #[test]
    fn test_round_trip() {
        let encoded = <Year as Item<BigEndian>>::encode(&2024);
        assert_eq!(encoded, &[0x00, 24][..]);
        assert_eq!(
            <Year as Item<LittleEndian>>::encode(&2024),
            &[24, 0x00][..]
        );
        let decoded = <Year as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.value, 2024);
        assert_eq!(decoded.used, 2);

        let encoded = <Trim as Item<BigEndian>>::encode(&-128);
        assert_eq!(encoded, &[(-118i8) as u8][..]);
        assert_eq!(
            <Trim as Item<BigEndian>>::deserialize(&encoded).unwrap().value,
            -128
        );
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Year::MIN_SIZE, 2);
        assert_eq!(Year::MAX_SIZE, 2);
        assert!(!Year::GREEDY);
    }

    #[test]
    fn test_overflow_on_read() {
        // 0xFFFF + 2000 does not fit a u16.
        assert_eq!(
            <Year as Item<BigEndian>>::deserialize(&[0xFF, 0xFF]),
            Err(ErrorRecord::new(Mark::OutOfBounds, 0))
        );

        // -125 - 10 does not fit an i8; the offset points at the integer.
        assert_eq!(
            <(u8, Trim) as Item<BigEndian>>::deserialize(&[7, (-125i8) as u8]),
            Err(ErrorRecord::new(Mark::OutOfBounds, 1))
        );
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            <Year as Item<BigEndian>>::deserialize(&[0x00]),
            Err(ErrorRecord::new(Mark::BufferTooShort, 0))
        );
    }

    #[test]
    #[should_panic(expected = "value minus offset is not representable")]
    fn test_underflow_on_write() {
        <Year as Item<BigEndian>>::encode(&1999);
    }
}
