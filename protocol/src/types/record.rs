//! Declarations for decode failures, so a peer can be told what went wrong.
//!
//! A [`Mark`] is its one-byte code. An [`ErrorRecord`] is the mark followed by the offset as a
//! 32-bit integer.

use crate::{Decl, Endian, ErrorRecord, Item, Mark, Reader};
use bytes::BufMut;

impl Decl for Mark {
    type Value = Self;
    const MIN_SIZE: usize = u8::MIN_SIZE;
    const MAX_SIZE: usize = u8::MAX_SIZE;
}

impl<E: Endian> Item<E> for Mark {
    #[inline]
    fn encode_size(_: &Self) -> usize {
        u8::MAX_SIZE
    }

    #[inline]
    fn write(value: &Self, buf: &mut impl BufMut) {
        buf.put_u8(value.code());
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let start = reader.offset();
        let code = <u8 as Item<E>>::read(reader)?;
        Mark::from_code(code).ok_or(ErrorRecord::new(Mark::BadValue, start))
    }
}

impl Decl for ErrorRecord {
    type Value = Self;
    const MIN_SIZE: usize = Mark::MIN_SIZE + u32::MIN_SIZE;
    const MAX_SIZE: usize = Mark::MAX_SIZE + u32::MAX_SIZE;
}

impl<E: Endian> Item<E> for ErrorRecord {
    #[inline]
    fn encode_size(_: &Self) -> usize {
        Self::MAX_SIZE
    }

    fn write(value: &Self, buf: &mut impl BufMut) {
        <Mark as Item<E>>::write(&value.mark, buf);
        let offset = u32::try_from(value.offset).expect("offset exceeds 32 bits");
        <u32 as Item<E>>::write(&offset, buf);
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let mark = <Mark as Item<E>>::read(reader)?;
        let start = reader.offset();
        let offset = <u32 as Item<E>>::read(reader)?;
        let offset =
            usize::try_from(offset).map_err(|_| ErrorRecord::new(Mark::OutOfBounds, start))?;
        Ok(ErrorRecord::new(mark, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian};

    #[test]
    fn test_mark() {
        assert_eq!(
            <Mark as Item<BigEndian>>::encode(&Mark::CapacityExceeded),
            &[6][..]
        );
        assert_eq!(
            <Mark as Item<BigEndian>>::deserialize(&[2]).unwrap().value,
            Mark::UnknownTag
        );
        assert_eq!(
            <Mark as Item<BigEndian>>::deserialize(&[0]),
            Err(ErrorRecord::new(Mark::BadValue, 0))
        );
    }

    #[test]
    fn test_record() {
        let record = ErrorRecord::new(Mark::OutOfBounds, 0x0102);
        let encoded = <ErrorRecord as Item<BigEndian>>::encode(&record);
        assert_eq!(encoded, &[3, 0, 0, 0x01, 0x02][..]);
        assert_eq!(
            <ErrorRecord as Item<LittleEndian>>::encode(&record),
            &[3, 0x02, 0x01, 0, 0][..]
        );
        assert_eq!(
            <ErrorRecord as Item<BigEndian>>::deserialize(&encoded)
                .unwrap()
                .value,
            record
        );
    }

    #[test]
    fn test_record_bad_mark() {
        assert_eq!(
            <ErrorRecord as Item<BigEndian>>::deserialize(&[9, 0, 0, 0, 0]),
            Err(ErrorRecord::new(Mark::BadValue, 0))
        );
    }
}
