//! Declarations for fixed-capacity vectors.
//!
//! `heapless::Vec<D, N>` holds up to `N` elements. It is encoded as a 16-bit element count
//! followed by that many encodings of `D`, so `N` may not exceed `u16::MAX`.

use crate::{
    decl::{greedy_last, Layout},
    Decl, Endian, ErrorRecord, Item, Mark, Reader,
};
use bytes::BufMut;

impl<D: Decl, const N: usize> Decl for heapless::Vec<D, N> {
    type Value = heapless::Vec<D::Value, N>;
    const MIN_SIZE: usize = u16::MIN_SIZE;
    const MAX_SIZE: usize = {
        assert!(N <= u16::MAX as usize, "vector capacity exceeds 16-bit count");
        u16::MAX_SIZE + D::MAX_SIZE * N
    };

    // Elements are never last: another element may follow.
    const GREEDY: bool = greedy_last(&[D::GREEDY, false]);
}

impl<E: Endian, D: Item<E>, const N: usize> Item<E> for heapless::Vec<D, N> {
    #[inline]
    fn encode_size(value: &Self::Value) -> usize {
        u16::MAX_SIZE + value.iter().map(D::encode_size).sum::<usize>()
    }

    #[inline]
    fn write(value: &Self::Value, buf: &mut impl BufMut) {
        let () = Layout::<Self>::OK;
        <u16 as Item<E>>::write(&(value.len() as u16), buf);
        for item in value {
            D::write(item, buf);
        }
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self::Value, ErrorRecord> {
        let () = Layout::<Self>::OK;
        let start = reader.offset();
        let count = usize::from(<u16 as Item<E>>::read(reader)?);
        if count > N {
            return Err(ErrorRecord::new(Mark::CapacityExceeded, start));
        }
        let mut items = heapless::Vec::new();
        for _ in 0..count {
            let item = D::read(reader)?;
            items
                .push(item)
                .map_err(|_| ErrorRecord::new(Mark::CapacityExceeded, start))?;
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigEndian, Decl, ErrorRecord, Item, LittleEndian, Mark};

    type Samples = heapless::Vec<u16, 3>;

    #[test]
    fn test_vec() {
        let values: heapless::Vec<u16, 3> = heapless::Vec::from_slice(&[1, 2]).unwrap();
        let encoded = <Samples as Item<BigEndian>>::encode(&values);
        assert_eq!(encoded, &[0x00, 0x02, 0x00, 0x01, 0x00, 0x02][..]);
        assert!(encoded.len() >= Samples::MIN_SIZE && encoded.len() <= Samples::MAX_SIZE);

        let decoded = <Samples as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.used, 6);
        assert_eq!(decoded.value, values);
    }

    #[test]
    fn test_vec_count_endianness() {
        let values: heapless::Vec<u8, 4> = heapless::Vec::from_slice(&[9]).unwrap();
        assert_eq!(
            <heapless::Vec<u8, 4> as Item<LittleEndian>>::encode(&values),
            &[0x01, 0x00, 0x09][..]
        );
    }

    #[test]
    fn test_vec_empty() {
        let values = heapless::Vec::<u16, 3>::new();
        let encoded = <Samples as Item<BigEndian>>::encode(&values);
        assert_eq!(encoded, &[0x00, 0x00][..]);
        assert!(<Samples as Item<BigEndian>>::deserialize(&encoded)
            .unwrap()
            .value
            .is_empty());
    }

    #[test]
    fn test_vec_capacity_exceeded() {
        let encoded = [0x00, 0x04, 0, 1, 0, 2, 0, 3, 0, 4];
        assert_eq!(
            <Samples as Item<BigEndian>>::deserialize(&encoded),
            Err(ErrorRecord::new(Mark::CapacityExceeded, 0))
        );
    }

    #[test]
    fn test_vec_element_error() {
        // Count says two elements but only one and a half follow.
        let encoded = [0x00, 0x02, 0, 1, 0];
        assert_eq!(
            <Samples as Item<BigEndian>>::deserialize(&encoded),
            Err(ErrorRecord::new(Mark::BufferTooShort, 4))
        );
    }
}
