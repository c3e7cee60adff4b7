//! Declarations for fixed-size arrays.
//!
//! `[D; N]` is encoded as `N` consecutive encodings of `D` and decodes to `[D::Value; N]`.

use crate::{
    decl::{greedy_last, Layout},
    Decl, Endian, ErrorRecord, Item, Reader,
};
use bytes::BufMut;

impl<D: Decl, const N: usize> Decl for [D; N] {
    type Value = [D::Value; N];
    const MIN_SIZE: usize = D::MIN_SIZE * N;
    const MAX_SIZE: usize = D::MAX_SIZE * N;
    const GREEDY: bool = greedy_last(&[D::GREEDY; N]);
}

impl<E: Endian, D: Item<E>, const N: usize> Item<E> for [D; N] {
    #[inline]
    fn encode_size(value: &Self::Value) -> usize {
        value.iter().map(D::encode_size).sum()
    }

    #[inline]
    fn write(value: &Self::Value, buf: &mut impl BufMut) {
        let () = Layout::<Self>::OK;
        for item in value {
            D::write(item, buf);
        }
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self::Value, ErrorRecord> {
        let () = Layout::<Self>::OK;
        let mut failure = None;
        let items: [Option<D::Value>; N] = core::array::from_fn(|_| {
            if failure.is_some() {
                return None;
            }
            match D::read(reader) {
                Ok(item) => Some(item),
                Err(err) => {
                    failure = Some(err);
                    None
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(items.map(|item| item.expect("every element decoded")))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigEndian, ErrorRecord, Item, LittleEndian, Mark};

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = <[u8; 3] as Item<BigEndian>>::encode(&values);
        assert_eq!(encoded, &[1, 2, 3][..]);
        let decoded = <[u8; 3] as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.value, values);
    }

    #[test]
    fn test_array_of_scalars_endianness() {
        let values = [0x0102u16, 0x0304];
        assert_eq!(
            <[u16; 2] as Item<LittleEndian>>::encode(&values),
            &[0x02, 0x01, 0x04, 0x03][..]
        );
    }

    #[test]
    fn test_nested_array() {
        let values = [[1u8, 2], [3, 4]];
        let encoded = <[[u8; 2]; 2] as Item<BigEndian>>::encode(&values);
        assert_eq!(encoded, &[1, 2, 3, 4][..]);
        let decoded = <[[u8; 2]; 2] as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.value, values);
    }

    #[test]
    fn test_array_error() {
        assert_eq!(
            <[u16; 3] as Item<BigEndian>>::deserialize(&[0, 1, 0, 2, 0]),
            Err(ErrorRecord::new(Mark::BufferTooShort, 4))
        );
    }

    #[test]
    fn test_empty_array() {
        assert!(<[u32; 0] as Item<BigEndian>>::encode(&[]).is_empty());
        let decoded = <[u32; 0] as Item<BigEndian>>::deserialize(&[]).unwrap();
        assert_eq!(decoded.used, 0);
    }
}
