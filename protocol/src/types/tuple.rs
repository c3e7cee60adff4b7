//! Declarations for tuples.
//!
//! A tuple is encoded as the concatenation of its fields in declared order, with no padding. Its
//! value is the tuple of the fields' values.

use crate::{
    decl::{greedy_last, Layout},
    Decl, Endian, ErrorRecord, Item, Reader,
};
use bytes::BufMut;
use paste::paste;

impl Decl for () {
    type Value = ();
    const MIN_SIZE: usize = 0;
    const MAX_SIZE: usize = 0;
}

impl<E: Endian> Item<E> for () {
    #[inline]
    fn encode_size(_: &()) -> usize {
        0
    }

    #[inline]
    fn write(_: &(), _: &mut impl BufMut) {}

    #[inline]
    fn read(_: &mut Reader<'_>) -> Result<(), ErrorRecord> {
        Ok(())
    }
}

// Tuple implementation
macro_rules! impl_decl_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Decl ),*> Decl for ( $( [<T $index>], )* ) {
                type Value = ( $( [<T $index>]::Value, )* );
                const MIN_SIZE: usize = 0 $( + [<T $index>]::MIN_SIZE )*;
                const MAX_SIZE: usize = 0 $( + [<T $index>]::MAX_SIZE )*;
                const GREEDY: bool = greedy_last(&[ $( [<T $index>]::GREEDY ),* ]);
            }

            impl<E: Endian, $( [<T $index>]: Item<E> ),*> Item<E> for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(value: &Self::Value) -> usize {
                    0 $( + [<T $index>]::encode_size(&value.$index) )*
                }

                #[inline]
                fn write(value: &Self::Value, buf: &mut impl BufMut) {
                    let () = Layout::<Self>::OK;
                    $( [<T $index>]::write(&value.$index, buf); )*
                }

                #[inline]
                fn read(reader: &mut Reader<'_>) -> Result<Self::Value, ErrorRecord> {
                    let () = Layout::<Self>::OK;
                    Ok(( $( [<T $index>]::read(reader)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_decl_for_tuple!(0);
impl_decl_for_tuple!(0, 1);
impl_decl_for_tuple!(0, 1, 2);
impl_decl_for_tuple!(0, 1, 2, 3);
impl_decl_for_tuple!(0, 1, 2, 3, 4);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_decl_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use crate::{BigEndian, ErrorRecord, Item, LittleEndian, Mark, SizelessMessage};

    #[test]
    fn test_tuple() {
        type Header = (u8, u16, u32);
        let value = (1, 0x0203, 0x04050607);
        let encoded = <Header as Item<BigEndian>>::encode(&value);
        assert_eq!(encoded, &[1, 2, 3, 4, 5, 6, 7][..]);
        assert_eq!(
            <Header as Item<BigEndian>>::deserialize(&encoded).unwrap().value,
            value
        );

        let encoded = <Header as Item<LittleEndian>>::encode(&value);
        assert_eq!(encoded, &[1, 3, 2, 7, 6, 5, 4][..]);
    }

    #[test]
    fn test_unit() {
        assert!(<() as Item<BigEndian>>::encode(&()).is_empty());
        assert_eq!(<() as Item<BigEndian>>::deserialize(&[1]).unwrap().used, 0);
    }

    #[test]
    fn test_tuple_error_offset() {
        // The third field is cut short; its offset is measured from the tuple start.
        let result = <(u8, u16, u32) as Item<BigEndian>>::deserialize(&[1, 2, 3, 4, 5]);
        assert_eq!(result, Err(ErrorRecord::new(Mark::BufferTooShort, 3)));
    }

    #[test]
    fn test_tuple_sizeless_last() {
        type Frame = (u8, SizelessMessage<4>);
        let payload = SizelessMessage::make(&[7, 8, 9]).unwrap();
        let encoded = <Frame as Item<BigEndian>>::encode(&(2, payload));
        assert_eq!(encoded, &[2, 7, 8, 9][..]);

        let decoded = <Frame as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.used, 4);
        assert_eq!(decoded.value.1.as_slice(), &[7, 8, 9]);
    }
}
