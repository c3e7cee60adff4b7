//! Declarations for Rust primitive types.
//!
//! Integers and floats are declared scalars: their footprint is their width and they are written
//! in the byte order of the enclosing [`Item`]. Single-byte scalars read and write identically
//! under both byte orders.
//!
//! Unsigned integers up to 64 bits also implement [`Unsigned`], which lets them act as length
//! counters ([`crate::SizedBuffer`]) and as constant markers ([`crate::Constant`]). Every
//! integer up to 64 bits implements [`Integer`], used by [`crate::Bounded`] and
//! [`crate::Offset`].

use crate::{Decl, Endian, Endianness, ErrorRecord, Item, Reader};
use bytes::{Buf, BufMut};

macro_rules! impl_scalar {
    ($type:ty, $get:ident, $get_le:ident, $put:ident, $put_le:ident) => {
        impl Decl for $type {
            type Value = $type;
            const MIN_SIZE: usize = core::mem::size_of::<$type>();
            const MAX_SIZE: usize = core::mem::size_of::<$type>();
        }

        impl<E: Endian> Item<E> for $type {
            #[inline]
            fn encode_size(_: &$type) -> usize {
                Self::MAX_SIZE
            }

            #[inline]
            fn write(value: &$type, buf: &mut impl BufMut) {
                match E::ORDER {
                    Endianness::Big => buf.$put(*value),
                    Endianness::Little => buf.$put_le(*value),
                }
            }

            #[inline]
            fn read(reader: &mut Reader<'_>) -> Result<$type, ErrorRecord> {
                reader.require(Self::MAX_SIZE)?;
                Ok(match E::ORDER {
                    Endianness::Big => reader.buf().$get(),
                    Endianness::Little => reader.buf().$get_le(),
                })
            }
        }
    };
}

impl_scalar!(u8, get_u8, get_u8, put_u8, put_u8);
impl_scalar!(u16, get_u16, get_u16_le, put_u16, put_u16_le);
impl_scalar!(u32, get_u32, get_u32_le, put_u32, put_u32_le);
impl_scalar!(u64, get_u64, get_u64_le, put_u64, put_u64_le);
impl_scalar!(u128, get_u128, get_u128_le, put_u128, put_u128_le);
impl_scalar!(i8, get_i8, get_i8, put_i8, put_i8);
impl_scalar!(i16, get_i16, get_i16_le, put_i16, put_i16_le);
impl_scalar!(i32, get_i32, get_i32_le, put_i32, put_i32_le);
impl_scalar!(i64, get_i64, get_i64_le, put_i64, put_i64_le);
impl_scalar!(i128, get_i128, get_i128_le, put_i128, put_i128_le);
impl_scalar!(f32, get_f32, get_f32_le, put_f32, put_f32_le);
impl_scalar!(f64, get_f64, get_f64_le, put_f64, put_f64_le);

/// Unsigned integers usable as counters and constant markers.
pub trait Unsigned: Decl<Value = Self> + Copy + Eq {
    /// Largest representable value.
    const LIMIT: u64;

    /// Converts from `u64`, truncating values above [`Unsigned::LIMIT`].
    fn from_u64(value: u64) -> Self;

    /// Widens to `u64`.
    fn to_u64(self) -> u64;
}

macro_rules! impl_unsigned {
    ($type:ty) => {
        impl Unsigned for $type {
            const LIMIT: u64 = <$type>::MAX as u64;

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $type
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_unsigned!(u8);
impl_unsigned!(u16);
impl_unsigned!(u32);
impl_unsigned!(u64);

/// Integers up to 64 bits, convertible to and from `i128` for range arithmetic.
pub trait Integer: Decl<Value = Self> + Copy {
    /// Widens to `i128`.
    fn to_i128(self) -> i128;

    /// Narrows from `i128`, or returns `None` if `value` is not representable.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($type:ty),*) => {
        $(
            impl Integer for $type {
                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$type>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian, Mark};
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = <$type as Item<BigEndian>>::encode(value);
                        assert_eq!(encoded.len(), $size);
                        assert_eq!(encoded, &value.to_be_bytes()[..]);
                        let decoded = <$type as Item<BigEndian>>::deserialize(&encoded).unwrap();
                        assert_eq!(decoded.used, $size);
                        assert_eq!(*value, decoded.value);

                        let encoded = <$type as Item<LittleEndian>>::encode(value);
                        assert_eq!(encoded, &value.to_le_bytes()[..]);
                        let decoded = <$type as Item<LittleEndian>>::deserialize(&encoded).unwrap();
                        assert_eq!(*value, decoded.value);

                        // One byte short
                        assert_eq!(
                            <$type as Item<BigEndian>>::deserialize(&encoded[..$size - 1]),
                            Err(ErrorRecord::new(Mark::BufferTooShort, 0))
                        );
                    }
                }
            }
        };
    }
    impl_num_test!(u8, 1);
    impl_num_test!(u16, 2);
    impl_num_test!(u32, 4);
    impl_num_test!(u64, 8);
    impl_num_test!(u128, 16);
    impl_num_test!(i8, 1);
    impl_num_test!(i16, 2);
    impl_num_test!(i32, 4);
    impl_num_test!(i64, 8);
    impl_num_test!(i128, 16);
    impl_num_test!(f32, 4);
    impl_num_test!(f64, 8);

    #[test]
    fn test_endianness() {
        // u16
        assert_eq!(<u16 as Item<BigEndian>>::encode(&0x0102), &[0x01, 0x02][..]);
        assert_eq!(<u16 as Item<LittleEndian>>::encode(&0x0102), &[0x02, 0x01][..]);

        // u32
        assert_eq!(
            <u32 as Item<BigEndian>>::encode(&0x01020304),
            &[0x01, 0x02, 0x03, 0x04][..]
        );
        assert_eq!(
            <u32 as Item<LittleEndian>>::encode(&0x01020304),
            &[0x04, 0x03, 0x02, 0x01][..]
        );

        // f32
        assert_eq!(
            <f32 as Item<BigEndian>>::encode(&1.0),
            &[0x3F, 0x80, 0x00, 0x00][..]
        );

        // Single bytes ignore byte order
        assert_eq!(<i8 as Item<LittleEndian>>::encode(&-1), &[0xFF][..]);
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(u8::LIMIT, 255);
        assert_eq!(u16::LIMIT, 65535);
        assert_eq!(u64::LIMIT, u64::MAX);
        assert_eq!(u16::from_u64(0x1234), 0x1234);
        assert_eq!(0xABu8.to_u64(), 0xAB);
    }

    #[test]
    fn test_integer() {
        assert_eq!((-5i8).to_i128(), -5);
        assert_eq!(u64::MAX.to_i128(), u64::MAX as i128);
        assert_eq!(u8::from_i128(255), Some(255));
        assert_eq!(u8::from_i128(256), None);
        assert_eq!(u16::from_i128(-1), None);
        assert_eq!(i16::from_i128(-32768), Some(i16::MIN));
    }
}
