//! Macros for declaring composite message types.
//!
//! Tuples and arrays cover anonymous composites. These macros declare named ones:
//!
//! - [`protocol_struct!`](crate::protocol_struct): a struct whose fields are encoded in order,
//!   exactly like the tuple of their declarations.
//! - [`protocol_enum!`](crate::protocol_enum): a tagged union. A `u8` tag holding the index of
//!   the active alternative precedes its encoding.
//! - [`protocol_group!`](crate::protocol_group): an untagged union. Decoding tries each
//!   alternative in declaration order and keeps the first that parses.
//!
//! Every field or alternative names a declaration; the generated Rust type stores the
//! declaration's [`Decl::Value`](crate::Decl::Value).

/// Declares a struct encoded as the concatenation of its fields.
///
/// ```
/// use declwire_protocol::{protocol_struct, BigEndian, Constant, Item};
///
/// protocol_struct! {
///     #[derive(Debug, PartialEq)]
///     pub struct Reading {
///         pub magic: Constant<u8, 0xA5>,
///         pub channel: u8,
///         pub value: u16,
///     }
/// }
///
/// let reading = Reading { magic: Constant::new(), channel: 2, value: 0x0304 };
/// let encoded = <Reading as Item<BigEndian>>::encode(&reading);
/// assert_eq!(encoded, &[0xA5, 2, 3, 4][..]);
/// ```
#[macro_export]
macro_rules! protocol_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $decl:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: <$decl as $crate::Decl>::Value,
            )*
        }

        impl $crate::Decl for $name {
            type Value = Self;
            const MIN_SIZE: usize = 0 $( + <$decl as $crate::Decl>::MIN_SIZE )*;
            const MAX_SIZE: usize = 0 $( + <$decl as $crate::Decl>::MAX_SIZE )*;
            const GREEDY: bool =
                $crate::decl::greedy_last(&[ $( <$decl as $crate::Decl>::GREEDY ),* ]);
        }

        impl<E: $crate::Endian> $crate::Item<E> for $name
        where
            $( $decl: $crate::Item<E>, )*
        {
            #[inline]
            fn encode_size(value: &Self) -> usize {
                0 $( + <$decl as $crate::Item<E>>::encode_size(&value.$field) )*
            }

            fn write(value: &Self, buf: &mut impl $crate::__private::BufMut) {
                let () = $crate::decl::Layout::<Self>::OK;
                $( <$decl as $crate::Item<E>>::write(&value.$field, buf); )*
            }

            fn read(
                reader: &mut $crate::Reader<'_>,
            ) -> ::core::result::Result<Self, $crate::ErrorRecord> {
                let () = $crate::decl::Layout::<Self>::OK;
                ::core::result::Result::Ok(Self {
                    $( $field: <$decl as $crate::Item<E>>::read(reader)?, )*
                })
            }
        }
    };
}

/// Declares a tagged union.
///
/// Each variant wraps exactly one declaration. On the wire the variant is a `u8` tag equal to
/// its position in the declaration (starting at 0) followed by the encoding of its payload.
/// Decoding an unassigned tag fails with [`Mark::UnknownTag`](crate::Mark::UnknownTag) at the
/// offset of the tag.
///
/// ```
/// use declwire_protocol::{protocol_enum, BigEndian, Item};
///
/// protocol_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum Command {
///         Byte(u8),
///         Word(u16),
///     }
/// }
///
/// let encoded = <Command as Item<BigEndian>>::encode(&Command::Word(0x1234));
/// assert_eq!(encoded, &[0x01, 0x12, 0x34][..]);
/// ```
#[macro_export]
macro_rules! protocol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $decl:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant(<$decl as $crate::Decl>::Value),
            )+
        }

        impl $name {
            /// Returns the tag written before the active alternative.
            pub const fn tag(&self) -> u8 {
                #[allow(dead_code)]
                enum Index { $( $variant ),+ }
                match self {
                    $( Self::$variant(_) => Index::$variant as u8, )+
                }
            }
        }

        impl $crate::Decl for $name {
            type Value = Self;
            const MIN_SIZE: usize = <u8 as $crate::Decl>::MIN_SIZE
                + $crate::decl::min_of(&[ $( <$decl as $crate::Decl>::MIN_SIZE ),+ ]);
            const MAX_SIZE: usize = {
                let alternatives = [ $( stringify!($variant) ),+ ];
                assert!(alternatives.len() <= 256, "too many alternatives for a u8 tag");
                <u8 as $crate::Decl>::MAX_SIZE
                    + $crate::decl::max_of(&[ $( <$decl as $crate::Decl>::MAX_SIZE ),+ ])
            };
            const GREEDY: bool = false $( || <$decl as $crate::Decl>::GREEDY )+;
        }

        impl<E: $crate::Endian> $crate::Item<E> for $name
        where
            $( $decl: $crate::Item<E>, )+
        {
            #[inline]
            fn encode_size(value: &Self) -> usize {
                <u8 as $crate::Decl>::MAX_SIZE + match value {
                    $( Self::$variant(inner) => <$decl as $crate::Item<E>>::encode_size(inner), )+
                }
            }

            fn write(value: &Self, buf: &mut impl $crate::__private::BufMut) {
                let () = $crate::decl::Layout::<Self>::OK;
                <u8 as $crate::Item<E>>::write(&value.tag(), buf);
                match value {
                    $( Self::$variant(inner) => <$decl as $crate::Item<E>>::write(inner, buf), )+
                }
            }

            fn read(
                reader: &mut $crate::Reader<'_>,
            ) -> ::core::result::Result<Self, $crate::ErrorRecord> {
                #[allow(dead_code)]
                enum Index { $( $variant ),+ }

                let () = $crate::decl::Layout::<Self>::OK;
                let start = reader.offset();
                let tag = <u8 as $crate::Item<E>>::read(reader)?;
                $(
                    if tag == Index::$variant as u8 {
                        let inner = <$decl as $crate::Item<E>>::read(reader)?;
                        return ::core::result::Result::Ok(Self::$variant(inner));
                    }
                )+
                ::core::result::Result::Err($crate::ErrorRecord::new(
                    $crate::Mark::UnknownTag,
                    start,
                ))
            }
        }
    };
}

/// Declares an untagged union, for detecting which of several formats a buffer holds.
///
/// Nothing but the payload is written. Decoding tries each alternative in declaration order,
/// starting from the same position each time, and returns the first that succeeds. If none
/// does, decoding fails with [`Mark::NoAlternativeMatched`](crate::Mark::NoAlternativeMatched)
/// at the offset where the group starts. When several alternatives accept the same bytes, the
/// one declared first wins.
///
/// ```
/// use declwire_protocol::{protocol_group, BigEndian, Constant, Item};
///
/// protocol_group! {
///     #[derive(Debug, PartialEq)]
///     pub enum Frame {
///         Short((Constant<u8, 1>, u8)),
///         Long((Constant<u8, 2>, u32)),
///     }
/// }
///
/// let decoded = <Frame as Item<BigEndian>>::deserialize(&[2, 0, 0, 0, 9]).unwrap();
/// assert_eq!(decoded.value, Frame::Long((Constant::new(), 9)));
/// ```
#[macro_export]
macro_rules! protocol_group {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $decl:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant(<$decl as $crate::Decl>::Value),
            )+
        }

        impl $crate::Decl for $name {
            type Value = Self;
            const MIN_SIZE: usize =
                $crate::decl::min_of(&[ $( <$decl as $crate::Decl>::MIN_SIZE ),+ ]);
            const MAX_SIZE: usize =
                $crate::decl::max_of(&[ $( <$decl as $crate::Decl>::MAX_SIZE ),+ ]);
            const GREEDY: bool = false $( || <$decl as $crate::Decl>::GREEDY )+;
        }

        impl<E: $crate::Endian> $crate::Item<E> for $name
        where
            $( $decl: $crate::Item<E>, )+
        {
            #[inline]
            fn encode_size(value: &Self) -> usize {
                match value {
                    $( Self::$variant(inner) => <$decl as $crate::Item<E>>::encode_size(inner), )+
                }
            }

            fn write(value: &Self, buf: &mut impl $crate::__private::BufMut) {
                let () = $crate::decl::Layout::<Self>::OK;
                match value {
                    $( Self::$variant(inner) => <$decl as $crate::Item<E>>::write(inner, buf), )+
                }
            }

            fn read(
                reader: &mut $crate::Reader<'_>,
            ) -> ::core::result::Result<Self, $crate::ErrorRecord> {
                let () = $crate::decl::Layout::<Self>::OK;
                let start = *reader;
                $(
                    let mut attempt = start;
                    if let ::core::result::Result::Ok(inner) =
                        <$decl as $crate::Item<E>>::read(&mut attempt)
                    {
                        *reader = attempt;
                        return ::core::result::Result::Ok(Self::$variant(inner));
                    }
                )+
                ::core::result::Result::Err($crate::ErrorRecord::new(
                    $crate::Mark::NoAlternativeMatched,
                    start.offset(),
                ))
            }
        }
    };
}
