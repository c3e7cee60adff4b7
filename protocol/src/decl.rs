//! Size declarations.
//!
//! Every type that can appear in a message implements [`Decl`], which states the value produced
//! by decoding it and the range of bytes its encoding can take. Composites derive their range from
//! their constituents, so the footprint of any message is a compile-time constant:
//!
//! | declaration                     | `MIN_SIZE`                   | `MAX_SIZE`                   |
//! |---------------------------------|------------------------------|------------------------------|
//! | scalar                          | width                        | width                        |
//! | `[D; N]`                        | `N * D::MIN_SIZE`            | `N * D::MAX_SIZE`            |
//! | `(A, B, ..)`                    | sum of minimums              | sum of maximums              |
//! | [`crate::protocol_enum`]        | tag + smallest alternative   | tag + largest alternative    |
//! | [`crate::protocol_group`]       | smallest alternative         | largest alternative          |
//! | [`crate::BitSet<N>`]            | `ceil(N / 8)`                | `ceil(N / 8)`                |
//! | [`crate::Bounded<T, MIN, MAX>`] | same as `T`                  | same as `T`                  |
//! | [`crate::SizedBuffer<C, D>`]    | `C` + `D::MIN_SIZE`          | `C` + `D::MAX_SIZE`          |
//! | `heapless::Vec<D, N>`           | 16-bit count                 | count + `N * D::MAX_SIZE`    |
//! | [`crate::Message<N>`]           | 16-bit count                 | count + `N`                  |
//! | [`crate::SizelessMessage<N>`]   | 0                            | `N`                          |

use core::marker::PhantomData;

/// A type with a known value representation and encoded footprint.
pub trait Decl {
    /// The in-memory value produced by decoding this declaration.
    type Value;

    /// The fewest bytes an encoding can take.
    const MIN_SIZE: usize;

    /// The most bytes an encoding can take.
    const MAX_SIZE: usize;

    /// Whether the encoding has no length of its own and consumes all remaining input.
    ///
    /// A greedy declaration may only be the last field of whatever contains it:
    ///
    /// ```
    /// use declwire_protocol::{BigEndian, Decl, Item, SizelessMessage};
    ///
    /// type Frame = (u8, SizelessMessage<4>);
    /// assert!(Frame::GREEDY);
    /// let decoded = <Frame as Item<BigEndian>>::deserialize(&[1, 2, 3]).unwrap();
    /// assert_eq!(decoded.used, 3);
    /// ```
    ///
    /// Anywhere else, the composite fails to build. In a tuple:
    ///
    /// ```compile_fail
    /// use declwire_protocol::{BigEndian, Item, SizelessMessage};
    ///
    /// let _ = <(SizelessMessage<4>, u8) as Item<BigEndian>>::deserialize(&[]);
    /// ```
    ///
    /// In an array of more than one element:
    ///
    /// ```compile_fail
    /// use declwire_protocol::{BigEndian, Item, SizelessMessage};
    ///
    /// let _ = <[SizelessMessage<4>; 2] as Item<BigEndian>>::deserialize(&[]);
    /// ```
    ///
    /// As a vector element:
    ///
    /// ```compile_fail
    /// use declwire_protocol::{BigEndian, Item, SizelessMessage};
    ///
    /// let _ = <heapless::Vec<SizelessMessage<4>, 2> as Item<BigEndian>>::deserialize(&[]);
    /// ```
    ///
    /// In a declared struct:
    ///
    /// ```compile_fail
    /// use declwire_protocol::{protocol_struct, BigEndian, Item, SizelessMessage};
    ///
    /// protocol_struct! {
    ///     struct Frame {
    ///         payload: SizelessMessage<4>,
    ///         checksum: u16,
    ///     }
    /// }
    ///
    /// let _ = <Frame as Item<BigEndian>>::deserialize(&[]);
    /// ```
    const GREEDY: bool = false;
}

/// Returns true if every encoding of `D` has the same length.
pub const fn is_fixed<D: Decl>() -> bool {
    D::MIN_SIZE == D::MAX_SIZE
}

/// Returns the largest size, or 0 if there are none.
pub const fn max_of(sizes: &[usize]) -> usize {
    let mut result = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > result {
            result = sizes[i];
        }
        i += 1;
    }
    result
}

/// Returns the smallest size, or 0 if there are none.
pub const fn min_of(sizes: &[usize]) -> usize {
    if sizes.is_empty() {
        return 0;
    }
    let mut result = usize::MAX;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] < result {
            result = sizes[i];
        }
        i += 1;
    }
    result
}

/// Returns whether a sequence of fields is greedy, given the greediness of each field in order.
///
/// Fails to build if any field other than the last is greedy.
pub const fn greedy_last(fields: &[bool]) -> bool {
    if fields.is_empty() {
        return false;
    }
    let mut i = 0;
    while i + 1 < fields.len() {
        assert!(!fields[i], "size-less field must be the last field");
        i += 1;
    }
    fields[fields.len() - 1]
}

/// Build-time check that the layout of `D` is well formed.
///
/// Composites assert it before encoding or decoding. Evaluating it fails the build if a
/// size-less field is not last or if the footprint bounds are inverted.
#[doc(hidden)]
pub struct Layout<D: ?Sized>(PhantomData<D>);

impl<D: Decl + ?Sized> Layout<D> {
    pub const OK: () = {
        assert!(D::MIN_SIZE <= D::MAX_SIZE, "min size exceeds max size");
        // Composites run their placement check while computing GREEDY.
        let _greedy = D::GREEDY;
    };
}

/// Build-time check that `D` always fits in `N` bytes.
pub(crate) struct Fits<D: ?Sized, const N: usize>(PhantomData<D>);

impl<D: Decl + ?Sized, const N: usize> Fits<D, N> {
    pub(crate) const OK: () = assert!(
        D::MAX_SIZE <= N,
        "declared max size exceeds buffer capacity"
    );
}
