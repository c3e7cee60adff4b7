//! Integers restricted to a closed range.
//!
//! A [`Bounded<T, MIN, MAX>`] can only be constructed from a value in `MIN..=MAX`, so encoding
//! never needs to check it. Decoding reads a plain `T` and fails with [`Mark::OutOfBounds`] (at
//! the offset of the integer) if the value lies outside the range.

use crate::{Decl, Endian, ErrorRecord, Integer, Item, Mark, Reader};
use bytes::BufMut;

/// A `T` guaranteed to lie within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bounded<T, const MIN: i128, const MAX: i128>(T);

impl<T: Integer, const MIN: i128, const MAX: i128> Bounded<T, MIN, MAX> {
    const VALID: () = assert!(MIN <= MAX, "bounds are empty");

    /// Wraps `value`, or returns `None` if it lies outside `MIN..=MAX`.
    pub fn new(value: T) -> Option<Self> {
        let () = Self::VALID;
        (MIN..=MAX)
            .contains(&value.to_i128())
            .then_some(Self(value))
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn get(self) -> T {
        self.0
    }
}

impl<T: Integer, const MIN: i128, const MAX: i128> Decl for Bounded<T, MIN, MAX> {
    type Value = Self;
    const MIN_SIZE: usize = T::MIN_SIZE;
    const MAX_SIZE: usize = T::MAX_SIZE;
}

impl<E, T, const MIN: i128, const MAX: i128> Item<E> for Bounded<T, MIN, MAX>
where
    E: Endian,
    T: Integer + Item<E>,
{
    #[inline]
    fn encode_size(value: &Self) -> usize {
        T::encode_size(&value.0)
    }

    #[inline]
    fn write(value: &Self, buf: &mut impl BufMut) {
        T::write(&value.0, buf);
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let start = reader.offset();
        let value = T::read(reader)?;
        Self::new(value).ok_or(ErrorRecord::new(Mark::OutOfBounds, start))
    }
}
