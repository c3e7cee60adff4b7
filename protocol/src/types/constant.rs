//! Fixed values that must appear verbatim on the wire.

use crate::{Decl, Endian, ErrorRecord, Item, Mark, Reader, Unsigned};
use bytes::BufMut;
use core::marker::PhantomData;

/// The value `V`, encoded as a `D`.
///
/// Carries no data. Writing always emits `V`; reading fails with [`Mark::BadValue`] (at the
/// offset of the constant) if anything else is found. Useful for magic numbers and version bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constant<D, const V: u64>(PhantomData<D>);

impl<D: Unsigned, const V: u64> Constant<D, V> {
    const VALID: () = assert!(V <= D::LIMIT, "constant does not fit its declaration");

    /// The constant value.
    pub const VALUE: u64 = V;

    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D: Unsigned, const V: u64> Decl for Constant<D, V> {
    type Value = Self;
    const MIN_SIZE: usize = D::MIN_SIZE;
    const MAX_SIZE: usize = D::MAX_SIZE;
}

impl<E, D, const V: u64> Item<E> for Constant<D, V>
where
    E: Endian,
    D: Unsigned + Item<E>,
{
    #[inline]
    fn encode_size(_: &Self) -> usize {
        D::MAX_SIZE
    }

    fn write(_: &Self, buf: &mut impl BufMut) {
        let () = Self::VALID;
        D::write(&D::from_u64(V), buf);
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let () = Self::VALID;
        let start = reader.offset();
        if D::read(reader)?.to_u64() != V {
            return Err(ErrorRecord::new(Mark::BadValue, start));
        }
        Ok(Self::new())
    }
}
