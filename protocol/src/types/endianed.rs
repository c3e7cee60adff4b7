//! Byte order overrides.

use crate::{Decl, Endian, ErrorRecord, Item, Reader};
use bytes::BufMut;
use core::marker::PhantomData;

/// `D` encoded in byte order `O`, regardless of the order of the enclosing declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Endianed<O, D>(PhantomData<(O, D)>);

impl<O: Endian, D: Decl> Decl for Endianed<O, D> {
    type Value = D::Value;
    const MIN_SIZE: usize = D::MIN_SIZE;
    const MAX_SIZE: usize = D::MAX_SIZE;
    const GREEDY: bool = D::GREEDY;
}

impl<E: Endian, O: Endian, D: Item<O>> Item<E> for Endianed<O, D> {
    #[inline]
    fn encode_size(value: &D::Value) -> usize {
        <D as Item<O>>::encode_size(value)
    }

    #[inline]
    fn write(value: &D::Value, buf: &mut impl BufMut) {
        <D as Item<O>>::write(value, buf);
    }

    #[inline]
    fn read(reader: &mut Reader<'_>) -> Result<D::Value, ErrorRecord> {
        <D as Item<O>>::read(reader)
    }
}
