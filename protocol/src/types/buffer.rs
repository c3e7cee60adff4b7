//! Declarations for byte buffers.
//!
//! - [`SizedBuffer<C, D>`] frames any declaration `D` with a leading byte count of type `C`.
//! - [`Message<N>`] is framed with a 16-bit byte count.
//! - [`SizelessMessage<N>`] has no count and takes every remaining byte.

use crate::{
    decl::Layout,
    message::{Message, SizelessMessage},
    Decl, Endian, ErrorRecord, Item, Mark, Reader, Unsigned,
};
use bytes::BufMut;
use core::marker::PhantomData;

/// Build-time check that every encoding of `D` can be counted by `C`.
struct CounterFits<C, D>(PhantomData<(C, D)>);

impl<C: Unsigned, D: Decl> CounterFits<C, D> {
    const OK: () = assert!(
        D::MAX_SIZE as u64 <= C::LIMIT,
        "payload max size exceeds counter range"
    );
}

/// Reads a byte count of type `C` and checks it against the remaining input.
fn read_count<E: Endian, C: Unsigned + Item<E>>(
    reader: &mut Reader<'_>,
) -> Result<usize, ErrorRecord> {
    let start = reader.offset();
    let count = C::read(reader)?.to_u64();
    match usize::try_from(count) {
        Ok(count) if count <= reader.remaining() => Ok(count),
        _ => Err(ErrorRecord::new(Mark::CounterExceedsBuffer, start)),
    }
}

/// `D` preceded by the number of bytes its encoding takes, stored as a `C`.
///
/// Decodes to `D::Value`. Bytes inside the frame that `D` does not consume are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizedBuffer<C, D>(PhantomData<(C, D)>);

impl<C: Unsigned, D: Decl> Decl for SizedBuffer<C, D> {
    type Value = D::Value;
    const MIN_SIZE: usize = C::MIN_SIZE + D::MIN_SIZE;
    const MAX_SIZE: usize = C::MAX_SIZE + D::MAX_SIZE;
}

impl<E, C, D> Item<E> for SizedBuffer<C, D>
where
    E: Endian,
    C: Unsigned + Item<E>,
    D: Item<E>,
{
    #[inline]
    fn encode_size(value: &D::Value) -> usize {
        C::MAX_SIZE + D::encode_size(value)
    }

    fn write(value: &D::Value, buf: &mut impl BufMut) {
        let () = CounterFits::<C, D>::OK;
        let len = D::encode_size(value) as u64;
        C::write(&C::from_u64(len), buf);
        D::write(value, buf);
    }

    fn read(reader: &mut Reader<'_>) -> Result<D::Value, ErrorRecord> {
        let count = read_count::<E, C>(reader)?;
        let mut payload = reader.limit(count)?;
        D::read(&mut payload)
    }
}

impl<const N: usize> Decl for Message<N> {
    type Value = Self;
    const MIN_SIZE: usize = u16::MIN_SIZE;
    const MAX_SIZE: usize = {
        assert!(N <= u16::MAX as usize, "message capacity exceeds 16-bit count");
        u16::MAX_SIZE + N
    };
}

impl<E: Endian, const N: usize> Item<E> for Message<N> {
    #[inline]
    fn encode_size(value: &Self) -> usize {
        u16::MAX_SIZE + value.size()
    }

    fn write(value: &Self, buf: &mut impl BufMut) {
        let () = Layout::<Self>::OK;
        <u16 as Item<E>>::write(&(value.size() as u16), buf);
        buf.put_slice(value.as_slice());
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let () = Layout::<Self>::OK;
        let start = reader.offset();
        let count = read_count::<E, u16>(reader)?;
        let bytes = reader.take(count)?;
        Message::make(bytes).ok_or(ErrorRecord::new(Mark::CapacityExceeded, start))
    }
}

impl<const N: usize> Decl for SizelessMessage<N> {
    type Value = Self;
    const MIN_SIZE: usize = 0;
    const MAX_SIZE: usize = N;
    const GREEDY: bool = true;
}

impl<E: Endian, const N: usize> Item<E> for SizelessMessage<N> {
    #[inline]
    fn encode_size(value: &Self) -> usize {
        value.size()
    }

    fn write(value: &Self, buf: &mut impl BufMut) {
        buf.put_slice(value.as_slice());
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let start = reader.offset();
        let bytes = reader.take(reader.remaining())?;
        SizelessMessage::make(bytes).ok_or(ErrorRecord::new(Mark::CapacityExceeded, start))
    }
}
