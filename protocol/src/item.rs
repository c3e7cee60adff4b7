//! Core serialization traits

use crate::{
    decl::{Decl, Fits},
    endian::Endian,
    error::{ErrorRecord, Mark},
    message::Message,
};
use bytes::{BufMut, BytesMut};

/// Read position within a buffer being decoded.
///
/// Remembers where the outermost buffer ends so that every failure can be reported as an offset
/// from the start of that buffer, however deep the failing field is nested.
#[derive(Clone, Copy, Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            end: buf.len(),
        }
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.end - self.buf.len()
    }

    /// Returns the number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Returns an error record for `mark` at the current position.
    #[inline]
    pub fn error(&self, mark: Mark) -> ErrorRecord {
        ErrorRecord::new(mark, self.offset())
    }

    /// Ensures at least `len` bytes remain.
    #[inline]
    pub fn require(&self, len: usize) -> Result<(), ErrorRecord> {
        if self.remaining() < len {
            return Err(self.error(Mark::BufferTooShort));
        }
        Ok(())
    }

    /// Returns the unread bytes as a [`bytes::Buf`].
    ///
    /// Callers must [`Reader::require`] enough bytes first; `Buf` getters panic on underflow.
    #[inline]
    pub fn buf(&mut self) -> &mut &'a [u8] {
        &mut self.buf
    }

    /// Consumes and returns the next `len` bytes.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], ErrorRecord> {
        self.require(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Consumes the next `len` bytes and returns a reader confined to them.
    ///
    /// Offsets reported by the returned reader stay relative to the outermost buffer.
    #[inline]
    pub fn limit(&mut self, len: usize) -> Result<Reader<'a>, ErrorRecord> {
        let start = self.offset();
        let buf = self.take(len)?;
        Ok(Reader {
            buf,
            end: start + len,
        })
    }
}

/// A successfully decoded value and the number of bytes it occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded<V> {
    /// Bytes consumed from the front of the input. Trailing bytes past this are ignored.
    pub used: usize,
    /// The decoded value.
    pub value: V,
}

/// Trait for declarations that can be written to and read from a buffer under byte order `E`.
pub trait Item<E: Endian>: Decl {
    /// Returns the exact number of bytes that [`Item::write`] produces for `value`.
    fn encode_size(value: &Self::Value) -> usize;

    /// Encodes `value` by writing to a buffer.
    ///
    /// Implementations panic if the buffer doesn't have enough capacity.
    fn write(value: &Self::Value, buf: &mut impl BufMut);

    /// Reads a value, consuming the bytes it occupies.
    ///
    /// On failure nothing is returned but the record; the reader position is unspecified.
    fn read(reader: &mut Reader<'_>) -> Result<Self::Value, ErrorRecord>;

    /// Writes `value` at the start of `buf` and returns the number of bytes written.
    ///
    /// Panics if `buf` is shorter than [`Decl::MAX_SIZE`].
    ///
    /// (Provided method).
    fn serialize_at(buf: &mut [u8], value: &Self::Value) -> usize {
        assert!(
            buf.len() >= Self::MAX_SIZE,
            "Can't serialize {} bytes into {} bytes",
            Self::MAX_SIZE,
            buf.len()
        );
        let total = buf.len();
        let mut rest = buf;
        Self::write(value, &mut rest);
        total - rest.len()
    }

    /// Decodes a value from the start of `buf`.
    ///
    /// Trailing bytes after the value are left alone; [`Decoded::used`] tells how many were read.
    ///
    /// (Provided method).
    fn deserialize(buf: &[u8]) -> Result<Decoded<Self::Value>, ErrorRecord> {
        let mut reader = Reader::new(buf);
        let value = Self::read(&mut reader)?;
        Ok(Decoded {
            used: reader.offset(),
            value,
        })
    }

    /// Encodes `value` to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(value: &Self::Value) -> BytesMut {
        let len = Self::encode_size(value);
        let mut buffer = BytesMut::with_capacity(len);
        Self::write(value, &mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }

    /// Encodes `value` into a message of capacity `N`.
    ///
    /// Fails to build if `N` is smaller than [`Decl::MAX_SIZE`].
    ///
    /// (Provided method).
    fn serialize<const N: usize>(value: &Self::Value) -> Message<N> {
        let () = Fits::<Self, N>::OK;
        let mut data = [0u8; N];
        let used = Self::serialize_at(&mut data, value);
        Message::from_parts(data, used)
    }
}
