//! Fixed-capacity byte buffers.
//!
//! [`Message<N>`] is an `[u8; N]` that remembers how many of its bytes are in use. Only the used
//! prefix is visible: iteration, slicing and equality never look at the unused tail.
//!
//! [`SizelessMessage<N>`] stores the same data but is encoded differently. A [`Message`] is
//! preceded on the wire by its length, while a sizeless message has no length and consumes the
//! rest of the enclosing buffer when decoded. It can therefore only be the last field of a
//! composite (enforced when the composite is built).

use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

/// Build-time check that a message of capacity `M` fits in one of capacity `N`.
struct Widen<const M: usize, const N: usize>(PhantomData<[u8; M]>);

impl<const M: usize, const N: usize> Widen<M, N> {
    const OK: () = assert!(M <= N, "source message capacity exceeds target capacity");
}

/// A byte buffer of capacity `N` with a tracked used length.
#[derive(Clone, Copy)]
pub struct Message<const N: usize> {
    data: [u8; N],
    used: usize,
}

impl<const N: usize> Message<N> {
    /// Capacity of the message in bytes.
    pub const CAPACITY: usize = N;

    /// Creates an empty message.
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            used: 0,
        }
    }

    /// Copies `bytes` into a new message.
    ///
    /// Returns `None` if `bytes` is longer than the capacity.
    pub fn make(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N {
            return None;
        }
        let mut data = [0; N];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            data,
            used: bytes.len(),
        })
    }

    /// Creates a message holding all of `bytes`.
    ///
    /// Fails to build if `M > N`.
    pub fn from_array<const M: usize>(bytes: [u8; M]) -> Self {
        let () = Widen::<M, N>::OK;
        let mut data = [0; N];
        data[..M].copy_from_slice(&bytes);
        Self { data, used: M }
    }

    /// Wraps a buffer whose first `used` bytes are meaningful.
    pub(crate) fn from_parts(data: [u8; N], used: usize) -> Self {
        debug_assert!(used <= N);
        Self { data, used }
    }

    /// Copies this message into one with a capacity at least as large.
    ///
    /// Fails to build if `M < N`.
    pub fn widen<const M: usize>(&self) -> Message<M> {
        let () = Widen::<N, M>::OK;
        let mut data = [0; M];
        data[..self.used].copy_from_slice(self.as_slice());
        Message {
            data,
            used: self.used,
        }
    }

    /// Returns the used bytes, zero-padded to `M` bytes.
    ///
    /// Fails to build if `M < N`.
    pub fn to_array<const M: usize>(&self) -> [u8; M] {
        self.widen::<M>().data
    }

    /// Returns the number of used bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.used
    }

    /// Returns the first used byte.
    #[inline]
    pub fn front(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    /// Returns the last used byte.
    #[inline]
    pub fn back(&self) -> Option<u8> {
        self.as_slice().last().copied()
    }

    /// Returns the used bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.used]
    }

    /// Returns the used bytes, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.used]
    }
}

impl<const N: usize> Default for Message<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for Message<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> DerefMut for Message<N> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl<const N: usize> AsRef<[u8]> for Message<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Message<N> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<const N: usize, const M: usize> PartialEq<Message<M>> for Message<N> {
    fn eq(&self, other: &Message<M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for Message<N> {}

impl<const N: usize> fmt::Debug for Message<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.as_slice()).finish()
    }
}

/// A [`Message`] encoded without a length, consuming the rest of the input when decoded.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SizelessMessage<const N: usize>(Message<N>);

impl<const N: usize> SizelessMessage<N> {
    /// Creates an empty message.
    pub const fn new() -> Self {
        Self(Message::new())
    }

    /// Copies `bytes` into a new message.
    ///
    /// Returns `None` if `bytes` is longer than the capacity.
    pub fn make(bytes: &[u8]) -> Option<Self> {
        Message::make(bytes).map(Self)
    }

    /// Returns the underlying message.
    pub fn into_inner(self) -> Message<N> {
        self.0
    }
}

impl<const N: usize, const M: usize> From<&Message<M>> for SizelessMessage<N> {
    /// Fails to build if `M > N`.
    fn from(message: &Message<M>) -> Self {
        Self(message.widen())
    }
}

impl<const N: usize> Deref for SizelessMessage<N> {
    type Target = Message<N>;

    fn deref(&self) -> &Message<N> {
        &self.0
    }
}

impl<const N: usize> DerefMut for SizelessMessage<N> {
    fn deref_mut(&mut self) -> &mut Message<N> {
        &mut self.0
    }
}

impl<const N: usize> fmt::Debug for SizelessMessage<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SizelessMessage")
            .field(&self.0.as_slice())
            .finish()
    }
}
