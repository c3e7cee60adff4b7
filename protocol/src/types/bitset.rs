//! Fixed-size sets of bits.
//!
//! A [`BitSet<N>`] is encoded in `ceil(N / 8)` bytes. Bit `i` is stored in byte `i / 8` at
//! position `i % 8` (least significant first). Unused high bits of the last byte are written as
//! zero and ignored when reading. Byte order does not apply.

use crate::{Decl, Endian, ErrorRecord, Item, Reader};
use bytes::BufMut;
use core::fmt;

/// A set of `N` bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> BitSet<N> {
    /// Number of bytes taken by the encoding.
    pub const BYTES: usize = N.div_ceil(8);

    /// Creates a set with every bit cleared.
    pub const fn new() -> Self {
        Self { bits: [false; N] }
    }

    /// Returns the number of bits.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the set holds no bits at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the bit at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < N, "index out of bounds: {index} >= {N}");
        self.bits[index] = value;
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Iterates over every bit in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    fn byte(&self, block: usize) -> u8 {
        self.bits
            .iter()
            .skip(block * 8)
            .take(8)
            .enumerate()
            .fold(0, |acc, (i, bit)| acc | (u8::from(*bit) << i))
    }
}

impl<const N: usize> Default for BitSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[bool; N]> for BitSet<N> {
    fn from(bits: [bool; N]) -> Self {
        Self { bits }
    }
}

impl<const N: usize> fmt::Debug for BitSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet<{N}>(")?;
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}

impl<const N: usize> Decl for BitSet<N> {
    type Value = Self;
    const MIN_SIZE: usize = Self::BYTES;
    const MAX_SIZE: usize = Self::BYTES;
}

impl<E: Endian, const N: usize> Item<E> for BitSet<N> {
    #[inline]
    fn encode_size(_: &Self) -> usize {
        Self::BYTES
    }

    fn write(value: &Self, buf: &mut impl BufMut) {
        for block in 0..Self::BYTES {
            buf.put_u8(value.byte(block));
        }
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, ErrorRecord> {
        let bytes = reader.take(Self::BYTES)?;
        let mut set = Self::new();
        for (index, bit) in set.bits.iter_mut().enumerate() {
            *bit = (bytes[index / 8] & (1 << (index % 8))) != 0;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian, Mark};

    #[test]
    fn test_bits() {
        let mut set = BitSet::<10>::new();
        assert_eq!(set.len(), 10);
        assert_eq!(set.count_ones(), 0);
        set.set(0, true);
        set.set(9, true);
        assert_eq!(set.get(0), Some(true));
        assert_eq!(set.get(1), Some(false));
        assert_eq!(set.get(10), None);
        assert_eq!(set.count_ones(), 2);
        set.set(0, false);
        assert_eq!(set.count_ones(), 1);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_set_out_of_bounds() {
        BitSet::<4>::new().set(4, true);
    }

    #[test]
    fn test_encoding() {
        let mut set = BitSet::<10>::new();
        set.set(0, true);
        set.set(3, true);
        set.set(9, true);
        let encoded = <BitSet<10> as Item<BigEndian>>::encode(&set);
        assert_eq!(encoded, &[0b0000_1001, 0b0000_0010][..]);

        // Byte order does not apply
        assert_eq!(<BitSet<10> as Item<LittleEndian>>::encode(&set), encoded);

        let decoded = <BitSet<10> as Item<BigEndian>>::deserialize(&encoded).unwrap();
        assert_eq!(decoded.used, 2);
        assert_eq!(decoded.value, set);
    }

    #[test]
    fn test_padding_ignored() {
        let decoded = <BitSet<4> as Item<BigEndian>>::deserialize(&[0xF3]).unwrap();
        assert_eq!(decoded.value, BitSet::from([true, true, false, false]));
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            <BitSet<9> as Item<BigEndian>>::deserialize(&[0xFF]),
            Err(ErrorRecord::new(Mark::BufferTooShort, 0))
        );
    }

    #[test]
    fn test_debug() {
        let set = BitSet::from([true, false, true]);
        assert_eq!(format!("{set:?}"), "BitSet<3>(101)");
    }
}
