//! Declare fixed-format binary messages and serialize them byte-exactly.
//!
//! # Overview
//!
//! Messages exchanged with constrained peers (firmware, test rigs, sensor buses) have a layout
//! known entirely in advance. This crate lets that layout be written down once, as Rust types,
//! and derives from it:
//!
//! - the decoded value type of every message ([`Decl::Value`]),
//! - its footprint, as build-time constants ([`Decl::MIN_SIZE`] and [`Decl::MAX_SIZE`]),
//! - an encoder and a decoder for a chosen byte order ([`Item`]).
//!
//! Decoding never panics on malformed input. It returns an [`ErrorRecord`] naming what went
//! wrong ([`Mark`]) and the offset, from the start of the input, where it was detected.
//! Encoding has no error path: buffers are sized from [`Decl::MAX_SIZE`] at build time.
//!
//! # Supported Declarations
//!
//! - Scalars: `u8`..`u128`, `i8`..`i128`, `f32`, `f64`
//! - Composites: tuples, `[D; N]`, and the [`protocol_struct!`], [`protocol_enum!`] and
//!   [`protocol_group!`] macros
//! - Collections: `heapless::Vec<D, N>`, [`BitSet<N>`], [`SizedBuffer<C, D>`], [`Message<N>`],
//!   [`SizelessMessage<N>`]
//! - Wrappers: [`Bounded<T, MIN, MAX>`], [`Constant<D, V>`], [`Endianed<O, D>`], [`Offset<D, OFF>`]
//! - Failures: [`Mark`] and [`ErrorRecord`]
//!
//! # Example
//!
//! ```
//! use declwire_protocol::{
//!     protocol_enum, protocol_struct, BigEndian, Bounded, Decl, ErrorRecord, Item, Mark,
//! };
//!
//! protocol_enum! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Setting {
//!         Gain(Bounded<u8, 1, 64>),
//!         Offset(i16),
//!     }
//! }
//!
//! protocol_struct! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Request {
//!         pub channel: u8,
//!         pub setting: Setting,
//!     }
//! }
//!
//! assert_eq!(Request::MIN_SIZE, 3);
//! assert_eq!(Request::MAX_SIZE, 4);
//!
//! let request = Request { channel: 3, setting: Setting::Offset(-2) };
//! let message = <Request as Item<BigEndian>>::serialize::<8>(&request);
//! assert_eq!(message.as_slice(), &[0x03, 0x01, 0xFF, 0xFE]);
//!
//! let decoded = <Request as Item<BigEndian>>::deserialize(&message).unwrap();
//! assert_eq!(decoded.value, request);
//!
//! // A gain of 0 is outside its bounds.
//! assert_eq!(
//!     <Request as Item<BigEndian>>::deserialize(&[0x03, 0x00, 0x00]),
//!     Err(ErrorRecord::new(Mark::OutOfBounds, 2)),
//! );
//! ```

pub mod decl;
pub mod endian;
pub mod error;
pub mod handler;
pub mod item;
mod macros;
pub mod message;
pub mod types;

pub use decl::{is_fixed, Decl};
pub use declwire_utils::{Either, EitherExt};
pub use endian::{BigEndian, Endian, Endianness, LittleEndian};
pub use error::{ErrorRecord, Mark};
pub use handler::{Register, RegisterHandler, RegisterValue};
pub use item::{Decoded, Item, Reader};
pub use message::{Message, SizelessMessage};
pub use types::{
    bitset::BitSet,
    bounded::Bounded,
    buffer::SizedBuffer,
    constant::Constant,
    endianed::Endianed,
    offset::Offset,
    primitives::{Integer, Unsigned},
};

#[doc(hidden)]
pub mod __private {
    pub use bytes::BufMut;
}
