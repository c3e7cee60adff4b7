//! Declarations provided by this crate.
//!
//! Primitives, arrays, tuples and `heapless::Vec` are declared directly on the Rust types. The
//! remaining declarations are marker types defined here.

pub mod array;
pub mod bitset;
pub mod bounded;
pub mod buffer;
pub mod constant;
pub mod endianed;
pub mod offset;
pub mod primitives;
pub mod record;
pub mod tuple;
pub mod vec;
