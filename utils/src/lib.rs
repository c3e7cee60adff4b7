//! Leverage common functionality across declwire crates.
//!
//! - [`Either`]: a value that is exactly one of two heterogeneous types, with success on the
//!   left ([`EitherExt`], [`from_result`]).
//! - [`assemble_optionals`] and [`assemble_left_collect_right`]: combine several independent
//!   results into one aggregate value (or one aggregate failure).

pub mod assemble;
pub mod either;

pub use assemble::{
    assemble_left_collect_right, assemble_optionals, AssembleOptionals, CollectRight,
    EmptyAssembly,
};
pub use self::either::{from_result, Either, EitherExt};
