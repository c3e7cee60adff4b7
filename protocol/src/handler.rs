//! Registers: keyed values stored in fixed-size messages.
//!
//! A device protocol often exposes a table of registers, each identified by a key and holding a
//! value of one declared type. [`Register`] describes one such entry and [`RegisterHandler`]
//! moves register values in and out of [`Message`]s of a shared capacity.

use crate::{
    decl::Fits, BigEndian, Decl, Endian, Either, ErrorRecord, Item, Message,
};
use core::marker::PhantomData;
use tracing::{debug, trace};

/// A register: a key, a human-readable name and the declaration of its value.
pub trait Register {
    /// Identifier of the register on the wire.
    const KEY: u16;

    /// Name used when logging.
    const NAME: &'static str;

    /// Declaration of the register's value.
    type Declaration: Decl;
}

/// The value type stored in register `R`.
pub type RegisterValue<R> = <<R as Register>::Declaration as Decl>::Value;

/// Serializes and extracts register values using messages of capacity `N` and byte order `E`.
///
/// Every register used with a handler must fit in `N` bytes; this is checked when the program is
/// built.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegisterHandler<const N: usize, E = BigEndian>(PhantomData<E>);

impl<const N: usize, E: Endian> RegisterHandler<N, E> {
    /// Encodes the value of register `R`.
    pub fn serialize<R: Register>(value: &RegisterValue<R>) -> Message<N>
    where
        R::Declaration: Item<E>,
    {
        let message = <R::Declaration as Item<E>>::serialize::<N>(value);
        trace!(
            key = R::KEY,
            name = R::NAME,
            size = message.size(),
            "serialized register"
        );
        message
    }

    /// Decodes the value of register `R` from `message`.
    ///
    /// Bytes after the value are ignored.
    pub fn extract<R: Register>(message: &Message<N>) -> Either<RegisterValue<R>, ErrorRecord>
    where
        R::Declaration: Item<E>,
    {
        let () = Fits::<R::Declaration, N>::OK;
        match <R::Declaration as Item<E>>::deserialize(message.as_slice()) {
            Ok(decoded) => Either::Left(decoded.value),
            Err(err) => {
                debug!(key = R::KEY, name = R::NAME, ?err, "failed to extract register");
                Either::Right(err)
            }
        }
    }
}
