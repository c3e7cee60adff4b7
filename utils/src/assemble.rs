//! Combine independent results into one aggregate.
//!
//! Both helpers take a tuple (arity 1 through 12) and report either the tuple of every
//! successful value or a single aggregate failure:
//!
//! - [`assemble_optionals`] turns `(Option<A>, Option<B>, ..)` into `Either<(A, B, ..), EmptyAssembly>`.
//! - [`assemble_left_collect_right`] turns `(Either<A, E>, Either<B, E>, ..)` into
//!   `Either<(A, B, ..), heapless::Vec<E, ARITY>>`, collecting every error instead of stopping at
//!   the first one.
//!
//! # Example
//!
//! ```
//! use declwire_utils::{assemble_left_collect_right, Either};
//!
//! let parsed = (
//!     Either::<u8, &str>::Left(1),
//!     Either::<bool, &str>::Right("bad flag"),
//!     Either::<u16, &str>::Right("bad length"),
//! );
//! let errors = assemble_left_collect_right(parsed).right().unwrap();
//! assert_eq!(errors.as_slice(), &["bad flag", "bad length"]);
//! ```

use crate::Either;
use paste::paste;

/// Marks an assembly where at least one input was missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyAssembly;

/// Tuples of [`Option`]s that can be assembled into a tuple of values.
pub trait AssembleOptionals {
    /// The tuple of unwrapped values.
    type Output;

    /// Returns every value if all are present, otherwise [`EmptyAssembly`].
    fn assemble(self) -> Either<Self::Output, EmptyAssembly>;
}

/// Tuples of [`Either`]s sharing one right-hand type.
pub trait CollectRight {
    /// The tuple of left values.
    type Output;

    /// The bounded collection of right values (capacity equals the tuple arity).
    type Collection;

    /// Returns every left value if all inputs are left, otherwise every right value found.
    fn assemble(self) -> Either<Self::Output, Self::Collection>;
}

/// Returns the tuple of all values iff every input is present.
pub fn assemble_optionals<T: AssembleOptionals>(optionals: T) -> Either<T::Output, EmptyAssembly> {
    optionals.assemble()
}

/// Returns the tuple of all left values, or every right value encountered (in input order).
pub fn assemble_left_collect_right<T: CollectRight>(
    eithers: T,
) -> Either<T::Output, T::Collection> {
    eithers.assemble()
}

macro_rules! impl_assemble_for_tuple {
    ($arity:literal; $($index:literal),*) => {
        paste! {
            impl<$( [<T $index>] ),*> AssembleOptionals for ( $( Option<[<T $index>]>, )* ) {
                type Output = ( $( [<T $index>], )* );

                #[inline]
                fn assemble(self) -> Either<Self::Output, EmptyAssembly> {
                    match self {
                        ( $( Some([<v $index>]), )* ) => Either::Left(( $( [<v $index>], )* )),
                        _ => Either::Right(EmptyAssembly),
                    }
                }
            }

            impl<E, $( [<T $index>] ),*> CollectRight for ( $( Either<[<T $index>], E>, )* ) {
                type Output = ( $( [<T $index>], )* );
                type Collection = heapless::Vec<E, $arity>;

                fn assemble(self) -> Either<Self::Output, Self::Collection> {
                    let mut collection = heapless::Vec::new();
                    let optionals = ( $(
                        match self.$index {
                            Either::Left(value) => Some(value),
                            Either::Right(error) => {
                                // Capacity equals the arity, so this never overflows.
                                let _ = collection.push(error);
                                None
                            }
                        },
                    )* );
                    assemble_optionals(optionals).map_right(|EmptyAssembly| collection)
                }
            }
        }
    };
}

impl_assemble_for_tuple!(1; 0);
impl_assemble_for_tuple!(2; 0, 1);
impl_assemble_for_tuple!(3; 0, 1, 2);
impl_assemble_for_tuple!(4; 0, 1, 2, 3);
impl_assemble_for_tuple!(5; 0, 1, 2, 3, 4);
impl_assemble_for_tuple!(6; 0, 1, 2, 3, 4, 5);
impl_assemble_for_tuple!(7; 0, 1, 2, 3, 4, 5, 6);
impl_assemble_for_tuple!(8; 0, 1, 2, 3, 4, 5, 6, 7);
impl_assemble_for_tuple!(9; 0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_assemble_for_tuple!(10; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_assemble_for_tuple!(11; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_assemble_for_tuple!(12; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
