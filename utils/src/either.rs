//! Success/failure carrier built on the `either` crate.
//!
//! declwire uses [`Either`] with the successful payload on the left and the error on the right.
//! The `either` crate's own `Result` conversions put `Ok` on the right, so [`from_result`] and
//! [`EitherExt::into_result`] are provided to keep success on the left.
//!
//! [`EitherExt`] names the side-preserving transforms the way the rest of declwire uses them:
//! [`EitherExt::convert_left`], [`EitherExt::bind_left`], [`EitherExt::match_with`] and
//! [`EitherExt::join`] (plus their right-hand counterparts).

pub use ::either::Either;

/// Converts a [`Result`], placing `Ok` on the left.
#[inline]
pub fn from_result<L, R>(result: Result<L, R>) -> Either<L, R> {
    match result {
        Ok(left) => Either::Left(left),
        Err(right) => Either::Right(right),
    }
}

/// Side-preserving transforms over [`Either`].
pub trait EitherExt<L, R>: Sized {
    /// Applies `f` to the left value, passing the right value through untouched.
    fn convert_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R>;

    /// Applies `f` to the right value, passing the left value through untouched.
    fn convert_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T>;

    /// Chains a fallible step on the left value; a right value short-circuits.
    fn bind_left<T>(self, f: impl FnOnce(L) -> Either<T, R>) -> Either<T, R>;

    /// Chains a step on the right value; a left value short-circuits.
    fn bind_right<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T>;

    /// Invokes exactly one of the two handlers and returns its output.
    fn match_with<T>(self, left_f: impl FnOnce(L) -> T, right_f: impl FnOnce(R) -> T) -> T;

    /// Converts into a [`Result`], treating the left side as success.
    fn into_result(self) -> Result<L, R>;

    /// Returns whichever value is present. Only callable when both sides share one type.
    fn join(self) -> L
    where
        Self: Into<Either<L, L>>;
}

impl<L, R> EitherExt<L, R> for Either<L, R> {
    #[inline]
    fn convert_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        self.map_left(f)
    }

    #[inline]
    fn convert_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        self.map_right(f)
    }

    #[inline]
    fn bind_left<T>(self, f: impl FnOnce(L) -> Either<T, R>) -> Either<T, R> {
        self.left_and_then(f)
    }

    #[inline]
    fn bind_right<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        self.right_and_then(f)
    }

    #[inline]
    fn match_with<T>(self, left_f: impl FnOnce(L) -> T, right_f: impl FnOnce(R) -> T) -> T {
        self.either(left_f, right_f)
    }

    #[inline]
    fn into_result(self) -> Result<L, R> {
        self.either(Ok, Err)
    }

    #[inline]
    fn join(self) -> L
    where
        Self: Into<Either<L, L>>,
    {
        let either: Either<L, L> = self.into();
        either.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_left() {
        let left: Either<u32, &str> = Either::Left(1);
        let right: Either<u32, &str> = Either::Right("error");
        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(!right.is_left());
        assert!(right.is_right());
    }

    #[test]
    fn test_convert_left() {
        let left: Either<u32, &str> = Either::Left(21);
        assert_eq!(left.convert_left(|v| v * 2), Either::Left(42));

        // The right side is passed through and the closure is not called.
        let right: Either<u32, &str> = Either::Right("error");
        let converted = right.convert_left(|_| -> u64 { panic!("must not be called") });
        assert_eq!(converted, Either::Right("error"));
    }

    #[test]
    fn test_convert_right() {
        let right: Either<u32, &str> = Either::Right("error");
        assert_eq!(right.convert_right(str::len), Either::Right(5));

        let left: Either<u32, &str> = Either::Left(7);
        assert_eq!(left.convert_right(str::len), Either::Left(7));
    }

    #[test]
    fn test_bind_left() {
        let halve = |v: u32| -> Either<u32, &'static str> {
            if v % 2 == 0 {
                Either::Left(v / 2)
            } else {
                Either::Right("odd")
            }
        };
        assert_eq!(Either::Left(8).bind_left(halve), Either::Left(4));
        assert_eq!(Either::Left(7).bind_left(halve), Either::Right("odd"));
        assert_eq!(
            Either::<u32, &str>::Right("early").bind_left(halve),
            Either::Right("early")
        );
    }

    #[test]
    fn test_bind_right() {
        let recover = |e: &'static str| -> Either<u32, usize> {
            if e.is_empty() {
                Either::Left(0)
            } else {
                Either::Right(e.len())
            }
        };
        assert_eq!(Either::<u32, &str>::Right("").bind_right(recover), Either::Left(0));
        assert_eq!(Either::<u32, &str>::Right("abc").bind_right(recover), Either::Right(3));
        assert_eq!(Either::<u32, &str>::Left(9).bind_right(recover), Either::Left(9));
    }

    #[test]
    fn test_match_with() {
        let mut calls = Vec::new();
        Either::<u8, u16>::Left(3).match_with(|l| calls.push(l as u32), |_| unreachable!());
        Either::<u8, u16>::Right(300).match_with(|_| unreachable!(), |r| calls.push(r as u32));
        assert_eq!(calls, vec![3, 300]);
    }

    #[test]
    fn test_join() {
        assert_eq!(Either::<u8, u8>::Left(1).join(), 1);
        assert_eq!(Either::<u8, u8>::Right(2).join(), 2);
    }

    #[test]
    fn test_result_conversion() {
        // Success stays on the left in both directions.
        let either = from_result::<u8, &str>(Ok(5));
        assert_eq!(either, Either::Left(5));
        assert_eq!(either.into_result(), Ok(5));

        let err = from_result::<u8, &str>(Err("bad"));
        assert_eq!(err, Either::Right("bad"));
        assert_eq!(err.into_result(), Err("bad"));
    }

    #[test]
    fn test_left_right_accessors() {
        let left: Either<u8, &str> = Either::Left(1);
        assert_eq!(left.as_ref(), Either::Left(&1));
        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);

        let right: Either<u8, &str> = Either::Right("e");
        assert_eq!(right.left(), None);
        assert_eq!(right.right(), Some("e"));
    }
}
