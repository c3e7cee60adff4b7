//! Error types for decode operations

use thiserror::Error;

/// Classification of a decode failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    #[error("buffer too short")]
    BufferTooShort,
    #[error("unknown discriminant tag")]
    UnknownTag,
    #[error("value out of declared bounds")]
    OutOfBounds,
    #[error("no alternative matched")]
    NoAlternativeMatched,
    #[error("counter exceeds remaining buffer")]
    CounterExceedsBuffer,
    #[error("capacity exceeded")]
    CapacityExceeded,
    #[error("bad value")]
    BadValue,
}

impl Mark {
    /// Returns the single-byte wire code of this mark.
    pub const fn code(self) -> u8 {
        match self {
            Self::BufferTooShort => 1,
            Self::UnknownTag => 2,
            Self::OutOfBounds => 3,
            Self::NoAlternativeMatched => 4,
            Self::CounterExceedsBuffer => 5,
            Self::CapacityExceeded => 6,
            Self::BadValue => 7,
        }
    }

    /// Returns the mark with the given wire code, if any.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => Self::BufferTooShort,
            2 => Self::UnknownTag,
            3 => Self::OutOfBounds,
            4 => Self::NoAlternativeMatched,
            5 => Self::CounterExceedsBuffer,
            6 => Self::CapacityExceeded,
            7 => Self::BadValue,
            _ => return None,
        })
    }
}

/// A decode failure: what went wrong and where.
///
/// `offset` is measured in bytes from the start of the buffer handed to the outermost decode,
/// never from the start of the field that failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{mark} at offset {offset}")]
pub struct ErrorRecord {
    pub mark: Mark,
    pub offset: usize,
}

impl ErrorRecord {
    /// Creates a new record.
    pub const fn new(mark: Mark, offset: usize) -> Self {
        Self { mark, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_codes() {
        let marks = [
            Mark::BufferTooShort,
            Mark::UnknownTag,
            Mark::OutOfBounds,
            Mark::NoAlternativeMatched,
            Mark::CounterExceedsBuffer,
            Mark::CapacityExceeded,
            Mark::BadValue,
        ];
        for mark in marks {
            assert_eq!(Mark::from_code(mark.code()), Some(mark));
        }
        assert_eq!(Mark::from_code(0), None);
        assert_eq!(Mark::from_code(8), None);
    }

    #[test]
    fn test_display() {
        let record = ErrorRecord::new(Mark::UnknownTag, 3);
        assert_eq!(record.to_string(), "unknown discriminant tag at offset 3");
    }
}
