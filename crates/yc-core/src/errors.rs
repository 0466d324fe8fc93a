//! Error types for yearcal.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. The grid engine itself is total over well-formed input; errors
//! surface only from constructors and parsers (dates, periods, locales).
//! Preconditions are checked with the [`ensure!`] macro.

use thiserror::Error;

/// The top-level error type used throughout yearcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range year, month or day).
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

impl Error {
    /// Build an [`Error::Parse`] from anything string-like.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout yearcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> yc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
