//! Error types for businesstime.
//!
//! Every failure in this library is a caller mistake (a malformed window, a
//! negative day count, an unknown zone name) and is reported immediately.
//! The [`ensure!`](crate::ensure) macro is the shorthand used for argument
//! checks.

use thiserror::Error;

/// The top-level error type used throughout businesstime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A time zone name that the zone database does not know.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Shorthand `Result` type used throughout businesstime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bt_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
