//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised when a caller violates an operation's preconditions.
///
/// All failures are contract violations detected before any work is done,
/// so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument did not satisfy the operation's requirements.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Return early with an [`Error::InvalidArgument`] built from a format string.
macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::InvalidArgument(format!($($arg)*)))
    };
}

pub(crate) use invalid;
