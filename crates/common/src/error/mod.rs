//! Error handling for the wordcrypt crates

use std::borrow::Cow;
use std::fmt;

/// The error type shared by all wordcrypt crates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed input while decoding a string encoding
    Decoding {
        /// The encoding that rejected the input
        encoding: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// The platform's cryptographically secure random source is unavailable
    /// or failed. This is always fatal; it is never downgraded to a
    /// non-cryptographic fallback.
    RandomSource {
        /// Additional details about the failure
        details: &'static str,
    },

    /// Serialized-ciphertext parse failure
    Format {
        /// Format being parsed
        context: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for wordcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Decoding { encoding, details } => {
                write!(f, "Malformed {} input: {}", encoding, details)
            }
            Error::RandomSource { details } => {
                write!(f, "Secure random source unavailable: {}", details)
            }
            Error::Format { context, details } => {
                write!(f, "Cannot parse {} data: {}", context, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
