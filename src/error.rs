//! Error types.

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// The failure cases for parameter generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The supplied modulus word array was empty or decoded to zero.
    ///
    /// The derivation is undefined for `N = 0`.
    ZeroModulus,

    /// The value being encoded does not fit the requested word width.
    Truncated {
        /// Bit length of the value that was being encoded.
        bits: u64,
        /// Requested output width in 32-bit words.
        width: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => f.write_str("modulus must be a positive integer"),
            Self::Truncated { bits, width } => write!(
                f,
                "value of {bits} bits does not fit in {width} 32-bit words"
            ),
        }
    }
}

impl core::error::Error for Error {}
