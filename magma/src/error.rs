use core::fmt;

/// Result type with the `magma` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by cipher construction and the slice-based block helpers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Key is not exactly 32 bytes long.
    InvalidKeyLength,

    /// Key consists of zero bytes only.
    InvalidKeyFormat,

    /// Block is not 8 bytes long, or data is not a multiple of 8 bytes.
    InvalidBlockSize,

    /// S-box table contains an entry wider than four bits, or the S-box
    /// name is unknown.
    InvalidSbox,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidKeyLength => "invalid key length",
            Error::InvalidKeyFormat => "invalid key format",
            Error::InvalidBlockSize => "invalid block size",
            Error::InvalidSbox => "invalid S-box",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
