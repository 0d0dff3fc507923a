use core::fmt;

/// Result type with the `gost-kw` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors of key wrapping and unwrapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Wrapped or plain key has an unexpected length.
    InvalidDataLength,

    /// Recomputed MAC differs from the stored one.
    MacVerificationFailure,

    /// Key or block rejected by the cipher.
    Cipher(magma::Error),
}

impl From<magma::Error> for Error {
    fn from(err: magma::Error) -> Self {
        Error::Cipher(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDataLength => f.write_str("invalid data length"),
            Error::MacVerificationFailure => f.write_str("MAC verification failed"),
            Error::Cipher(err) => write!(f, "cipher error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Cipher(err) => Some(err),
            _ => None,
        }
    }
}
