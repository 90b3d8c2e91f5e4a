//! Error types.

use crate::Cipher;
use core::fmt;

/// Result type with `keyfile-cipher` crate's [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Cryptographic errors, e.g. invalid padding after decryption.
    Crypto,

    /// Invalid key size.
    KeySize,

    /// Invalid initialization vector size.
    IvSize,

    /// Ciphertext length is not a multiple of the block size.
    Length,

    /// Unsupported cipher.
    UnsupportedCipher(Cipher),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Crypto => write!(f, "cryptographic error"),
            Error::KeySize => write!(f, "invalid key size"),
            Error::IvSize => write!(f, "invalid initialization vector size"),
            Error::Length => write!(f, "ciphertext is not a multiple of the block size"),
            Error::UnsupportedCipher(cipher) => write!(f, "unsupported cipher: {}", cipher),
        }
    }
}

impl core::error::Error for Error {}
