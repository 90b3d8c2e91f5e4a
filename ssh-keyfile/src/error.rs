//! Error types

use core::fmt;

/// Result type with `ssh-keyfile`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The file names a cipher this crate can't decrypt.
    CipherUnsupported {
        /// Cipher name as it appears in the file.
        name: String,
    },

    /// Cryptographic errors.
    Crypto,

    /// ASN.1 DER errors in legacy PEM key bodies.
    Der(der::Error),

    /// ECDSA key encoding errors.
    Ecdsa(sec1::Error),

    /// Encoding errors.
    Encoding(encoding::Error),

    /// Other format encoding errors, i.e. the input isn't a recognized
    /// private key file.
    FormatEncoding,

    /// The passphrase failed the container's integrity check.
    InvalidPassphrase,

    /// The file names a key derivation function this crate doesn't support.
    KdfUnsupported {
        /// KDF name as it appears in the file.
        name: String,
    },

    /// The file holds a key type this crate doesn't support.
    KeyTypeUnsupported {
        /// Key type name as it appears in the file.
        name: String,
    },

    /// The key is encrypted but no passphrase was provided.
    PassphraseRequired,

    /// Unexpected trailing data at end of message.
    TrailingData {
        /// Number of bytes of remaining data at end of message.
        remaining: usize,
    },
}

impl Error {
    /// Is this a structural error, i.e. the input isn't a well-formed key
    /// file in any supported format?
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::FormatEncoding | Error::Encoding(_) | Error::TrailingData { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CipherUnsupported { name } => write!(f, "unsupported cipher: {name}"),
            Error::Crypto => write!(f, "cryptographic error"),
            Error::Der(err) => write!(f, "ASN.1 DER error: {err}"),
            Error::Ecdsa(err) => write!(f, "ECDSA encoding error: {err}"),
            Error::Encoding(err) => write!(f, "{err}"),
            Error::FormatEncoding => write!(f, "invalid private key file"),
            Error::InvalidPassphrase => write!(f, "invalid passphrase"),
            Error::KdfUnsupported { name } => write!(f, "unsupported KDF: {name}"),
            Error::KeyTypeUnsupported { name } => write!(f, "unsupported key type: {name}"),
            Error::PassphraseRequired => write!(f, "private key is encrypted"),
            Error::TrailingData { remaining } => write!(
                f,
                "unexpected trailing data at end of message ({remaining} bytes)",
            ),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Der(err) => Some(err),
            Self::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<cipher::Error> for Error {
    fn from(err: cipher::Error) -> Error {
        match err {
            cipher::Error::Length => Error::FormatEncoding,
            cipher::Error::UnsupportedCipher(cipher) => Error::CipherUnsupported {
                name: cipher.as_str().into(),
            },
            _ => Error::Crypto,
        }
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Encoding(encoding::Error::Length)
    }
}

impl From<encoding::Error> for Error {
    fn from(err: encoding::Error) -> Error {
        match err {
            encoding::Error::TrailingData { remaining } => Error::TrailingData { remaining },
            other => Error::Encoding(other),
        }
    }
}

impl From<encoding::LabelError> for Error {
    fn from(err: encoding::LabelError) -> Error {
        Error::Encoding(err.into())
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Der(err)
    }
}

impl From<sec1::Error> for Error {
    fn from(err: sec1::Error) -> Error {
        Error::Ecdsa(err)
    }
}

#[cfg(feature = "rsa")]
impl From<rsa::errors::Error> for Error {
    fn from(_: rsa::errors::Error) -> Error {
        Error::Crypto
    }
}
