#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod error;

pub use crate::error::{Error, Result};

use aes::{Aes128, Aes192, Aes256};
use cbc::Decryptor;
use cipher::{
    BlockCipher, BlockDecryptMut, KeyInit, KeyIvInit, StreamCipherCore,
    block_padding::{NoPadding, Pkcs7},
};
use core::{fmt, str};
use des::{Des, TdesEde3};
use encoding::{Label, LabelError};

/// AES-128 in block chaining (CBC) mode
const AES128_CBC: &str = "aes128-cbc";

/// AES-192 in block chaining (CBC) mode
const AES192_CBC: &str = "aes192-cbc";

/// AES-256 in block chaining (CBC) mode
const AES256_CBC: &str = "aes256-cbc";

/// AES-256 in counter (CTR) mode
const AES256_CTR: &str = "aes256-ctr";

/// Triple-DES in block chaining (CBC) mode
const TDES_CBC: &str = "3des-cbc";

/// Single DES in block chaining (CBC) mode. OpenSSL naming only.
const DES_CBC: &str = "DES-CBC";

/// Triple-DES in cipher feedback (CFB) mode. OpenSSL naming only.
const TDES_CFB: &str = "DES-EDE3-CFB";

/// Counter mode with a 128-bit big endian counter.
type Ctr128BE<Cipher> = ctr::CtrCore<Cipher, ctr::flavors::Ctr128BE>;

/// Cipher algorithms.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Cipher {
    /// No cipher.
    None,

    /// DES in cipher block chaining (CBC) mode.
    DesCbc,

    /// TripleDES in block chaining (CBC) mode.
    TDesCbc,

    /// TripleDES in cipher feedback (CFB) mode.
    TDesCfb,

    /// AES-128 in cipher block chaining (CBC) mode.
    Aes128Cbc,

    /// AES-192 in cipher block chaining (CBC) mode.
    Aes192Cbc,

    /// AES-256 in cipher block chaining (CBC) mode.
    Aes256Cbc,

    /// AES-256 in counter (CTR) mode.
    Aes256Ctr,
}

/// Padding handling applied after a block mode decryption.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Padding {
    /// Leave the plaintext as-is.
    #[default]
    None,

    /// Remove PKCS#7 padding, failing with [`Error::Crypto`] if it is malformed.
    Pkcs7,
}

impl Cipher {
    /// Decode cipher algorithm from the given SSH `ciphername`.
    ///
    /// # Supported cipher names
    /// - `none`
    /// - `3des-cbc`
    /// - `aes128-cbc`, `aes192-cbc`, `aes256-cbc`
    /// - `aes256-ctr`
    pub fn new(ciphername: &str) -> core::result::Result<Self, LabelError> {
        ciphername.parse()
    }

    /// Decode cipher algorithm from the cipher name in an OpenSSL
    /// `DEK-Info` header, e.g. `DEK-Info: AES-128-CBC,<iv>`.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_dek_info(name: &str) -> core::result::Result<Self, LabelError> {
        match name {
            DES_CBC => Ok(Self::DesCbc),
            "DES-EDE3-CBC" => Ok(Self::TDesCbc),
            TDES_CFB => Ok(Self::TDesCfb),
            "AES-128-CBC" => Ok(Self::Aes128Cbc),
            "AES-192-CBC" => Ok(Self::Aes192Cbc),
            "AES-256-CBC" => Ok(Self::Aes256Cbc),
            _ => Err(LabelError::new(name)),
        }
    }

    /// Get the string identifier which corresponds to this algorithm.
    ///
    /// Ciphers with no SSH name use their OpenSSL name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DesCbc => DES_CBC,
            Self::TDesCbc => TDES_CBC,
            Self::TDesCfb => TDES_CFB,
            Self::Aes128Cbc => AES128_CBC,
            Self::Aes192Cbc => AES192_CBC,
            Self::Aes256Cbc => AES256_CBC,
            Self::Aes256Ctr => AES256_CTR,
        }
    }

    /// Get the key and IV size for this cipher in bytes.
    pub fn key_and_iv_size(self) -> Option<(usize, usize)> {
        match self {
            Self::None => None,
            Self::DesCbc => Some((8, 8)),
            Self::TDesCbc | Self::TDesCfb => Some((24, 8)),
            Self::Aes128Cbc => Some((16, 16)),
            Self::Aes192Cbc => Some((24, 16)),
            Self::Aes256Cbc | Self::Aes256Ctr => Some((32, 16)),
        }
    }

    /// Get the block size for this cipher in bytes.
    pub fn block_size(self) -> usize {
        match self {
            Self::None | Self::DesCbc | Self::TDesCbc | Self::TDesCfb => 8,
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc | Self::Aes256Ctr => 16,
        }
    }

    /// Is this a stream mode which accepts input of any length?
    pub fn is_stream(self) -> bool {
        matches!(self, Self::TDesCfb | Self::Aes256Ctr)
    }

    /// Is this cipher `none`?
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Is the cipher anything other than `none`?
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Decrypt the ciphertext in the `buffer` in-place using this cipher.
    ///
    /// Returns the plaintext, which is a prefix of `buffer` when
    /// [`Padding::Pkcs7`] is requested and all of it otherwise. Stream modes
    /// never carry padding, so `padding` is ignored for them.
    pub fn decrypt<'b>(
        self,
        key: &[u8],
        iv: &[u8],
        buffer: &'b mut [u8],
        padding: Padding,
    ) -> Result<&'b [u8]> {
        let (key_size, iv_size) = self.key_and_iv_size().ok_or(self.unsupported())?;

        if key.len() != key_size {
            return Err(Error::KeySize);
        }

        if iv.len() != iv_size {
            return Err(Error::IvSize);
        }

        if !self.is_stream() && buffer.len() % self.block_size() != 0 {
            return Err(Error::Length);
        }

        match self {
            Self::DesCbc => cbc_decrypt::<Des>(key, iv, buffer, padding),
            Self::TDesCbc => cbc_decrypt::<TdesEde3>(key, iv, buffer, padding),
            Self::Aes128Cbc => cbc_decrypt::<Aes128>(key, iv, buffer, padding),
            Self::Aes192Cbc => cbc_decrypt::<Aes192>(key, iv, buffer, padding),
            Self::Aes256Cbc => cbc_decrypt::<Aes256>(key, iv, buffer, padding),
            Self::TDesCfb => {
                cfb_mode::BufDecryptor::<TdesEde3>::new_from_slices(key, iv)
                    .map_err(|_| Error::KeySize)?
                    .decrypt(buffer);
                Ok(buffer)
            }
            // Counter mode encryption and decryption are the same operation
            Self::Aes256Ctr => ctr_apply::<Ctr128BE<Aes256>>(key, iv, buffer),
            Self::None => Err(self.unsupported()),
        }
    }

    /// Create an unsupported cipher error.
    fn unsupported(self) -> Error {
        Error::UnsupportedCipher(self)
    }
}

impl AsRef<str> for Cipher {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Label for Cipher {}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Cipher {
    type Err = LabelError;

    fn from_str(ciphername: &str) -> core::result::Result<Self, LabelError> {
        match ciphername {
            "none" => Ok(Self::None),
            TDES_CBC => Ok(Self::TDesCbc),
            AES128_CBC => Ok(Self::Aes128Cbc),
            AES192_CBC => Ok(Self::Aes192Cbc),
            AES256_CBC => Ok(Self::Aes256Cbc),
            AES256_CTR => Ok(Self::Aes256Ctr),
            _ => Err(LabelError::new(ciphername)),
        }
    }
}

fn cbc_decrypt<'b, C>(
    key: &[u8],
    iv: &[u8],
    buffer: &'b mut [u8],
    padding: Padding,
) -> Result<&'b [u8]>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let cipher = Decryptor::<C>::new_from_slices(key, iv).map_err(|_| Error::KeySize)?;

    match padding {
        Padding::None => cipher
            .decrypt_padded_mut::<NoPadding>(buffer)
            .map_err(|_| Error::Crypto),
        Padding::Pkcs7 => cipher
            .decrypt_padded_mut::<Pkcs7>(buffer)
            .map_err(|_| Error::Crypto),
    }
}

fn ctr_apply<'b, C>(key: &[u8], iv: &[u8], buffer: &'b mut [u8]) -> Result<&'b [u8]>
where
    C: StreamCipherCore + KeyIvInit,
{
    let cipher = C::new_from_slices(key, iv).map_err(|_| Error::KeySize)?;

    cipher
        .try_apply_keystream_partial((&mut *buffer).into())
        .map_err(|_| Error::Crypto)?;

    Ok(buffer)
}
