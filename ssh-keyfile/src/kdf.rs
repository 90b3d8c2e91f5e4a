//! Key Derivation Functions.
//!
//! These are used for deriving an encryption key from a passphrase. Each
//! container format has its own scheme:
//!
//! - legacy OpenSSL PEM: [`salted_md5`] (`EVP_BytesToKey` with one MD5 round)
//! - ssh.com `SSH2 ENCRYPTED`: [`unsalted_md5`]
//! - `openssh-key-v1`: [`Kdf::Bcrypt`] (bcrypt-pbkdf)

use crate::{Cipher, Error, KdfAlg, Result};
use bcrypt_pbkdf::bcrypt_pbkdf;
use encoding::{Decode, Reader};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

/// Number of salt bytes fed into the legacy PEM key schedule.
const PEM_SALT_LEN: usize = 8;

/// Size of an MD5 digest.
const MD5_LEN: usize = 16;

/// Symmetric key material derived from a passphrase.
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct DerivedSecret {
    key: Zeroizing<Vec<u8>>,
    iv: Option<Zeroizing<Vec<u8>>>,
}

impl DerivedSecret {
    /// Cipher key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Initialization vector, if the scheme produces one.
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref().map(Vec::as_slice)
    }
}

/// Derive a key the way OpenSSL does for `DEK-Info` encrypted PEM files.
///
/// ```text
/// D_1 = MD5(passphrase || salt[0..8])
/// D_i = MD5(D_(i-1) || passphrase || salt[0..8])
/// key = (D_1 || D_2 || ...)[0..key_len]
/// ```
///
/// The IV is the full `salt`. Fails with [`Error::FormatEncoding`] if the
/// salt is shorter than 8 bytes.
pub fn salted_md5(passphrase: &[u8], salt: &[u8], key_len: usize) -> Result<DerivedSecret> {
    let short_salt = salt.get(..PEM_SALT_LEN).ok_or(Error::FormatEncoding)?;

    let key = md5_stretch(key_len, |hasher, prev| {
        if let Some(prev) = prev {
            hasher.update(prev);
        }
        hasher.update(passphrase);
        hasher.update(short_salt);
    });

    Ok(DerivedSecret {
        key,
        iv: Some(Zeroizing::new(salt.to_vec())),
    })
}

/// Derive a key the way ssh.com does for `SSH2 ENCRYPTED PRIVATE KEY` files.
///
/// ```text
/// D_1 = MD5(passphrase)
/// D_i = MD5(passphrase || D_(i-1))
/// key = (D_1 || D_2 || ...)[0..key_len]
/// ```
///
/// There is no IV: the container uses an all-zero one.
pub fn unsalted_md5(passphrase: &[u8], key_len: usize) -> DerivedSecret {
    let key = md5_stretch(key_len, |hasher, prev| {
        hasher.update(passphrase);
        if let Some(prev) = prev {
            hasher.update(prev);
        }
    });

    DerivedSecret { key, iv: None }
}

/// Chain MD5 blocks until `key_len` bytes are available, then truncate.
fn md5_stretch(key_len: usize, absorb: impl Fn(&mut Md5, Option<&[u8]>)) -> Zeroizing<Vec<u8>> {
    let mut okm = Zeroizing::new(Vec::with_capacity(key_len.saturating_add(MD5_LEN)));
    let mut prev = Zeroizing::new([0u8; MD5_LEN]);
    let mut first = true;

    while okm.len() < key_len {
        let mut hasher = Md5::new();
        absorb(&mut hasher, (!first).then_some(prev.as_slice()));
        prev.copy_from_slice(&hasher.finalize());
        okm.extend_from_slice(prev.as_slice());
        first = false;
    }

    okm.truncate(key_len);
    okm
}

/// Key Derivation Functions (KDF) of `openssh-key-v1` files.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Kdf {
    /// No KDF.
    #[default]
    None,

    /// bcrypt-pbkdf options.
    Bcrypt {
        /// Salt
        salt: Vec<u8>,

        /// Rounds
        rounds: u32,
    },
}

impl Kdf {
    /// Parse the KDF named `kdfname` with its `kdfoptions` blob.
    ///
    /// The options are only interpreted for `bcrypt`, as `string salt` then
    /// `uint32 rounds`. Any name other than `none` or `bcrypt` fails with
    /// [`Error::KdfUnsupported`].
    pub fn new(kdfname: &str, mut kdfoptions: &[u8]) -> Result<Self> {
        let algorithm = KdfAlg::new(kdfname).map_err(|_| Error::KdfUnsupported {
            name: kdfname.into(),
        })?;

        match algorithm {
            KdfAlg::None => Ok(Self::None),
            KdfAlg::Bcrypt => {
                let reader = &mut kdfoptions;
                let salt = Vec::decode(reader)?;
                let rounds = u32::decode(reader)?;
                Ok(reader.finish(Self::Bcrypt { salt, rounds })?)
            }
        }
    }

    /// Get the KDF algorithm.
    pub fn algorithm(&self) -> KdfAlg {
        match self {
            Self::None => KdfAlg::None,
            Self::Bcrypt { .. } => KdfAlg::Bcrypt,
        }
    }

    /// Derive an encryption key from the given passphrase.
    pub fn derive(&self, passphrase: &[u8], output: &mut [u8]) -> Result<()> {
        match self {
            Kdf::None => Err(Error::KdfUnsupported {
                name: KdfAlg::None.as_str().into(),
            }),
            Kdf::Bcrypt { salt, rounds } => {
                bcrypt_pbkdf(passphrase, salt, *rounds, output).map_err(|_| Error::Crypto)
            }
        }
    }

    /// Derive key and IV for the given [`Cipher`].
    ///
    /// A single KDF output of `key_size + iv_size` bytes is split into the
    /// key followed by the IV.
    pub fn derive_key_and_iv(&self, cipher: Cipher, passphrase: &[u8]) -> Result<DerivedSecret> {
        let (key_size, iv_size) = cipher.key_and_iv_size().ok_or(Error::CipherUnsupported {
            name: cipher.as_str().into(),
        })?;

        let okm_size = key_size
            .checked_add(iv_size)
            .ok_or(encoding::Error::Length)?;

        let mut okm = Zeroizing::new(vec![0u8; okm_size]);
        self.derive(passphrase, &mut okm)?;
        let iv = Zeroizing::new(okm.split_off(key_size));

        Ok(DerivedSecret {
            key: okm,
            iv: Some(iv),
        })
    }
}
