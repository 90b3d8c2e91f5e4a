//! Elliptic Curve Digital Signature Algorithm (ECDSA) private keys.

use crate::{Algorithm, EcdsaCurve, Error, Result, public::EcdsaPublicKey};
use core::fmt;
use sec1::consts::{U32, U48, U66};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Elliptic Curve Digital Signature Algorithm (ECDSA) private key.
#[derive(Clone)]
pub struct EcdsaPrivateKey<const SIZE: usize> {
    /// Byte array containing serialized big endian private scalar.
    bytes: [u8; SIZE],
}

impl<const SIZE: usize> EcdsaPrivateKey<SIZE> {
    /// Parse a big endian private scalar of any width up to `SIZE` bytes.
    ///
    /// Leading zeroes (including an `mpint` sign byte) are stripped, then the
    /// scalar is left-padded to exactly `SIZE` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let start = bytes
            .iter()
            .position(|&byte| byte != 0)
            .ok_or(Error::FormatEncoding)?;

        let scalar = &bytes[start..];
        let offset = SIZE.checked_sub(scalar.len()).ok_or(Error::FormatEncoding)?;

        let mut ret = Self { bytes: [0u8; SIZE] };
        ret.bytes[offset..].copy_from_slice(scalar);
        Ok(ret)
    }

    /// Borrow the inner byte array as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<const SIZE: usize> AsRef<[u8; SIZE]> for EcdsaPrivateKey<SIZE> {
    fn as_ref(&self) -> &[u8; SIZE] {
        &self.bytes
    }
}

impl<const SIZE: usize> ConstantTimeEq for EcdsaPrivateKey<SIZE> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_slice().ct_eq(other.as_slice())
    }
}

impl<const SIZE: usize> PartialEq for EcdsaPrivateKey<SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const SIZE: usize> Eq for EcdsaPrivateKey<SIZE> {}

impl<const SIZE: usize> fmt::Debug for EcdsaPrivateKey<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaPrivateKey").finish_non_exhaustive()
    }
}

impl<const SIZE: usize> Drop for EcdsaPrivateKey<SIZE> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Elliptic Curve Digital Signature Algorithm (ECDSA) private/public keypair.
#[derive(Clone, Debug)]
pub enum EcdsaKeypair {
    /// NIST P-256 ECDSA keypair.
    NistP256 {
        /// Public key.
        public: sec1::EncodedPoint<U32>,

        /// Private key.
        private: EcdsaPrivateKey<32>,
    },

    /// NIST P-384 ECDSA keypair.
    NistP384 {
        /// Public key.
        public: sec1::EncodedPoint<U48>,

        /// Private key.
        private: EcdsaPrivateKey<48>,
    },

    /// NIST P-521 ECDSA keypair.
    NistP521 {
        /// Public key.
        public: sec1::EncodedPoint<U66>,

        /// Private key.
        private: EcdsaPrivateKey<66>,
    },
}

impl EcdsaKeypair {
    /// Build a keypair on `curve` from a SEC1-encoded public point and a big
    /// endian private scalar.
    ///
    /// The point must be a well-formed SEC1 encoding whose size matches
    /// `curve`, otherwise this fails.
    pub fn new(curve: EcdsaCurve, public: &[u8], private: &[u8]) -> Result<Self> {
        let public = EcdsaPublicKey::from_sec1_bytes(public)?;

        if public.curve() != curve {
            return Err(Error::FormatEncoding);
        }

        match public {
            EcdsaPublicKey::NistP256(public) => Ok(Self::NistP256 {
                public,
                private: EcdsaPrivateKey::from_slice(private)?,
            }),
            EcdsaPublicKey::NistP384(public) => Ok(Self::NistP384 {
                public,
                private: EcdsaPrivateKey::from_slice(private)?,
            }),
            EcdsaPublicKey::NistP521(public) => Ok(Self::NistP521 {
                public,
                private: EcdsaPrivateKey::from_slice(private)?,
            }),
        }
    }

    /// Get the [`Algorithm`] for this public key type.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdsa {
            curve: self.curve(),
        }
    }

    /// Get the [`EcdsaCurve`] for this key.
    pub fn curve(&self) -> EcdsaCurve {
        match self {
            Self::NistP256 { .. } => EcdsaCurve::NistP256,
            Self::NistP384 { .. } => EcdsaCurve::NistP384,
            Self::NistP521 { .. } => EcdsaCurve::NistP521,
        }
    }

    /// Get the bytes representing the public key.
    pub fn public_key_bytes(&self) -> &[u8] {
        match self {
            Self::NistP256 { public, .. } => public.as_bytes(),
            Self::NistP384 { public, .. } => public.as_bytes(),
            Self::NistP521 { public, .. } => public.as_bytes(),
        }
    }

    /// Get the bytes representing the private key.
    pub fn private_key_bytes(&self) -> &[u8] {
        match self {
            Self::NistP256 { private, .. } => private.as_slice(),
            Self::NistP384 { private, .. } => private.as_slice(),
            Self::NistP521 { private, .. } => private.as_slice(),
        }
    }
}

impl ConstantTimeEq for EcdsaKeypair {
    fn ct_eq(&self, other: &Self) -> Choice {
        let public_eq =
            Choice::from((EcdsaPublicKey::from(self) == EcdsaPublicKey::from(other)) as u8);

        public_eq & self.private_key_bytes().ct_eq(other.private_key_bytes())
    }
}

impl Eq for EcdsaKeypair {}

impl PartialEq for EcdsaKeypair {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<&EcdsaKeypair> for EcdsaPublicKey {
    fn from(keypair: &EcdsaKeypair) -> EcdsaPublicKey {
        match keypair {
            EcdsaKeypair::NistP256 { public, .. } => EcdsaPublicKey::NistP256(*public),
            EcdsaKeypair::NistP384 { public, .. } => EcdsaPublicKey::NistP384(*public),
            EcdsaKeypair::NistP521 { public, .. } => EcdsaPublicKey::NistP521(*public),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EcdsaPrivateKey;
    use hex_literal::hex;

    #[test]
    fn scalar_is_left_padded() {
        let key = EcdsaPrivateKey::<4>::from_slice(&hex!("00 00 12 34")).unwrap();
        assert_eq!(key.as_slice(), hex!("00 00 12 34"));

        let key = EcdsaPrivateKey::<4>::from_slice(&hex!("12 34")).unwrap();
        assert_eq!(key.as_slice(), hex!("00 00 12 34"));
    }

    #[test]
    fn sign_byte_is_stripped() {
        let key = EcdsaPrivateKey::<2>::from_slice(&hex!("00 80 01")).unwrap();
        assert_eq!(key.as_slice(), hex!("80 01"));
    }

    #[test]
    fn oversized_scalar_is_rejected() {
        assert!(EcdsaPrivateKey::<2>::from_slice(&hex!("01 00 00")).is_err());
    }

    #[test]
    fn zero_scalar_is_rejected() {
        assert!(EcdsaPrivateKey::<2>::from_slice(&hex!("00 00")).is_err());
    }
}
