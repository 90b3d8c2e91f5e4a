//! Elliptic Curve Digital Signature Algorithm (ECDSA) public keys.

use crate::{Algorithm, EcdsaCurve, Error, Result};
use core::fmt;
use sec1::consts::{U32, U48, U66};

/// ECDSA/NIST P-256 public key.
pub type EcdsaNistP256PublicKey = sec1::EncodedPoint<U32>;

/// ECDSA/NIST P-384 public key.
pub type EcdsaNistP384PublicKey = sec1::EncodedPoint<U48>;

/// ECDSA/NIST P-521 public key.
pub type EcdsaNistP521PublicKey = sec1::EncodedPoint<U66>;

/// Elliptic Curve Digital Signature Algorithm (ECDSA) public key.
///
/// Public keys are represented as [`sec1::EncodedPoint`].
///
/// Described in [FIPS 186-4](https://csrc.nist.gov/publications/detail/fips/186/4/final).
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EcdsaPublicKey {
    /// NIST P-256 ECDSA public key.
    NistP256(EcdsaNistP256PublicKey),

    /// NIST P-384 ECDSA public key.
    NistP384(EcdsaNistP384PublicKey),

    /// NIST P-521 ECDSA public key.
    NistP521(EcdsaNistP521PublicKey),
}

impl EcdsaPublicKey {
    /// Parse an ECDSA public key from a SEC1-encoded point.
    ///
    /// Determines the key type from the SEC1 tag byte and length.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [tag, rest @ ..] => {
                let point_size = match sec1::point::Tag::from_u8(*tag)? {
                    sec1::point::Tag::CompressedEvenY | sec1::point::Tag::CompressedOddY => {
                        rest.len()
                    }
                    sec1::point::Tag::Uncompressed => rest.len() / 2,
                    _ => return Err(Error::FormatEncoding),
                };

                let curve = [
                    EcdsaCurve::NistP256,
                    EcdsaCurve::NistP384,
                    EcdsaCurve::NistP521,
                ]
                .into_iter()
                .find(|curve| curve.field_size() == point_size)
                .ok_or(encoding::Error::Length)?;

                match curve {
                    EcdsaCurve::NistP256 => {
                        Ok(Self::NistP256(EcdsaNistP256PublicKey::from_bytes(bytes)?))
                    }
                    EcdsaCurve::NistP384 => {
                        Ok(Self::NistP384(EcdsaNistP384PublicKey::from_bytes(bytes)?))
                    }
                    EcdsaCurve::NistP521 => {
                        Ok(Self::NistP521(EcdsaNistP521PublicKey::from_bytes(bytes)?))
                    }
                }
            }
            _ => Err(encoding::Error::Length.into()),
        }
    }

    /// Borrow the SEC1-encoded key data as bytes.
    pub fn as_sec1_bytes(&self) -> &[u8] {
        match self {
            EcdsaPublicKey::NistP256(point) => point.as_bytes(),
            EcdsaPublicKey::NistP384(point) => point.as_bytes(),
            EcdsaPublicKey::NistP521(point) => point.as_bytes(),
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
            EcdsaPublicKey::NistP256(_) => EcdsaCurve::NistP256,
            EcdsaPublicKey::NistP384(_) => EcdsaCurve::NistP384,
            EcdsaPublicKey::NistP521(_) => EcdsaCurve::NistP521,
        }
    }
}

impl AsRef<[u8]> for EcdsaPublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_sec1_bytes()
    }
}

impl fmt::Display for EcdsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:X}")
    }
}

impl fmt::LowerHex for EcdsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_sec1_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for EcdsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_sec1_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EcdsaPublicKey;
    use crate::EcdsaCurve;

    fn point(tag: u8, len: usize) -> Vec<u8> {
        let mut bytes = vec![0x11; len + 1];
        bytes[0] = tag;
        bytes
    }

    #[test]
    fn curve_follows_point_size() {
        for curve in [
            EcdsaCurve::NistP256,
            EcdsaCurve::NistP384,
            EcdsaCurve::NistP521,
        ] {
            let uncompressed = point(0x04, curve.field_size() * 2);
            let key = EcdsaPublicKey::from_sec1_bytes(&uncompressed).unwrap();
            assert_eq!(key.curve(), curve);
            assert_eq!(key.as_sec1_bytes(), uncompressed.as_slice());

            let compressed = point(0x02, curve.field_size());
            let key = EcdsaPublicKey::from_sec1_bytes(&compressed).unwrap();
            assert_eq!(key.curve(), curve);
        }
    }

    #[test]
    fn unknown_point_size() {
        assert!(EcdsaPublicKey::from_sec1_bytes(&point(0x04, 80)).is_err());
        assert!(EcdsaPublicKey::from_sec1_bytes(&[]).is_err());
    }
}
