//! Legacy OpenSSL PEM keys: `RSA`, `DSA` and `EC`.
//!
//! The payload is DER, optionally encrypted as announced by a `DEK-Info`
//! header.

use super::envelope::DekInfo;
use crate::{
    Cipher, EcdsaCurve, Error, Mpint, PrivateKey, Result, kdf,
    private::{DsaKeypair, EcdsaKeypair, KeypairData, RsaKeypair},
};
use cipher::Padding;
use der::{Decode as _, asn1::ObjectIdentifier, asn1::UintRef};
use log::{debug, trace};
use zeroize::Zeroizing;

/// NIST P-256 (`prime256v1`).
const OID_NIST_P256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// NIST P-384 (`secp384r1`).
const OID_NIST_P384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// NIST P-521 (`secp521r1`).
const OID_NIST_P521: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// OpenSSL's DSA private key structure:
///
/// ```text
/// DSAPrivateKey ::= SEQUENCE {
///     version INTEGER,
///     p INTEGER,
///     q INTEGER,
///     g INTEGER,
///     y INTEGER,
///     x INTEGER
/// }
/// ```
#[derive(Clone, Debug, der::Sequence)]
struct DsaPrivateKeyDer<'a> {
    version: u8,
    p: UintRef<'a>,
    q: UintRef<'a>,
    g: UintRef<'a>,
    y: UintRef<'a>,
    x: UintRef<'a>,
}

/// Decrypt a `DEK-Info` encrypted payload.
///
/// The key is derived from the passphrase and the first 8 bytes of the salt;
/// the whole salt is the IV.
pub(super) fn decrypt(
    dek_info: &DekInfo<'_>,
    ciphertext: &[u8],
    passphrase: Option<&[u8]>,
) -> Result<Zeroizing<Vec<u8>>> {
    let passphrase = passphrase.ok_or(Error::PassphraseRequired)?;
    let cipher = Cipher::from_dek_info(dek_info.cipher).map_err(|_| Error::CipherUnsupported {
        name: dek_info.cipher.into(),
    })?;

    let salt = hex::decode(dek_info.salt).map_err(|_| Error::FormatEncoding)?;

    let (key_len, iv_len) = cipher.key_and_iv_size().ok_or(Error::CipherUnsupported {
        name: dek_info.cipher.into(),
    })?;

    if salt.len() != iv_len {
        return Err(Error::FormatEncoding);
    }

    debug!("decrypting legacy PEM payload with {}", cipher.as_str());
    let secret = kdf::salted_md5(passphrase, &salt, key_len)?;

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    let plaintext = cipher.decrypt(secret.key(), &salt, &mut buffer, Padding::Pkcs7)?;
    trace!("legacy PEM plaintext: {} bytes", plaintext.len());

    Ok(Zeroizing::new(plaintext.to_vec()))
}

/// Decode a PKCS#1 `RSAPrivateKey`.
pub(super) fn decode_rsa(der_bytes: &[u8]) -> Result<PrivateKey> {
    let key = pkcs1::RsaPrivateKey::from_der(der_bytes)?;

    let keypair = RsaKeypair::from_components(
        uint(key.modulus)?,
        uint(key.public_exponent)?,
        uint(key.private_exponent)?,
        uint(key.coefficient)?,
        uint(key.prime1)?,
        uint(key.prime2)?,
    )?;

    Ok(KeypairData::from(keypair).into())
}

/// Decode an OpenSSL `DSAPrivateKey`.
pub(super) fn decode_dsa(der_bytes: &[u8]) -> Result<PrivateKey> {
    let key = DsaPrivateKeyDer::from_der(der_bytes)?;

    if key.version != 0 {
        return Err(Error::FormatEncoding);
    }

    let keypair = DsaKeypair::from_components(
        uint(key.p)?,
        uint(key.q)?,
        uint(key.g)?,
        uint(key.y)?,
        uint(key.x)?,
    )?;

    Ok(KeypairData::from(keypair).into())
}

/// Decode a SEC1 `ECPrivateKey`.
///
/// The curve must be given as a named curve and the public key must be
/// present.
pub(super) fn decode_ec(der_bytes: &[u8]) -> Result<PrivateKey> {
    let key = sec1::EcPrivateKey::try_from(der_bytes)?;

    let oid = key
        .parameters
        .and_then(|params| params.named_curve())
        .ok_or(Error::FormatEncoding)?;

    let curve = if oid == OID_NIST_P256 {
        EcdsaCurve::NistP256
    } else if oid == OID_NIST_P384 {
        EcdsaCurve::NistP384
    } else if oid == OID_NIST_P521 {
        EcdsaCurve::NistP521
    } else {
        return Err(Error::KeyTypeUnsupported {
            name: oid.to_string(),
        });
    };

    let public = key.public_key.ok_or(Error::FormatEncoding)?;
    let keypair = EcdsaKeypair::new(curve, public, key.private_key)?;

    Ok(KeypairData::from(keypair).into())
}

/// Convert a DER `INTEGER` (unsigned) into an [`Mpint`].
fn uint(int: UintRef<'_>) -> Result<Mpint> {
    Ok(Mpint::from_positive_bytes(int.as_bytes())?)
}
