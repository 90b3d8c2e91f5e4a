//! OpenSSH `openssh-key-v1` containers.
//!
//! ```text
//! byte[]  "openssh-key-v1\0"
//! string  ciphername
//! string  kdfname
//! string  kdfoptions
//! uint32  number of keys (always 1)
//! string  public key
//! string  private section, possibly encrypted
//! ```
//!
//! The private section is:
//!
//! ```text
//! uint32  checkint
//! uint32  checkint
//! string  key type
//! ...     key type specific fields
//! string  comment
//! byte[]  padding 1, 2, 3, ...
//! ```
//!
//! See <https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.key?annotate=HEAD>.

use crate::{
    Algorithm, Cipher, Comment, Error, Kdf, KdfAlg, PrivateKey, Result,
    private::{EcdsaKeypair, Ed25519Keypair, KeypairData, RsaKeypair},
};
use cipher::Padding;
use encoding::{Decode, Reader};
use log::{debug, trace};
use zeroize::Zeroizing;

/// Magic string at the start of the container.
const AUTH_MAGIC: &[u8] = b"openssh-key-v1\0";

/// The private section is padded to a multiple of this.
const BLOCK_SIZE: usize = 8;

/// Decode an `openssh-key-v1` blob.
pub(super) fn decode(mut bytes: &[u8], passphrase: Option<&[u8]>) -> Result<PrivateKey> {
    let reader = &mut bytes;

    let mut magic = [0u8; AUTH_MAGIC.len()];
    reader.read(&mut magic)?;

    if magic.as_slice() != AUTH_MAGIC {
        return Err(Error::FormatEncoding);
    }

    let cipher_name = String::decode(reader)?;
    let kdf_name = String::decode(reader)?;
    let kdf_options = Vec::<u8>::decode(reader)?;

    if u32::decode(reader)? != 1 {
        return Err(Error::FormatEncoding);
    }

    // The public key is repeated in the private section
    reader.drain_prefixed()?;

    let mut section = Zeroizing::new(Vec::<u8>::decode(reader)?);
    reader.ensure_finished()?;
    trace!("openssh private section: {} bytes", section.len());

    if section.len() % BLOCK_SIZE != 0 {
        return Err(Error::FormatEncoding);
    }

    // Unknown names still require a passphrase before they are rejected
    if Cipher::new(&cipher_name).map_or(true, Cipher::is_some) {
        let passphrase = passphrase.ok_or(Error::PassphraseRequired)?;
        let kdf = Kdf::new(&kdf_name, &kdf_options)?;

        if kdf.algorithm() != KdfAlg::Bcrypt {
            return Err(Error::KdfUnsupported { name: kdf_name });
        }

        let cipher = match Cipher::new(&cipher_name) {
            Ok(cipher @ (Cipher::Aes256Cbc | Cipher::Aes256Ctr)) => cipher,
            _ => return Err(Error::CipherUnsupported { name: cipher_name }),
        };

        debug!("decrypting openssh private section with {cipher_name}/{kdf_name}");
        let secret = kdf.derive_key_and_iv(cipher, passphrase)?;
        let iv = secret.iv().ok_or(Error::Crypto)?;
        cipher.decrypt(secret.key(), iv, &mut section, Padding::None)?;
    }

    let mut plaintext = section.as_slice();
    decode_private_section(&mut plaintext)
}

/// Decode the (decrypted) private section.
fn decode_private_section(reader: &mut &[u8]) -> Result<PrivateKey> {
    let checkint1 = u32::decode(reader)?;
    let checkint2 = u32::decode(reader)?;

    if checkint1 != checkint2 {
        return Err(Error::InvalidPassphrase);
    }

    let key_type = String::decode(reader)?;
    debug!("openssh key type: {key_type}");

    let key_data = match key_type.parse::<Algorithm>() {
        Ok(Algorithm::Ed25519) => {
            reader.drain_prefixed()?;
            let keypair_bytes = Zeroizing::new(Vec::<u8>::decode(reader)?);
            KeypairData::from(Ed25519Keypair::try_from(keypair_bytes.as_slice())?)
        }
        Ok(Algorithm::Ecdsa { curve }) => {
            if String::decode(reader)? != curve.as_str() {
                return Err(Error::FormatEncoding);
            }

            let public = Vec::<u8>::decode(reader)?;
            let private = Zeroizing::new(Vec::<u8>::decode(reader)?);
            KeypairData::from(EcdsaKeypair::new(curve, &public, &private)?)
        }
        Ok(Algorithm::Rsa { hash: None }) => {
            let n = reader.read_mpint()?;
            let e = reader.read_mpint()?;
            let d = reader.read_mpint()?;
            let iqmp = reader.read_mpint()?;
            let p = reader.read_mpint()?;
            let q = reader.read_mpint()?;
            KeypairData::from(RsaKeypair::from_components(n, e, d, iqmp, p, q)?)
        }
        _ => return Err(Error::KeyTypeUnsupported { name: key_type }),
    };

    let comment = Comment::decode(reader)?;

    for (&byte, expected) in reader.iter().zip((1u8..=255).cycle()) {
        if byte != expected {
            return Err(Error::FormatEncoding);
        }
    }

    Ok(PrivateKey::new(key_data, Some(comment)))
}
