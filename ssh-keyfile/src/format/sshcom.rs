//! ssh.com `SSH2 ENCRYPTED PRIVATE KEY` containers.
//!
//! ```text
//! uint32  magic (0x3f6ff9eb)
//! uint32  total length
//! string  key type, e.g. "if-modn{sign{rsa-pkcs1-sha1},encrypt{rsa-pkcs1v2-oaep}}"
//! string  cipher name ("none" or "3des-cbc")
//! string  key blob, possibly encrypted
//! ```
//!
//! The decrypted blob is `uint32 length || body || padding`. Integers in the
//! body are bit-length prefixed.

use crate::{
    Cipher, Error, PrivateKey, Result, kdf,
    private::{DsaKeypair, KeypairData, RsaKeypair},
};
use cipher::Padding;
use encoding::{Decode, Reader};
use log::{debug, trace};
use zeroize::Zeroizing;

/// Magic number at the start of the container.
const MAGIC: u32 = 0x3f6f_f9eb;

/// The 3DES key is used with an all-zero IV.
const TDES_IV: [u8; 8] = [0; 8];

/// Decode an ssh.com key blob.
pub(super) fn decode(mut bytes: &[u8], passphrase: Option<&[u8]>) -> Result<PrivateKey> {
    let reader = &mut bytes;

    if u32::decode(reader)? != MAGIC {
        return Err(Error::FormatEncoding);
    }

    let _total_len = u32::decode(reader)?;
    let key_type = String::decode(reader)?;
    let cipher_name = String::decode(reader)?;
    let mut blob = Zeroizing::new(Vec::<u8>::decode(reader)?);
    debug!("ssh.com key: type `{key_type}`, cipher `{cipher_name}`");

    match Cipher::new(&cipher_name) {
        Ok(cipher) if cipher.is_none() => (),
        Ok(cipher @ Cipher::TDesCbc) => {
            let passphrase = passphrase.ok_or(Error::PassphraseRequired)?;
            let (key_len, _) = cipher.key_and_iv_size().ok_or(Error::Crypto)?;
            let secret = kdf::unsalted_md5(passphrase, key_len);

            // Padding is arbitrary; the inner length frames the plaintext
            cipher.decrypt(secret.key(), &TDES_IV, &mut blob, Padding::None)?;
        }
        _ => return Err(Error::CipherUnsupported { name: cipher_name }),
    }

    let mut plaintext = blob.as_slice();
    let body_len = usize::decode(&mut plaintext).map_err(|_| Error::InvalidPassphrase)?;
    trace!("ssh.com key body: {body_len} of {} bytes", plaintext.len());

    // A wrong passphrase shows up as an implausible length
    let mut body = plaintext.get(..body_len).ok_or(Error::InvalidPassphrase)?;
    let reader = &mut body;

    let keypair = if key_type.contains("rsa") {
        let e = reader.read_bit_length_mpint()?;
        let d = reader.read_bit_length_mpint()?;
        let n = reader.read_bit_length_mpint()?;
        let iqmp = reader.read_bit_length_mpint()?;
        let q = reader.read_bit_length_mpint()?;
        let p = reader.read_bit_length_mpint()?;
        KeypairData::from(RsaKeypair::from_components(n, e, d, iqmp, p, q)?)
    } else if key_type.contains("dsa") {
        if u32::decode(reader)? != 0 {
            return Err(Error::FormatEncoding);
        }

        let p = reader.read_bit_length_mpint()?;
        let g = reader.read_bit_length_mpint()?;
        let q = reader.read_bit_length_mpint()?;
        let y = reader.read_bit_length_mpint()?;
        let x = reader.read_bit_length_mpint()?;
        KeypairData::from(DsaKeypair::from_components(p, q, g, y, x)?)
    } else {
        return Err(Error::KeyTypeUnsupported { name: key_type });
    };

    Ok(keypair.into())
}
