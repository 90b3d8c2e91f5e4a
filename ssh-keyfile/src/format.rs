//! Private key file containers.
//!
//! Every supported file is a text envelope around a Base64 payload. The
//! envelope label selects the decoder for the payload:
//!
//! | label            | payload                                  |
//! |------------------|------------------------------------------|
//! | `RSA`            | PKCS#1 `RSAPrivateKey`                   |
//! | `DSA`            | OpenSSL `DSAPrivateKey`                  |
//! | `EC`             | SEC1 `ECPrivateKey`                      |
//! | `OPENSSH`        | `openssh-key-v1`                         |
//! | `SSH2 ENCRYPTED` | ssh.com private key blob                 |
//!
//! The first three may be encrypted with an OpenSSL `DEK-Info` header.

mod envelope;
mod legacy;
mod openssh;
mod sshcom;

use self::envelope::Envelope;
use crate::{Error, PrivateKey, Result};
use log::debug;

const LABEL_RSA: &str = "RSA";
const LABEL_DSA: &str = "DSA";
const LABEL_EC: &str = "EC";
const LABEL_OPENSSH: &str = "OPENSSH";
const LABEL_SSHCOM: &str = "SSH2 ENCRYPTED";

/// Detect the container format of `input` and decode the private key in it.
pub(crate) fn decode(input: &[u8], passphrase: Option<&[u8]>) -> Result<PrivateKey> {
    // An empty passphrase is no passphrase
    let passphrase = passphrase.filter(|p| !p.is_empty());

    let text = core::str::from_utf8(input).map_err(|_| Error::FormatEncoding)?;
    let envelope = Envelope::parse(text)?;
    debug!("detected `{}` private key envelope", envelope.label);

    let payload = match &envelope.dek_info {
        Some(dek_info) => legacy::decrypt(dek_info, &envelope.data, passphrase)?,
        None => envelope.data.clone(),
    };

    match envelope.label {
        LABEL_RSA => legacy::decode_rsa(&payload),
        LABEL_DSA => legacy::decode_dsa(&payload),
        LABEL_EC => legacy::decode_ec(&payload),
        LABEL_OPENSSH => openssh::decode(&payload, passphrase),
        LABEL_SSHCOM => sshcom::decode(&payload, passphrase),
        other => Err(Error::KeyTypeUnsupported { name: other.into() }),
    }
}
