//! ssh.com `SSH2 ENCRYPTED PRIVATE KEY` tests.

use base64ct::{Base64, Encoding};
use hex_literal::hex;
use ssh_keyfile::{Algorithm, Error, PrivateKey};

/// Unencrypted ssh.com RSA private key.
const SSHCOM_RSA_EXAMPLE: &str = include_str!("examples/id_rsa.sshcom");

/// 3des-cbc encrypted ssh.com RSA private key.
const SSHCOM_3DES_CBC_RSA_EXAMPLE: &str = include_str!("examples/id_rsa.3des-cbc.sshcom");

/// Unencrypted ssh.com DSA private key.
const SSHCOM_DSA_EXAMPLE: &str = include_str!("examples/id_dsa.sshcom");

/// 3des-cbc encrypted ssh.com DSA private key.
const SSHCOM_3DES_CBC_DSA_EXAMPLE: &str = include_str!("examples/id_dsa.3des-cbc.sshcom");

/// ssh.com DSA private key with a non-zero check word.
const SSHCOM_BAD_CHECK_WORD_EXAMPLE: &str = include_str!("examples/id_dsa.bad-check-word.sshcom");

/// The same keys in other formats.
const OPENSSH_RSA_EXAMPLE: &str = include_str!("examples/id_rsa");
const PEM_DSA_EXAMPLE: &str = include_str!("examples/id_dsa.pem");

/// Bad password; don't actually use outside tests!
const PASSWORD: &[u8] = b"hunter42";

/// Key type string of the RSA example.
const RSA_KEY_TYPE: &[u8] = b"if-modn{sign{rsa-pkcs1-sha1},encrypt{rsa-pkcs1v2-oaep}}";

const LABEL: &str = "SSH2 ENCRYPTED";

/// Decode the Base64 payload of a key file, skipping the armor and headers.
fn payload(text: &str) -> Vec<u8> {
    let body: String = text
        .lines()
        .filter(|line| !line.starts_with('-') && !line.contains(':'))
        .collect();
    Base64::decode_vec(&body).unwrap()
}

/// Wrap `payload` in a `BEGIN <label> PRIVATE KEY` envelope.
fn armor(label: &str, payload: &[u8]) -> String {
    let encoded = Base64::encode_string(payload);
    let mut text = format!("-----BEGIN {label} PRIVATE KEY-----\n");
    for line in encoded.as_bytes().chunks(70) {
        text.push_str(core::str::from_utf8(line).unwrap());
        text.push('\n');
    }
    text.push_str(&format!("-----END {label} PRIVATE KEY-----\n"));
    text
}

/// Encode a length-prefixed SSH `string`.
fn string(bytes: &[u8]) -> Vec<u8> {
    let mut out = (bytes.len() as u32).to_be_bytes().to_vec();
    out.extend_from_slice(bytes);
    out
}

/// Replace the first occurrence of `from` in `payload` with `to`.
fn splice(payload: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let pos = payload
        .windows(from.len())
        .position(|window| window == from)
        .unwrap();
    [&payload[..pos], to, &payload[pos + from.len()..]].concat()
}

#[test]
fn decode_rsa_sshcom() {
    let key = PrivateKey::from_key_file(SSHCOM_RSA_EXAMPLE, None).unwrap();
    assert_eq!(Algorithm::Rsa { hash: None }, key.algorithm());
    assert_eq!(key.comment(), None);

    let rsa_keypair = key.key_data().rsa().unwrap();
    assert_eq!(
        &hex!("010001"),
        rsa_keypair.public().e().as_positive_bytes().unwrap()
    );
    assert_eq!(
        &hex!(
            "d8958fd7e82fc0cb82ddbe9223dd03ae02855626dc893e84a44d77727028085154fb443759f6b652871896dbae67bcdf
             7872b2d1fbdf4ba6c162556eb9d148d5"
        ),
        rsa_keypair.private().p().as_positive_bytes().unwrap()
    );
}

#[test]
fn rsa_sshcom_matches_openssh() {
    let sshcom = PrivateKey::from_key_file(SSHCOM_RSA_EXAMPLE, None).unwrap();
    let openssh = PrivateKey::from_key_file(OPENSSH_RSA_EXAMPLE, None).unwrap();
    assert_eq!(sshcom.key_data(), openssh.key_data());
}

#[test]
fn decode_rsa_sshcom_3des_cbc() {
    let key = PrivateKey::from_key_file(SSHCOM_3DES_CBC_RSA_EXAMPLE, Some(PASSWORD)).unwrap();
    let plain = PrivateKey::from_key_file(SSHCOM_RSA_EXAMPLE, None).unwrap();
    assert_eq!(key, plain);
}

#[test]
fn decode_dsa_sshcom() {
    let key = PrivateKey::from_key_file(SSHCOM_DSA_EXAMPLE, None).unwrap();
    assert_eq!(Algorithm::Dsa, key.algorithm());

    let dsa_keypair = key.key_data().dsa().unwrap();
    assert_eq!(
        &hex!("e8f3dc0d7b36b1275f3fb1e1fa638bbbcfa53c05"),
        dsa_keypair.public().q.as_positive_bytes().unwrap()
    );
    assert_eq!(
        &hex!("133142eaa8d756c04a41f502fa13212908f7a946"),
        dsa_keypair.private().as_mpint().as_positive_bytes().unwrap()
    );

    let pem = PrivateKey::from_key_file(PEM_DSA_EXAMPLE, None).unwrap();
    assert_eq!(key, pem);
}

#[test]
fn decode_dsa_sshcom_3des_cbc() {
    let key = PrivateKey::from_key_file(SSHCOM_3DES_CBC_DSA_EXAMPLE, Some(PASSWORD)).unwrap();
    let plain = PrivateKey::from_key_file(SSHCOM_DSA_EXAMPLE, None).unwrap();
    assert_eq!(key, plain);
}

#[test]
fn encrypted_sshcom_without_passphrase() {
    for passphrase in [None, Some(&b""[..])] {
        let err = PrivateKey::from_key_file(SSHCOM_3DES_CBC_RSA_EXAMPLE, passphrase)
            .err()
            .unwrap();
        assert_eq!(err, Error::PassphraseRequired);
    }
}

#[test]
fn wrong_passphrase() {
    let err = PrivateKey::from_key_file(SSHCOM_3DES_CBC_RSA_EXAMPLE, Some(b"wrong"))
        .err()
        .unwrap();
    assert_eq!(err, Error::InvalidPassphrase);
}

#[test]
fn bad_check_word() {
    let err = PrivateKey::from_key_file(SSHCOM_BAD_CHECK_WORD_EXAMPLE, None)
        .err()
        .unwrap();
    assert!(err.is_format_error());
}

#[test]
fn bad_magic() {
    let mut bytes = payload(SSHCOM_RSA_EXAMPLE);
    assert_eq!(bytes[..4], hex!("3f6ff9eb"));
    bytes[0] = 0;

    let err = PrivateKey::from_key_file(armor(LABEL, &bytes), None)
        .err()
        .unwrap();
    assert_eq!(err, Error::FormatEncoding);
}

#[test]
fn unsupported_cipher() {
    let bytes = splice(
        &payload(SSHCOM_RSA_EXAMPLE),
        &string(b"none"),
        &string(b"blowfish-cbc"),
    );

    for passphrase in [None, Some(PASSWORD)] {
        let err = PrivateKey::from_key_file(armor(LABEL, &bytes), passphrase)
            .err()
            .unwrap();
        assert_eq!(
            err,
            Error::CipherUnsupported {
                name: "blowfish-cbc".into()
            }
        );
    }
}

#[test]
fn unsupported_key_type() {
    let bytes = splice(
        &payload(SSHCOM_RSA_EXAMPLE),
        &string(RSA_KEY_TYPE),
        &string(b"ec-modp"),
    );
    let err = PrivateKey::from_key_file(armor(LABEL, &bytes), None)
        .err()
        .unwrap();
    assert_eq!(
        err,
        Error::KeyTypeUnsupported {
            name: "ec-modp".into()
        }
    );
}

#[test]
fn rearmored_example_still_decodes() {
    let bytes = payload(SSHCOM_RSA_EXAMPLE);
    let key = PrivateKey::from_key_file(armor(LABEL, &bytes), None).unwrap();
    assert_eq!(key, PrivateKey::from_key_file(SSHCOM_RSA_EXAMPLE, None).unwrap());
}
