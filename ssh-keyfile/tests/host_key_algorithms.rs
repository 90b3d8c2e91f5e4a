//! Host key algorithm binding tests.

use ssh_keyfile::{Algorithm, EcdsaCurve, HashAlg, PrivateKey};

const OPENSSH_RSA_EXAMPLE: &str = include_str!("examples/id_rsa");
const OPENSSH_ED25519_EXAMPLE: &str = include_str!("examples/id_ed25519");
const OPENSSH_ECDSA_P384_EXAMPLE: &str = include_str!("examples/id_ecdsa_p384");
const PEM_DSA_EXAMPLE: &str = include_str!("examples/id_dsa.pem");

#[test]
fn rsa_binds_three_algorithms() {
    let key = PrivateKey::from_key_file(OPENSSH_RSA_EXAMPLE, None).unwrap();
    let algorithms = key.host_key_algorithms();

    let names: Vec<&str> = algorithms.iter().map(|alg| alg.name()).collect();
    assert_eq!(names, ["ssh-rsa", "rsa-sha2-512", "rsa-sha2-256"]);

    let hashes: Vec<Option<HashAlg>> = algorithms.iter().map(|alg| alg.signature_hash()).collect();
    assert_eq!(hashes, [None, Some(HashAlg::Sha512), Some(HashAlg::Sha256)]);

    for alg in &algorithms {
        assert_eq!(alg.key(), &key);
    }
}

#[test]
fn ed25519_binds_one_algorithm() {
    let key = PrivateKey::from_key_file(OPENSSH_ED25519_EXAMPLE, None).unwrap();
    let algorithms = key.host_key_algorithms();
    assert_eq!(algorithms.len(), 1);
    assert_eq!(algorithms[0].name(), "ssh-ed25519");
    assert_eq!(algorithms[0].algorithm(), Algorithm::Ed25519);
    assert_eq!(algorithms[0].signature_hash(), None);
}

#[test]
fn ecdsa_binds_one_algorithm() {
    let key = PrivateKey::from_key_file(OPENSSH_ECDSA_P384_EXAMPLE, None).unwrap();
    let algorithms = key.host_key_algorithms();
    assert_eq!(algorithms.len(), 1);
    assert_eq!(algorithms[0].name(), "ecdsa-sha2-nistp384");
    assert_eq!(
        algorithms[0].algorithm(),
        Algorithm::Ecdsa {
            curve: EcdsaCurve::NistP384
        }
    );
}

#[test]
fn dsa_binds_one_algorithm() {
    let key = PrivateKey::from_key_file(PEM_DSA_EXAMPLE, None).unwrap();
    let algorithms = key.host_key_algorithms();
    assert_eq!(algorithms.len(), 1);
    assert_eq!(algorithms[0].to_string(), "ssh-dss");
}

#[test]
fn algorithm_names_round_trip() {
    for name in [
        "ssh-dss",
        "ecdsa-sha2-nistp256",
        "ecdsa-sha2-nistp384",
        "ecdsa-sha2-nistp521",
        "ssh-ed25519",
        "ssh-rsa",
        "rsa-sha2-256",
        "rsa-sha2-512",
    ] {
        let algorithm = Algorithm::new(name).unwrap();
        assert_eq!(algorithm.as_str(), name);
    }

    assert!(Algorithm::new("ssh-foo").is_err());
}
