//! Host key algorithm bindings.

use crate::{Algorithm, HashAlg, PrivateKey};
use core::fmt;

/// A private key bound to one SSH host key algorithm name.
///
/// A single key may be usable under several algorithm names: RSA keys sign
/// with SHA-1 under `ssh-rsa` and with SHA-2 under the [RFC8332] names.
///
/// [RFC8332]: https://datatracker.ietf.org/doc/html/rfc8332
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HostKeyAlgorithm<'k> {
    algorithm: Algorithm,
    key: &'k PrivateKey,
}

impl<'k> HostKeyAlgorithm<'k> {
    pub(crate) fn new(algorithm: Algorithm, key: &'k PrivateKey) -> Self {
        Self { algorithm, key }
    }

    /// Algorithm name as negotiated on the wire, e.g. `rsa-sha2-512`.
    pub fn name(&self) -> &'static str {
        self.algorithm.as_str()
    }

    /// Algorithm this binding signs with.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Private key this binding signs with.
    pub fn key(&self) -> &'k PrivateKey {
        self.key
    }

    /// Hash function used with RSA signatures.
    ///
    /// `None` for legacy `ssh-rsa` (SHA-1) and for non-RSA algorithms, which
    /// fix their own hash.
    pub fn signature_hash(&self) -> Option<HashAlg> {
        match self.algorithm {
            Algorithm::Rsa { hash } => hash,
            _ => None,
        }
    }
}

impl fmt::Display for HostKeyAlgorithm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
