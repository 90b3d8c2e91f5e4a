//! Public halves of decoded private keys.
//!
//! Private key files carry the public key alongside (or derivable from) the
//! private material; these types hold it after decoding.

mod dsa;
mod ecdsa;
mod ed25519;
mod rsa;

pub use self::{
    dsa::DsaPublicKey,
    ecdsa::{EcdsaNistP256PublicKey, EcdsaNistP384PublicKey, EcdsaNistP521PublicKey, EcdsaPublicKey},
    ed25519::Ed25519PublicKey,
    rsa::RsaPublicKey,
};
