#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod kdf;
pub mod private;
pub mod public;

mod algorithm;
mod comment;
mod error;
mod format;
mod host_key;

pub use crate::{
    algorithm::{Algorithm, EcdsaCurve, HashAlg, KdfAlg},
    comment::Comment,
    error::{Error, Result},
    host_key::HostKeyAlgorithm,
    kdf::Kdf,
    private::PrivateKey,
};
pub use cipher::{self, Cipher};
pub use encoding::{self, Mpint};
pub use sec1;

#[cfg(feature = "ed25519")]
pub use ed25519_dalek;

#[cfg(feature = "rsa")]
pub use rsa;
