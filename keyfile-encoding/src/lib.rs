#![no_std]
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

#[macro_use]
extern crate alloc;

#[cfg(feature = "base64")]
pub mod base64;

mod decode;
mod error;
mod label;
mod mpint;
mod reader;

pub use crate::{
    decode::Decode,
    error::{Error, Result},
    label::{Label, LabelError},
    mpint::Mpint,
    reader::Reader,
};
