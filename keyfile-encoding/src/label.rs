//! Convenience trait for decoding string labels.

use crate::{Decode, Error, Reader, Result};
use alloc::string::String;
use core::{fmt, str::FromStr};

/// Maximum size of any algorithm name/identifier.
const MAX_LABEL_SIZE: usize = 48;

/// Labels for e.g. cryptographic algorithms.
///
/// Receives a blanket impl of [`Decode`].
pub trait Label: AsRef<str> + FromStr<Err = LabelError> {}

impl<T: Label> Decode for T {
    type Error = Error;

    fn decode(reader: &mut impl Reader) -> Result<Self> {
        let mut buf = [0u8; MAX_LABEL_SIZE];
        Ok(reader.read_string(buf.as_mut())?.parse()?)
    }
}

/// Errors related to labels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelError {
    /// The label that caused the error.
    label: String,
}

impl LabelError {
    /// Create a new [`LabelError`] for the given invalid label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The invalid label string (if available).
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid label: '{}'", self.label)
    }
}

impl core::error::Error for LabelError {}
