//! Base64 support.

pub use base64ct::{Base64, Encoding, Error};

use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Decode a line-wrapped Base64 body (as found between PEM-style
/// encapsulation boundaries) into a self-zeroizing buffer.
///
/// Line breaks are stripped before decoding; any other character outside
/// the standard alphabet is an error.
pub fn decode_wrapped(lines: &str) -> crate::Result<Zeroizing<Vec<u8>>> {
    let joined: Zeroizing<Vec<u8>> = Zeroizing::new(
        lines
            .bytes()
            .filter(|byte| !matches!(byte, b'\r' | b'\n'))
            .collect(),
    );

    Ok(Zeroizing::new(Base64::decode_vec(
        core::str::from_utf8(&joined)?,
    )?))
}
