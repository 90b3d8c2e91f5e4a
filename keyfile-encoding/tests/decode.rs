//! Tests for the `Decode` and `Reader` traits.

use hex_literal::hex;
use keyfile_encoding::{Decode, Error, Mpint, Reader};

#[test]
fn decode_u8() {
    let mut bytes = hex!("42").as_slice();
    let ret = u8::decode(&mut bytes).unwrap();
    assert_eq!(ret, 0x42u8);
}

#[test]
fn decode_u32() {
    let mut bytes = hex!("DEADBEEF").as_slice();
    let ret = u32::decode(&mut bytes).unwrap();
    assert_eq!(ret, 0xDEADBEEFu32);
}

#[test]
fn decode_u32_truncated() {
    let mut bytes = hex!("DEADBE").as_slice();
    assert_eq!(u32::decode(&mut bytes).err().unwrap(), Error::Length);
}

#[test]
fn decode_usize() {
    let mut bytes = hex!("000FFFFF").as_slice();
    let ret = usize::decode(&mut bytes).unwrap();
    assert_eq!(ret, 0xFFFFFusize);
}

/// `usize` decoder has a sanity limit of 0xFFFFF.
#[test]
fn reject_oversize_usize() {
    let mut bytes = hex!("00100000").as_slice();
    let err = usize::decode(&mut bytes).err().unwrap();
    assert_eq!(err, Error::Overflow);
}

#[test]
fn decode_byte_array() {
    let mut bytes = hex!("6f70656e7373682d6b65792d763100").as_slice();
    let ret = <[u8; 15]>::decode(&mut bytes).unwrap();
    assert_eq!(&ret, b"openssh-key-v1\0");
    assert!(bytes.is_finished());
}

#[test]
fn decode_byte_vec() {
    let mut bytes = hex!("000000076578616d706c65").as_slice();
    let ret = Vec::<u8>::decode(&mut bytes).unwrap();
    assert_eq!(&ret, b"example");
}

#[test]
fn decode_byte_vec_length_exceeds_input() {
    let mut bytes = hex!("000000086578616d706c65").as_slice();
    assert_eq!(Vec::<u8>::decode(&mut bytes).err().unwrap(), Error::Length);
}

#[test]
fn decode_string() {
    let mut bytes = hex!("000000076578616d706c65").as_slice();
    let ret = String::decode(&mut bytes).unwrap();
    assert_eq!(&ret, "example");
}

#[test]
fn decode_string_invalid_utf8() {
    let mut bytes = hex!("00000002c328").as_slice();
    assert_eq!(
        String::decode(&mut bytes).err().unwrap(),
        Error::CharacterEncoding
    );
}

#[test]
fn drain_prefixed() {
    let mut bytes = hex!("00000003aabbcc00000001dd").as_slice();
    assert_eq!(bytes.drain_prefixed().unwrap(), 3);
    assert_eq!(Vec::<u8>::decode(&mut bytes).unwrap(), hex!("dd"));
    bytes.ensure_finished().unwrap();
}

#[test]
fn finish_with_trailing_data() {
    let bytes = hex!("0102").as_slice();
    assert_eq!(
        bytes.finish(()).err().unwrap(),
        Error::TrailingData { remaining: 2 }
    );
}

#[test]
fn read_mpint_with_sign_byte() {
    let mut bytes = hex!("000000020080").as_slice();
    let n = bytes.read_mpint().unwrap();
    assert_eq!(n.as_bytes(), &hex!("0080"));
    assert_eq!(n.as_positive_bytes().unwrap(), &hex!("80"));
}

#[test]
fn read_mpint_rejects_non_canonical() {
    let mut bytes = hex!("000000020001").as_slice();
    assert_eq!(bytes.read_mpint().err().unwrap(), Error::MpintEncoding);
}

#[test]
fn read_bit_length_mpint() {
    // 17 bits => 3 bytes of magnitude
    let mut bytes = hex!("00000011 010001").as_slice();
    let e = bytes.read_bit_length_mpint().unwrap();
    assert_eq!(e, Mpint::from_bytes(&hex!("010001")).unwrap());
    assert!(bytes.is_finished());
}

#[test]
fn read_bit_length_mpint_msb_set() {
    // 16 bits with the top bit set gets a sign byte
    let mut bytes = hex!("00000010 ff01").as_slice();
    let n = bytes.read_bit_length_mpint().unwrap();
    assert_eq!(n.as_bytes(), &hex!("00ff01"));
    assert!(n.is_positive());
}

#[test]
fn read_bit_length_mpint_zero_bits() {
    let mut bytes = hex!("00000000").as_slice();
    let n = bytes.read_bit_length_mpint().unwrap();
    assert!(n.as_bytes().is_empty());
}

#[test]
fn read_bit_length_mpint_truncated() {
    let mut bytes = hex!("00000400 0102").as_slice();
    assert_eq!(bytes.read_bit_length_mpint().err().unwrap(), Error::Length);
}

#[test]
fn base64_wrapped_lines() {
    let ret = keyfile_encoding::base64::decode_wrapped("ZXhh\r\nbXBs\nZQ==\n").unwrap();
    assert_eq!(ret.as_slice(), b"example");
}

#[test]
fn base64_rejects_invalid_characters() {
    assert!(keyfile_encoding::base64::decode_wrapped("ZXhh*bXBsZQ==").is_err());
}
