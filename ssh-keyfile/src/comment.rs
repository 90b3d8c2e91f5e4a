//! Private key comment support.

use core::{
    fmt,
    str::{self, Utf8Error},
};
use encoding::{Decode, Reader};

/// Free-text comment attached to an OpenSSH private key (conventionally the
/// `user@host` which generated it).
///
/// `openssh-key-v1` stores the comment as an [RFC4251] `string`, which may
/// hold arbitrary bytes, so the comment is kept as binary data and only
/// interpreted as UTF-8 on request.
///
/// [RFC4251]: https://datatracker.ietf.org/doc/html/rfc4251#section-5
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Comment(Box<[u8]>);

impl Comment {
    /// Interpret the comment as raw binary data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Interpret the comment as a UTF-8 string.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(&self.0)
    }

    /// The longest prefix of the comment which is valid UTF-8.
    pub fn as_str_lossy(&self) -> &str {
        match str::from_utf8(&self.0) {
            Ok(s) => s,
            Err(err) => str::from_utf8(&self.0[..err.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Is the comment empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the length of this comment in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for Comment {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Decode for Comment {
    type Error = encoding::Error;

    fn decode(reader: &mut impl Reader) -> encoding::Result<Self> {
        Vec::<u8>::decode(reader).map(Into::into)
    }
}

impl From<&str> for Comment {
    fn from(s: &str) -> Comment {
        s.as_bytes().into()
    }
}

impl From<&[u8]> for Comment {
    fn from(bytes: &[u8]) -> Comment {
        Self(bytes.into())
    }
}

impl From<Vec<u8>> for Comment {
    fn from(vec: Vec<u8>) -> Self {
        Self(vec.into_boxed_slice())
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::Comment;

    #[test]
    fn as_str_lossy_ignores_non_utf8_data() {
        const EXAMPLE: &[u8] = b"hello world\xc3\x28";

        let comment = Comment::from(EXAMPLE);
        assert!(comment.as_str().is_err());
        assert_eq!(comment.as_str_lossy(), "hello world");
    }

    #[test]
    fn decode_from_string() {
        let mut bytes = b"\x00\x00\x00\x10user@example.com".as_slice();
        let comment = <Comment as encoding::Decode>::decode(&mut bytes).unwrap();
        assert_eq!(comment.as_str().unwrap(), "user@example.com");
        assert_eq!(comment.len(), 16);
    }
}
