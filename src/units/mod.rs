//! Unit sequences.
//!
//! - [`UnitKind`] - Whether a stream is made of bytes or characters
//! - [`Units`] - A byte or text sequence as returned by a source
//! - [`UnitSeq`] - Sealed abstraction the splitter is generic over
//! - [`TextBuffer`] - Running buffer for text sequences

mod seq;

pub use seq::{TextBuffer, UnitSeq};

use std::fmt;

use bytes::Bytes;

/// The atomic element type of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Raw bytes (binary mode).
    Bytes,
    /// Unicode characters (text mode).
    Text,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Bytes => f.write_str("bytes"),
            UnitKind::Text => f.write_str("text"),
        }
    }
}

/// A sequence of units, either bytes or text.
///
/// Sources hand these out from [`crate::UnitRead::read_units`] and chunks
/// carry one as their payload. The two variants are never mixed within a
/// single stream.
///
/// # Example
///
/// ```
/// use lazyreader::{UnitKind, Units};
///
/// let text = Units::from("héllo");
/// assert_eq!(text.kind(), UnitKind::Text);
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.raw_len(), 6);
///
/// let bytes = Units::from(&b"hello"[..]);
/// assert_eq!(bytes.as_bytes().map(|b| &b[..]), Some(&b"hello"[..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Units {
    /// A byte sequence.
    Bytes(Bytes),
    /// A text sequence.
    Text(String),
}

impl Units {
    /// Returns an empty sequence of the given kind.
    pub fn empty(kind: UnitKind) -> Self {
        match kind {
            UnitKind::Bytes => Units::Bytes(Bytes::new()),
            UnitKind::Text => Units::Text(String::new()),
        }
    }

    /// Returns the unit kind of this sequence.
    pub fn kind(&self) -> UnitKind {
        match self {
            Units::Bytes(_) => UnitKind::Bytes,
            Units::Text(_) => UnitKind::Text,
        }
    }

    /// Returns the number of units: bytes for byte sequences, characters
    /// for text.
    pub fn len(&self) -> usize {
        match self {
            Units::Bytes(b) => b.len(),
            Units::Text(s) => s.chars().count(),
        }
    }

    /// Returns the length of the encoded representation in bytes.
    pub fn raw_len(&self) -> usize {
        self.as_raw().len()
    }

    /// Returns true if the sequence holds no units.
    pub fn is_empty(&self) -> bool {
        self.as_raw().is_empty()
    }

    /// Returns the encoded representation (UTF-8 for text).
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Units::Bytes(b) => b,
            Units::Text(s) => s.as_bytes(),
        }
    }

    /// Returns the byte payload, or `None` for text.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Units::Bytes(b) => Some(b),
            Units::Text(_) => None,
        }
    }

    /// Returns the text payload, or `None` for bytes.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Units::Bytes(_) => None,
            Units::Text(s) => Some(s),
        }
    }

    /// Consumes the sequence and returns the byte payload.
    ///
    /// Returns the sequence unchanged if it holds text.
    pub fn into_bytes(self) -> Result<Bytes, Self> {
        match self {
            Units::Bytes(b) => Ok(b),
            other => Err(other),
        }
    }

    /// Consumes the sequence and returns the text payload.
    ///
    /// Returns the sequence unchanged if it holds bytes.
    pub fn into_string(self) -> Result<String, Self> {
        match self {
            Units::Text(s) => Ok(s),
            other => Err(other),
        }
    }

    /// Returns true if this sequence ends with `suffix`.
    ///
    /// Sequences of different kinds never match.
    pub fn ends_with(&self, suffix: &Units) -> bool {
        self.kind() == suffix.kind() && self.as_raw().ends_with(suffix.as_raw())
    }
}

impl From<Bytes> for Units {
    fn from(data: Bytes) -> Self {
        Units::Bytes(data)
    }
}

impl From<Vec<u8>> for Units {
    fn from(data: Vec<u8>) -> Self {
        Units::Bytes(Bytes::from(data))
    }
}

impl From<&[u8]> for Units {
    fn from(data: &[u8]) -> Self {
        Units::Bytes(Bytes::copy_from_slice(data))
    }
}

impl<const N: usize> From<&[u8; N]> for Units {
    fn from(data: &[u8; N]) -> Self {
        Units::Bytes(Bytes::copy_from_slice(data))
    }
}

impl From<String> for Units {
    fn from(data: String) -> Self {
        Units::Text(data)
    }
}

impl From<&str> for Units {
    fn from(data: &str) -> Self {
        Units::Text(data.to_owned())
    }
}

impl PartialEq<[u8]> for Units {
    fn eq(&self, other: &[u8]) -> bool {
        matches!(self, Units::Bytes(b) if b[..] == *other)
    }
}

impl PartialEq<str> for Units {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Units::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Units {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
