//! The Chunk type - represents a delimiter-terminated piece of a stream.

use std::fmt;
use std::ops::Range;

use bytes::Bytes;

use crate::config::Delimiter;
use crate::units::{UnitKind, Units};

/// A chunk of a stream with its position.
///
/// Every chunk a reader yields ends with the delimiter, except possibly the
/// last one.
///
/// # Example
///
/// ```
/// use lazyreader::Chunk;
///
/// let chunk = Chunk::with_offset("bar\n", 4);
///
/// assert_eq!(chunk.as_str(), Some("bar\n"));
/// assert_eq!(chunk.range(), 4..8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The chunk's units.
    pub data: Units,

    /// Position of the chunk's first unit in the stream, counted in units.
    pub offset: u64,
}

impl Chunk {
    /// Creates a new chunk at offset zero.
    pub fn new(data: impl Into<Units>) -> Self {
        Self {
            data: data.into(),
            offset: 0,
        }
    }

    /// Creates a new chunk with an offset.
    pub fn with_offset(data: impl Into<Units>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Returns the number of units in the chunk.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no units.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the unit kind of the chunk.
    pub fn kind(&self) -> UnitKind {
        self.data.kind()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Units {
        &self.data
    }

    /// Returns the byte payload, or `None` for a text chunk.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        self.data.as_bytes()
    }

    /// Returns the text payload, or `None` for a byte chunk.
    pub fn as_str(&self) -> Option<&str> {
        self.data.as_str()
    }

    /// Returns the offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.len() as u64
    }

    /// Returns the chunk as a range of unit positions.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if the chunk ends with `delimiter`.
    pub fn ends_with(&self, delimiter: &Delimiter) -> bool {
        self.data.ends_with(delimiter.units())
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Units {
        self.data
    }
}

impl From<Units> for Chunk {
    fn from(data: Units) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.kind() {
            UnitKind::Bytes => "bytes",
            UnitKind::Text => "chars",
        };
        write!(f, "Chunk({} {} @ {})", self.len(), unit, self.offset)
    }
}
