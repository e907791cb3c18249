//! Core splitting engine - Splitter with streaming API.
//!
//! This module implements the delimiter scan over a running buffer. It
//! provides a pure streaming interface:
//!
//! - [`Splitter`] - Stateful engine owning the running buffer
//! - `push()` - Feed units in any size (1 unit, 1 KiB, 1 MiB, etc.)
//! - `next_chunk()` - Split off the next delimiter-terminated chunk
//! - `finish()` - Flush the remainder when the stream ends
//!
//! # Example
//!
//! ```
//! use lazyreader::Splitter;
//!
//! let mut splitter = Splitter::new(";".to_string())?;
//!
//! splitter.push("a;b".to_string());
//! splitter.push(";c".to_string());
//!
//! let mut chunks = Vec::new();
//! while let Some(chunk) = splitter.next_chunk() {
//!     chunks.push(chunk);
//! }
//! chunks.push(splitter.finish());
//!
//! let texts: Vec<_> = chunks.iter().filter_map(|c| c.as_str()).collect();
//! assert_eq!(texts, ["a;", "b;", "c"]);
//! # Ok::<(), lazyreader::ConfigError>(())
//! ```

use crate::chunk::Chunk;
use crate::error::ConfigError;
use crate::units::UnitSeq;
use crate::util;

/// A splitter that cuts pushed units into delimiter-terminated chunks.
///
/// `Splitter` is generic over the unit sequence type: `Splitter<Bytes>` for
/// binary streams and `Splitter<String>` for text streams. It owns the
/// running buffer of units that have been pushed but not yet emitted.
///
/// # Streaming API
///
/// - Call `push()` with units in any size
/// - Call `next_chunk()` until it returns `None`; every delimiter surfaced by
///   the pushed data is emitted before more data is needed
/// - Call `finish()` when the stream ends to take the remainder
///
/// # Scanning
///
/// A failed scan remembers how far it got, so the next scan after a `push()`
/// only looks at the new units plus `delimiter.len() - 1` units of overlap.
/// Long runs without a delimiter do not rescan the whole buffer.
///
/// # Zero-Copy
///
/// For `Bytes`, emitted chunks are split off the running `BytesMut` without
/// copying.
#[derive(Debug)]
pub struct Splitter<U: UnitSeq> {
    delimiter: U,
    buffer: U::Buffer,
    scanned: usize,
    offset: u64,
}

impl<U: UnitSeq> Splitter<U> {
    /// Creates a new splitter for the given delimiter.
    ///
    /// Returns error if the delimiter is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::Bytes;
    /// use lazyreader::Splitter;
    ///
    /// let splitter = Splitter::new(Bytes::from_static(b"\n"))?;
    /// assert_eq!(splitter.pending_len(), 0);
    /// # Ok::<(), lazyreader::ConfigError>(())
    /// ```
    pub fn new(delimiter: U) -> Result<Self, ConfigError> {
        if delimiter.raw().is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self::with_delimiter(delimiter))
    }

    /// Creates a splitter for a delimiter already known to be non-empty.
    pub(crate) fn with_delimiter(delimiter: U) -> Self {
        Self {
            delimiter,
            buffer: U::Buffer::default(),
            scanned: 0,
            offset: 0,
        }
    }

    /// Appends units to the running buffer.
    pub fn push(&mut self, data: U) {
        U::append(&mut self.buffer, data);
    }

    /// Splits off the next chunk ending with the delimiter.
    ///
    /// Returns `None` when the running buffer holds no complete chunk; push
    /// more data or call `finish()`.
    pub fn next_chunk(&mut self) -> Option<Chunk> {
        let delimiter = self.delimiter.raw();
        let buffered = U::buffer_raw(&self.buffer);

        match util::find(&buffered[self.scanned..], delimiter) {
            Some(pos) => {
                let end = self.scanned + pos + delimiter.len();
                let data = U::split_to(&mut self.buffer, end);
                self.scanned = 0;
                Some(self.emit(data))
            }
            None => {
                self.scanned = buffered.len().saturating_sub(delimiter.len() - 1);
                None
            }
        }
    }

    /// Takes the remainder of the running buffer as the final chunk.
    ///
    /// The chunk is empty if nothing is pending. The splitter keeps its
    /// offset; call `reset()` to start a new stream.
    pub fn finish(&mut self) -> Chunk {
        let data = U::take(&mut self.buffer);
        self.scanned = 0;
        self.emit(data)
    }

    /// Resets the splitter state for a new stream.
    ///
    /// Clears pending data and the offset.
    pub fn reset(&mut self) {
        self.buffer = U::Buffer::default();
        self.scanned = 0;
        self.offset = 0;
    }

    /// Returns the current offset in the stream, in units.
    ///
    /// This is the position of the next chunk to be emitted.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the size of the running buffer in encoded bytes.
    pub fn pending_len(&self) -> usize {
        U::buffer_raw(&self.buffer).len()
    }

    /// Returns the delimiter.
    pub fn delimiter(&self) -> &U {
        &self.delimiter
    }

    fn emit(&mut self, data: U) -> Chunk {
        let offset = self.offset;
        self.offset += data.unit_count() as u64;
        Chunk::with_offset(data, offset)
    }
}
