//! Configuration for lazy reading.
//!
//! This module provides the types that configure how a stream is split:
//!
//! - [`ReadConfig`] - Controls read granularity and the empty-tail policy
//! - [`Delimiter`] - A validated, non-empty chunk boundary marker
//!
//! # Example
//!
//! ```
//! use lazyreader::{Delimiter, ReadConfig};
//!
//! // Request 64 KiB per underlying read
//! let config = ReadConfig::new(64 * 1024)?;
//!
//! // Split on CRLF in a byte stream
//! let delimiter = Delimiter::new(b"\r\n")?;
//!
//! # Ok::<(), lazyreader::ConfigError>(())
//! ```

use std::fmt;

use crate::error::ConfigError;
use crate::units::{UnitKind, Units};

/// Default number of units requested per underlying read.
pub const DEFAULT_READ_SIZE: usize = 1024;

/// Configuration for lazy reading behavior.
///
/// # Read Size
///
/// Every underlying read issued by one reader requests exactly `read_size`
/// units (bytes or characters, depending on the stream). The value never
/// changes during a read, regardless of how dense delimiters are, so it can
/// be relied upon when tuning throughput or asserting on a mock.
///
/// # Empty Tail
///
/// When the stream is exhausted the remaining buffered units are yielded as
/// a final chunk. If nothing remains (the stream was empty or ended exactly
/// on a delimiter) that final chunk is empty. It is yielded by default;
/// [`ReadConfig::with_empty_tail`] turns it off.
///
/// # Example
///
/// ```
/// use lazyreader::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.read_size(), 1024);
/// assert!(config.empty_tail());
///
/// let config = ReadConfig::default()
///     .with_read_size(4096)
///     .with_empty_tail(false);
/// assert_eq!(config.read_size(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadConfig {
    read_size: usize,
    empty_tail: bool,
}

impl ReadConfig {
    /// Creates a new configuration with the given read size.
    ///
    /// Returns error if `read_size` is zero.
    pub fn new(read_size: usize) -> Result<Self, ConfigError> {
        if read_size == 0 {
            return Err(ConfigError::ZeroReadSize);
        }

        Ok(Self {
            read_size,
            ..Self::default()
        })
    }

    /// Sets the read size.
    pub fn with_read_size(mut self, read_size: usize) -> Self {
        self.read_size = read_size;
        self
    }

    /// Sets whether an empty final chunk is yielded at end of stream.
    pub fn with_empty_tail(mut self, empty_tail: bool) -> Self {
        self.empty_tail = empty_tail;
        self
    }

    /// Returns the number of units requested per read.
    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Returns whether an empty final chunk is yielded.
    pub fn empty_tail(&self) -> bool {
        self.empty_tail
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.read_size).map(|_| ())
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            read_size: DEFAULT_READ_SIZE,
            empty_tail: true,
        }
    }
}

/// A non-empty sequence of units marking the end of a chunk.
///
/// The delimiter's unit kind must match the stream's; the reader checks this
/// before reading any data.
///
/// # Example
///
/// ```
/// use lazyreader::{Delimiter, UnitKind};
///
/// let newline = Delimiter::new("\n")?;
/// assert_eq!(newline.kind(), UnitKind::Text);
///
/// let crlf = Delimiter::new(b"\r\n")?;
/// assert_eq!(crlf.kind(), UnitKind::Bytes);
///
/// assert!(Delimiter::new("").is_err());
/// # Ok::<(), lazyreader::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter {
    units: Units,
}

impl Delimiter {
    /// Creates a delimiter from any byte or text sequence.
    ///
    /// Returns error if the sequence is empty.
    pub fn new(units: impl Into<Units>) -> Result<Self, ConfigError> {
        let units = units.into();
        if units.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self { units })
    }

    /// Returns the unit kind of the delimiter.
    pub fn kind(&self) -> UnitKind {
        self.units.kind()
    }

    /// Returns the delimiter's units.
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Returns the encoded representation (UTF-8 for text).
    pub fn as_raw(&self) -> &[u8] {
        self.units.as_raw()
    }

    /// Consumes the delimiter and returns its units.
    pub fn into_units(self) -> Units {
        self.units
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.units {
            Units::Bytes(b) => write!(f, "{:?}", b),
            Units::Text(s) => write!(f, "{:?}", s),
        }
    }
}
