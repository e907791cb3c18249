//! Error types for lazyreader.

use thiserror::Error;

use crate::units::UnitKind;

/// Invalid reader configuration, reported by constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The delimiter holds no units.
    #[error("invalid config: delimiter must not be empty")]
    EmptyDelimiter,

    /// The read size is zero.
    #[error("invalid config: read size must be non-zero")]
    ZeroReadSize,
}

/// Errors yielded while lazily reading a stream.
///
/// `E` is the error type of the underlying source. Source errors are carried
/// unchanged: their `Display` and `source()` are forwarded as-is.
#[derive(Debug, Error)]
pub enum LazyReadError<E> {
    /// The source failed to read.
    #[error(transparent)]
    Source(E),

    /// The delimiter's unit kind differs from the stream's.
    #[error("delimiter is {delimiter} but the stream yields {stream}")]
    DelimiterMismatch {
        /// Unit kind detected on the stream.
        stream: UnitKind,
        /// Unit kind of the delimiter.
        delimiter: UnitKind,
    },

    /// The stream returned units of a different kind than it did before.
    #[error("stream switched from {expected} to {found} mid-stream")]
    InconsistentUnits {
        /// Unit kind established by the probe.
        expected: UnitKind,
        /// Unit kind of the offending read.
        found: UnitKind,
    },
}

impl<E> LazyReadError<E> {
    /// Returns the source error, if this is one.
    pub fn into_source(self) -> Option<E> {
        match self {
            LazyReadError::Source(e) => Some(e),
            _ => None,
        }
    }
}
