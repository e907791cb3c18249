//! Stream sources.
//!
//! A source is anything that can hand out "up to N units" at a time:
//!
//! - [`UnitRead`] - The read capability the lazy reader consumes
//! - [`ReadErrorKind`] - How a source classifies a failed probe read
//! - [`BinaryReader`] - Byte units over any [`std::io::Read`]
//! - [`TextReader`] - UTF-8 character units over any [`std::io::Read`]
//! - [`InMemory`] - Byte or text units held in memory

mod binary;
mod memory;
mod text;

pub use binary::BinaryReader;
pub use memory::InMemory;
pub use text::TextReader;

use crate::units::Units;

/// Classification of a source error raised by the zero-length probe read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadErrorKind {
    /// The source cannot satisfy a zero-length read.
    ///
    /// Sources that report this always yield bytes, so the reader proceeds
    /// as if the probe had returned an empty byte sequence.
    ZeroLengthReadUnsupported,
    /// Any other failure.
    Other,
}

/// A stream that reads a bounded number of units per call.
///
/// # Contract
///
/// - `read_units(n)` returns at most `n` units
/// - It returns fewer than `n` units only at end of stream, and an empty
///   sequence exactly at end of stream
/// - All non-empty results have the same [`crate::UnitKind`]
/// - `read_units(0)` returns an empty sequence of that kind, unless the
///   source classifies its failure as
///   [`ReadErrorKind::ZeroLengthReadUnsupported`]
///
/// # Example
///
/// A body from an object store that rejects zero-length reads:
///
/// ```
/// use lazyreader::{lazy_read, Delimiter, ReadErrorKind, UnitRead, Units};
///
/// #[derive(Debug)]
/// enum BodyError {
///     ZeroLength,
/// }
///
/// struct Body(Vec<u8>);
///
/// impl UnitRead for Body {
///     type Error = BodyError;
///
///     fn read_units(&mut self, max_units: usize) -> Result<Units, BodyError> {
///         if max_units == 0 {
///             return Err(BodyError::ZeroLength);
///         }
///         let n = max_units.min(self.0.len());
///         Ok(Units::from(self.0.drain(..n).collect::<Vec<u8>>()))
///     }
///
///     fn probe_error_kind(&self, error: &BodyError) -> ReadErrorKind {
///         match error {
///             BodyError::ZeroLength => ReadErrorKind::ZeroLengthReadUnsupported,
///         }
///     }
/// }
///
/// let body = Body(b"a,b".to_vec());
/// let chunks: Vec<_> = lazy_read(body, Delimiter::new(b",").unwrap())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(chunks.len(), 2);
/// ```
pub trait UnitRead {
    /// Error raised by a failed read.
    type Error;

    /// Reads up to `max_units` units from the stream.
    fn read_units(&mut self, max_units: usize) -> Result<Units, Self::Error>;

    /// Classifies an error returned by a zero-length read.
    ///
    /// The default treats every error as [`ReadErrorKind::Other`].
    fn probe_error_kind(&self, _error: &Self::Error) -> ReadErrorKind {
        ReadErrorKind::Other
    }
}

impl<S: UnitRead + ?Sized> UnitRead for &mut S {
    type Error = S::Error;

    fn read_units(&mut self, max_units: usize) -> Result<Units, Self::Error> {
        (**self).read_units(max_units)
    }

    fn probe_error_kind(&self, error: &Self::Error) -> ReadErrorKind {
        (**self).probe_error_kind(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Fixed;

    impl UnitRead for Fixed {
        type Error = Infallible;

        fn read_units(&mut self, _max_units: usize) -> Result<Units, Infallible> {
            Ok(Units::from("x"))
        }
    }

    #[test]
    fn test_default_probe_error_kind_is_other() {
        let source = BinaryReader::new(&b""[..]);
        let err = std::io::Error::new(std::io::ErrorKind::Unsupported, "zero");
        assert_eq!(source.probe_error_kind(&err), ReadErrorKind::Other);
    }

    fn read_one<S: UnitRead>(mut source: S) -> Result<Units, S::Error> {
        source.read_units(1)
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut source = Fixed;
        assert_eq!(read_one(&mut source).unwrap(), Units::from("x"));
        assert_eq!(read_one(source).unwrap(), Units::from("x"));
    }
}
