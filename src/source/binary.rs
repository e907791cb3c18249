//! Byte source over `std::io::Read`.

use std::io::{self, Read};

use bytes::BytesMut;

use super::UnitRead;
use crate::units::Units;

/// A byte-typed source reading from any [`std::io::Read`].
///
/// Each `read_units(n)` fills up to `n` bytes, looping over short reads
/// until `n` bytes are available or the reader reports end of file. This
/// turns the "may return fewer bytes at any time" semantics of `Read` into
/// the "fewer only at end of stream" contract of [`UnitRead`].
///
/// If an inner read fails after earlier reads in the same call returned
/// data, the error is returned and those bytes are lost. A reader claiming
/// more bytes than the buffer it was given is clamped to the buffer length.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use lazyreader::{lazy_read, BinaryReader, Delimiter};
///
/// let file = File::open("data.log")?;
/// for chunk in lazy_read(BinaryReader::new(file), Delimiter::new(b"\n")?) {
///     let chunk = chunk?;
///     println!("{}", chunk);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct BinaryReader<R> {
    inner: R,
}

impl<R: Read> BinaryReader<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the adapter and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> UnitRead for BinaryReader<R> {
    type Error = io::Error;

    fn read_units(&mut self, max_units: usize) -> io::Result<Units> {
        let mut buf = BytesMut::zeroed(max_units);
        let mut filled = 0;

        while filled < max_units {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n.min(max_units - filled),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        buf.truncate(filled);
        Ok(Units::Bytes(buf.freeze()))
    }
}
