//! UTF-8 text source over `std::io::Read`.

use std::io::{self, Read};

use super::UnitRead;
use crate::units::Units;

/// Minimum number of bytes requested from the inner reader at once.
const MIN_FILL: usize = 64;

/// A text-typed source decoding UTF-8 from any [`std::io::Read`].
///
/// `read_units(n)` returns up to `n` characters. Code points split across
/// underlying reads are reassembled. Line endings are passed through as-is.
///
/// Invalid UTF-8, or a stream ending in the middle of a code point, is an
/// [`io::ErrorKind::InvalidData`] error. Characters decoded by the failing
/// call are lost.
///
/// # Example
///
/// ```
/// use lazyreader::{TextReader, UnitRead};
///
/// let mut source = TextReader::new("größe".as_bytes());
/// let units = source.read_units(3)?;
/// assert_eq!(units.as_str(), Some("grö"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TextReader<R> {
    inner: R,
    pending: Vec<u8>,
    eof: bool,
}

impl<R: Read> TextReader<R> {
    /// Wraps a reader producing UTF-8.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            eof: false,
        }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the adapter and returns the underlying reader.
    ///
    /// Bytes read ahead but not yet decoded are discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads more bytes into `pending`, returning how many arrived.
    fn fill(&mut self, want: usize) -> io::Result<usize> {
        let start = self.pending.len();
        self.pending.resize(start + want.max(MIN_FILL), 0);

        let result = loop {
            match self.inner.read(&mut self.pending[start..]) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => break other,
            }
        };

        let n = (*result.as_ref().unwrap_or(&0)).min(self.pending.len() - start);
        self.pending.truncate(start + n);
        if n == 0 && result.is_ok() {
            self.eof = true;
        }
        result
    }
}

impl<R: Read> UnitRead for TextReader<R> {
    type Error = io::Error;

    fn read_units(&mut self, max_units: usize) -> io::Result<Units> {
        let mut out = String::new();
        let mut count = 0;

        while count < max_units {
            let (consumed, decoded) = decode(&self.pending, max_units - count, &mut out)?;
            self.pending.drain(..consumed);
            count += decoded;

            if count == max_units {
                break;
            }
            if self.eof {
                if !self.pending.is_empty() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "stream ended inside a UTF-8 code point",
                    ));
                }
                break;
            }
            self.fill(max_units - count)?;
        }

        Ok(Units::Text(out))
    }
}

/// Decodes up to `limit` characters from the front of `bytes` into `out`.
///
/// Returns the number of bytes consumed and characters decoded. An
/// incomplete code point at the end of `bytes` is left unconsumed.
fn decode(bytes: &[u8], limit: usize, out: &mut String) -> io::Result<(usize, usize)> {
    let (valid, invalid) = match std::str::from_utf8(bytes) {
        Ok(s) => (s, false),
        Err(e) => {
            // The prefix up to `valid_up_to` is valid UTF-8.
            let valid = std::str::from_utf8(&bytes[..e.valid_up_to()])
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            (valid, e.error_len().is_some())
        }
    };

    let mut consumed = 0;
    let mut decoded = 0;
    for (idx, ch) in valid.char_indices() {
        if decoded == limit {
            break;
        }
        consumed = idx + ch.len_utf8();
        decoded += 1;
    }
    out.push_str(&valid[..consumed]);

    if invalid && decoded < limit && consumed == valid.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        ));
    }

    Ok((consumed, decoded))
}
