//! Lazy reading - LazyRead iterator.
//!
//! This module implements the synchronous lazy reader. It provides:
//!
//! - [`lazy_read`] - Starts reading a source with the default configuration
//! - [`LazyRead`] - Iterator that yields delimiter-terminated chunks from a
//!   [`UnitRead`] source
//!
//! # Example
//!
//! ```
//! use lazyreader::{lazy_read, Delimiter, InMemory};
//!
//! let source = InMemory::new("A triplet of lines;separated by semicolons;not newlines");
//! let chunks: Vec<_> = lazy_read(source, Delimiter::new(";")?)
//!     .map(|chunk| chunk.map(|c| c.as_str().unwrap_or_default().to_string()))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(
//!     chunks,
//!     ["A triplet of lines;", "separated by semicolons;", "not newlines"]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::iter::FusedIterator;

use bytes::Bytes;
use log::{debug, trace};

use crate::chunk::Chunk;
use crate::config::{Delimiter, ReadConfig};
use crate::error::{ConfigError, LazyReadError};
use crate::source::{ReadErrorKind, UnitRead};
use crate::splitter::Splitter;
use crate::units::{UnitKind, UnitSeq, Units};

/// Creates a lazy reader over `source` with the default configuration.
///
/// Nothing is read until the first call to `next()`.
///
/// # Example
///
/// ```
/// use lazyreader::{lazy_read, Delimiter, InMemory};
///
/// let mut chunks = lazy_read(InMemory::new(&b"foo\nbar\nbaz"[..]), Delimiter::new(b"\n")?);
///
/// let first = chunks.next().unwrap()?;
/// assert_eq!(first.as_bytes().map(|b| &b[..]), Some(&b"foo\n"[..]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn lazy_read<S: UnitRead>(source: S, delimiter: Delimiter) -> LazyRead<S> {
    LazyRead::new(source, delimiter)
}

/// Reader state between pulls.
#[derive(Debug)]
enum State {
    /// The unit kind has not been probed yet.
    Probe,
    /// Splitting a byte stream.
    Bytes(Splitter<Bytes>),
    /// Splitting a text stream.
    Text(Splitter<String>),
    /// End of stream or error; nothing more is read.
    Done,
}

/// Outcome of driving a splitter until it has something to hand out.
enum Step {
    /// A delimiter-terminated chunk; more may follow.
    Chunk(Chunk),
    /// The stream is exhausted; the final chunk, if any.
    End(Option<Chunk>),
}

/// An iterator that yields delimiter-terminated chunks from a source.
///
/// `LazyRead` reads `read_size` units at a time from a [`UnitRead`] source
/// and yields chunks as delimiters are found. It never holds more than the
/// current partial chunk plus one read in memory.
///
/// On the first call to `next()` the source is probed with a zero-length
/// read to learn whether it yields bytes or text. A delimiter of the other
/// kind is reported as [`LazyReadError::DelimiterMismatch`] before any data
/// is read.
///
/// The iterator is fused: after the final chunk or any error it returns
/// `None` and issues no further reads. Dropping it early is safe; the
/// source is left wherever the last read put it.
///
/// # Example
///
/// ```
/// use lazyreader::{Delimiter, InMemory, LazyRead, ReadConfig};
///
/// let config = ReadConfig::new(4)?;
/// let source = InMemory::new("one\ntwo\n");
/// let reader = LazyRead::with_config(source, Delimiter::new("\n")?, config)?;
///
/// let chunks: Vec<_> = reader.collect::<Result<_, _>>()?;
/// assert_eq!(chunks.len(), 3);
/// assert!(chunks[2].is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LazyRead<S> {
    source: S,
    delimiter: Delimiter,
    config: ReadConfig,
    state: State,
}

impl<S: UnitRead> LazyRead<S> {
    /// Creates a lazy reader with the default configuration.
    pub fn new(source: S, delimiter: Delimiter) -> Self {
        Self {
            source,
            delimiter,
            config: ReadConfig::default(),
            state: State::Probe,
        }
    }

    /// Creates a lazy reader with the given configuration.
    ///
    /// Returns error if the configuration is invalid.
    pub fn with_config(
        source: S,
        delimiter: Delimiter,
        config: ReadConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            delimiter,
            config,
            state: State::Probe,
        })
    }

    /// Returns the unit kind of the stream, once probed.
    pub fn unit_kind(&self) -> Option<UnitKind> {
        match self.state {
            State::Bytes(_) => Some(UnitKind::Bytes),
            State::Text(_) => Some(UnitKind::Text),
            State::Probe | State::Done => None,
        }
    }

    /// Returns the delimiter.
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Returns a reference to the source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Consumes the reader and returns the source.
    ///
    /// Units read but not yet yielded are discarded.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Issues the zero-length read and sets up the matching splitter.
    fn probe(&mut self) -> Result<State, LazyReadError<S::Error>> {
        let seed = match self.source.read_units(0) {
            Ok(units) => units,
            Err(e) => match self.source.probe_error_kind(&e) {
                ReadErrorKind::ZeroLengthReadUnsupported => {
                    debug!("source rejects zero-length reads, assuming bytes");
                    Units::empty(UnitKind::Bytes)
                }
                ReadErrorKind::Other => return Err(LazyReadError::Source(e)),
            },
        };

        let kind = seed.kind();
        if kind != self.delimiter.kind() {
            return Err(LazyReadError::DelimiterMismatch {
                stream: kind,
                delimiter: self.delimiter.kind(),
            });
        }
        debug!("probed {} stream, delimiter {}", kind, self.delimiter);

        let delimiter = self.delimiter.units().clone();
        let state = match kind {
            UnitKind::Bytes => State::Bytes(start_splitter::<_, S::Error>(delimiter, seed)?),
            UnitKind::Text => State::Text(start_splitter::<_, S::Error>(delimiter, seed)?),
        };
        Ok(state)
    }
}

/// Builds a splitter, seeding it with anything the probe returned.
fn start_splitter<U: UnitSeq, E>(
    delimiter: Units,
    seed: Units,
) -> Result<Splitter<U>, LazyReadError<E>> {
    let delimiter = match U::from_units(delimiter) {
        Ok(delimiter) => delimiter,
        Err(found) => {
            return Err(LazyReadError::DelimiterMismatch {
                stream: U::KIND,
                delimiter: found.kind(),
            });
        }
    };
    let mut splitter = Splitter::with_delimiter(delimiter);

    if !seed.is_empty() {
        push_units::<U, E>(&mut splitter, seed)?;
    }
    Ok(splitter)
}

fn push_units<U: UnitSeq, E>(
    splitter: &mut Splitter<U>,
    units: Units,
) -> Result<(), LazyReadError<E>> {
    match U::from_units(units) {
        Ok(data) => {
            splitter.push(data);
            Ok(())
        }
        Err(found) => Err(LazyReadError::InconsistentUnits {
            expected: U::KIND,
            found: found.kind(),
        }),
    }
}

/// Reads from `source` until `splitter` yields a chunk or the stream ends.
fn advance<S: UnitRead, U: UnitSeq>(
    splitter: &mut Splitter<U>,
    source: &mut S,
    config: &ReadConfig,
) -> Result<Step, LazyReadError<S::Error>> {
    loop {
        if let Some(chunk) = splitter.next_chunk() {
            return Ok(Step::Chunk(chunk));
        }

        let units = source
            .read_units(config.read_size())
            .map_err(LazyReadError::Source)?;
        trace!(
            "read {} of {} requested units",
            units.len(),
            config.read_size()
        );

        if units.is_empty() {
            let tail = splitter.finish();
            debug!("end of stream after {} units", tail.end());
            let keep = !tail.is_empty() || config.empty_tail();
            return Ok(Step::End(keep.then_some(tail)));
        }

        push_units::<U, S::Error>(splitter, units)?;
    }
}

impl<S: UnitRead> Iterator for LazyRead<S> {
    type Item = Result<Chunk, LazyReadError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Probe = self.state {
            match self.probe() {
                Ok(state) => self.state = state,
                Err(e) => {
                    self.state = State::Done;
                    return Some(Err(e));
                }
            }
        }

        let step = match &mut self.state {
            State::Bytes(splitter) => advance(splitter, &mut self.source, &self.config),
            State::Text(splitter) => advance(splitter, &mut self.source, &self.config),
            State::Probe | State::Done => return None,
        };

        match step {
            Ok(Step::Chunk(chunk)) => Some(Ok(chunk)),
            Ok(Step::End(tail)) => {
                self.state = State::Done;
                tail.map(Ok)
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl<S: UnitRead> FusedIterator for LazyRead<S> {}
