//! Async stream adapter for lazy reading.
//!
//! This module provides asynchronous splitting using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use lazyreader::{lazy_read_async, Delimiter, ReadConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), Box<dyn std::error::Error>> {
//!     let stream = lazy_read_async(reader, Delimiter::new(b"\n")?, ReadConfig::default())?;
//!     futures_util::pin_mut!(stream);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("{}", chunk);
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_core::stream::FusedStream;
use futures_io::AsyncRead;
use log::{debug, trace};
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::config::{Delimiter, ReadConfig};
use crate::error::{ConfigError, LazyReadError};
use crate::splitter::Splitter;
use crate::units::{UnitKind, UnitSeq};

/// Stream state between polls.
#[derive(Debug)]
enum StreamState {
    /// The delimiter is text; reported on the first poll.
    Mismatch(UnitKind),
    /// Splitting the byte stream.
    Active(Splitter<Bytes>),
    /// End of stream or error; nothing more is read.
    Done,
}

pin_project! {
    /// A stream that yields delimiter-terminated chunks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// Async readers always yield bytes, so every chunk is a byte chunk. Each
    /// poll that needs data reads into a buffer of `read_size` bytes; a read
    /// of zero bytes ends the stream.
    #[derive(Debug)]
    pub struct LazyReadStream<R> {
        #[pin]
        reader: R,
        buffer: Vec<u8>,
        config: ReadConfig,
        state: StreamState,
    }
}

impl<R: AsyncRead> LazyReadStream<R> {
    /// Creates a new stream from an async reader.
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(reader: R, delimiter: Delimiter, config: ReadConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = match Bytes::from_units(delimiter.into_units()) {
            Ok(delimiter) => StreamState::Active(Splitter::with_delimiter(delimiter)),
            Err(found) => StreamState::Mismatch(found.kind()),
        };

        Ok(Self {
            reader,
            buffer: vec![0u8; config.read_size()],
            config,
            state,
        })
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the stream and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> Stream for LazyReadStream<R> {
    type Item = Result<Chunk, LazyReadError<io::Error>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let splitter = match &mut *this.state {
                StreamState::Active(splitter) => splitter,
                StreamState::Mismatch(delimiter) => {
                    let delimiter = *delimiter;
                    *this.state = StreamState::Done;
                    return Poll::Ready(Some(Err(LazyReadError::DelimiterMismatch {
                        stream: UnitKind::Bytes,
                        delimiter,
                    })));
                }
                StreamState::Done => return Poll::Ready(None),
            };

            if let Some(chunk) = splitter.next_chunk() {
                return Poll::Ready(Some(Ok(chunk)));
            }

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.state = StreamState::Done;
                    return Poll::Ready(Some(Err(LazyReadError::Source(e))));
                }
                Poll::Ready(Ok(0)) => {
                    let tail = splitter.finish();
                    *this.state = StreamState::Done;
                    debug!("end of async stream after {} bytes", tail.end());

                    if tail.is_empty() && !this.config.empty_tail() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Ok(tail)));
                }
                Poll::Ready(Ok(n)) => {
                    let n = n.min(this.buffer.len());
                    trace!("read {} of {} requested bytes", n, this.buffer.len());
                    splitter.push(Bytes::copy_from_slice(&this.buffer[..n]));
                }
            }
        }
    }
}

impl<R: AsyncRead> FusedStream for LazyReadStream<R> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, StreamState::Done)
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
/// This works with any async runtime (tokio, async-std, smol, etc.).
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use lazyreader::{lazy_read_async, Delimiter, ReadConfig};
///
/// let file = tokio::fs::File::open("events.ndjson").await?;
/// let stream = lazy_read_async(file.compat(), Delimiter::new(b"\n")?, ReadConfig::default())?;
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `delimiter` - A byte delimiter; a text delimiter is reported as
///   [`LazyReadError::DelimiterMismatch`] on the first poll
/// * `config` - The read configuration
///
/// # Returns
///
/// A `LazyReadStream` that implements `Stream<Item = Result<Chunk, LazyReadError<io::Error>>>`
pub fn lazy_read_async<R: AsyncRead>(
    reader: R,
    delimiter: Delimiter,
    config: ReadConfig,
) -> Result<LazyReadStream<R>, ConfigError> {
    LazyReadStream::new(reader, delimiter, config)
}
