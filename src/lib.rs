//! lazyreader
//!
//! Lazily split a byte or text stream into delimiter-terminated chunks.
//!
//! `lazyreader` reads a stream a bounded number of units at a time and hands
//! out each piece ending in the delimiter as soon as it is complete. It is
//! designed for batch processing of large inputs:
//!
//! - log files and newline-delimited records
//! - exports split on a custom separator
//! - object-storage bodies that should not be buffered whole
//!
//! The crate intentionally:
//! - does NOT parse the chunks
//! - does NOT seek or rewind
//! - does NOT support more than one delimiter
//! - does NOT open or close the stream
//!
//! It only does one thing: **Read units → yield chunks**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use lazyreader::{lazy_read, BinaryReader, Delimiter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = File::open("data.log")?;
//!
//!     for chunk in lazy_read(BinaryReader::new(file), Delimiter::new(b"\n")?) {
//!         let chunk = chunk?;
//!         println!("line of {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Text
//!
//! ```
//! use lazyreader::{lazy_read, Delimiter, TextReader};
//!
//! let source = TextReader::new("uno;dos;tres".as_bytes());
//! let words: Vec<String> = lazy_read(source, Delimiter::new(";")?)
//!     .map(|chunk| chunk.map(|c| c.as_str().unwrap_or_default().to_owned()))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(words, ["uno;", "dos;", "tres"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use lazyreader::{lazy_read_async, Delimiter, ReadConfig};
//! use tokio_util::compat::TokioAsyncReadCompatExt;
//!
//! async fn demo(file: tokio::fs::File) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut stream = lazy_read_async(file.compat(), Delimiter::new(b"\n")?, ReadConfig::default())?;
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("line of {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod reader;
mod source;
mod splitter;
mod units;

mod util; // internal helpers

#[cfg(feature = "async-io")]
mod async_stream;

#[cfg(test)]
mod proptests;

//
// Public surface
//

pub use chunk::Chunk;
pub use config::{DEFAULT_READ_SIZE, Delimiter, ReadConfig};
pub use error::{ConfigError, LazyReadError};
pub use reader::{LazyRead, lazy_read};
pub use source::{BinaryReader, InMemory, ReadErrorKind, TextReader, UnitRead};
pub use splitter::Splitter;
pub use units::{TextBuffer, UnitKind, UnitSeq, Units};

#[cfg(feature = "async-io")]
pub use async_stream::{LazyReadStream, lazy_read_async};
