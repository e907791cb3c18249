//! Async streaming support for lazy reading.
//!
//! This module provides asynchronous splitting using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! - [`lazy_read_async`] - Creates an async stream of chunks from an async reader
//! - [`LazyReadStream`] - The stream itself
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{LazyReadStream, lazy_read_async};
