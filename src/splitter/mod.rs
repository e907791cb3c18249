//! Splitting engine for delimiter-terminated chunks.
//!
//! - [`Splitter`] - Running buffer with `push()`/`next_chunk()`/`finish()` API

mod engine;

pub use engine::Splitter;
