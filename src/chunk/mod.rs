//! Chunk types.
//!
//! - [`Chunk`] - Delimiter-terminated units with their stream offset

mod data;

pub use data::Chunk;
