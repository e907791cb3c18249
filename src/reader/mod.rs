//! Lazy reader over unit sources.
//!
//! - [`lazy_read`] - Entry point with the default configuration
//! - [`LazyRead`] - Fused iterator of delimiter-terminated chunks

mod iter;

pub use iter::{LazyRead, lazy_read};
