//! In-memory source.

use std::convert::Infallible;

use super::UnitRead;
use crate::units::Units;

/// A source serving units from a body held in memory.
///
/// The body's kind decides the unit type: a byte body hands out bytes, a
/// text body hands out characters. Reads never fail.
///
/// # Example
///
/// ```
/// use lazyreader::{InMemory, UnitRead};
///
/// let mut source = InMemory::new("abc");
/// assert_eq!(source.read_units(2).unwrap().as_str(), Some("ab"));
/// assert_eq!(source.read_units(2).unwrap().as_str(), Some("c"));
/// assert!(source.read_units(2).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemory {
    body: Units,
    position: usize,
}

impl InMemory {
    /// Creates a source over `body`.
    pub fn new(body: impl Into<Units>) -> Self {
        Self {
            body: body.into(),
            position: 0,
        }
    }

    /// Returns the current position in the body, in encoded bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the whole body has been read.
    pub fn is_exhausted(&self) -> bool {
        self.position == self.body.raw_len()
    }
}

impl UnitRead for InMemory {
    type Error = Infallible;

    fn read_units(&mut self, max_units: usize) -> Result<Units, Infallible> {
        let units = match &self.body {
            Units::Bytes(body) => {
                let end = (self.position + max_units).min(body.len());
                let slice = body.slice(self.position..end);
                self.position = end;
                Units::Bytes(slice)
            }
            Units::Text(body) => {
                let rest = &body[self.position..];
                let len = rest
                    .char_indices()
                    .nth(max_units)
                    .map_or(rest.len(), |(idx, _)| idx);
                self.position += len;
                Units::Text(rest[..len].to_owned())
            }
        };
        Ok(units)
    }
}
