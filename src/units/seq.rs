//! The unit-sequence abstraction the splitter is generic over.

use std::fmt;

use bytes::{Bytes, BytesMut};

use super::{UnitKind, Units};

mod private {
    pub trait Sealed {}

    impl Sealed for bytes::Bytes {}
    impl Sealed for String {}
}

/// A unit sequence type with a growable running buffer.
///
/// Implemented for [`Bytes`] (running buffer: [`BytesMut`]) and [`String`]
/// (running buffer: [`TextBuffer`]). Positions passed to [`UnitSeq::split_to`] are
/// offsets into the encoded representation and must fall on a unit
/// boundary. For text this holds for any match of a UTF-8 delimiter inside
/// UTF-8 content.
///
/// This trait is sealed.
pub trait UnitSeq: private::Sealed + Sized + Clone + fmt::Debug + Into<Units> {
    /// The unit kind of this sequence type.
    const KIND: UnitKind;

    /// Growable accumulator for this sequence type.
    type Buffer: Default + fmt::Debug;

    /// Returns the encoded representation.
    fn raw(&self) -> &[u8];

    /// Returns the encoded representation of a running buffer.
    fn buffer_raw(buffer: &Self::Buffer) -> &[u8];

    /// Appends `data` to the end of `buffer`.
    fn append(buffer: &mut Self::Buffer, data: Self);

    /// Splits off the first `at` encoded bytes of `buffer`.
    fn split_to(buffer: &mut Self::Buffer, at: usize) -> Self;

    /// Takes the whole content of `buffer`, leaving it empty.
    fn take(buffer: &mut Self::Buffer) -> Self;

    /// Returns the number of units in this sequence.
    fn unit_count(&self) -> usize;

    /// Extracts this sequence type from [`Units`], returning the input on a
    /// kind mismatch.
    fn from_units(units: Units) -> Result<Self, Units>;
}

impl UnitSeq for Bytes {
    const KIND: UnitKind = UnitKind::Bytes;

    type Buffer = BytesMut;

    fn raw(&self) -> &[u8] {
        self
    }

    fn buffer_raw(buffer: &BytesMut) -> &[u8] {
        buffer
    }

    fn append(buffer: &mut BytesMut, data: Self) {
        buffer.extend_from_slice(&data);
    }

    fn split_to(buffer: &mut BytesMut, at: usize) -> Self {
        buffer.split_to(at).freeze()
    }

    fn take(buffer: &mut BytesMut) -> Self {
        buffer.split().freeze()
    }

    fn unit_count(&self) -> usize {
        self.len()
    }

    fn from_units(units: Units) -> Result<Self, Units> {
        units.into_bytes()
    }
}

/// Running buffer for text.
///
/// Split-off chunks advance `start` instead of shifting the rest of the
/// text; the consumed prefix is dropped on the next append.
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    start: usize,
}

impl TextBuffer {
    fn pending(&self) -> &str {
        &self.text[self.start..]
    }
}

impl UnitSeq for String {
    const KIND: UnitKind = UnitKind::Text;

    type Buffer = TextBuffer;

    fn raw(&self) -> &[u8] {
        self.as_bytes()
    }

    fn buffer_raw(buffer: &TextBuffer) -> &[u8] {
        buffer.pending().as_bytes()
    }

    fn append(buffer: &mut TextBuffer, data: Self) {
        if buffer.start == buffer.text.len() {
            buffer.text = data;
        } else {
            buffer.text.drain(..buffer.start);
            buffer.text.push_str(&data);
        }
        buffer.start = 0;
    }

    fn split_to(buffer: &mut TextBuffer, at: usize) -> Self {
        let end = buffer.start + at;
        let head = buffer.text[buffer.start..end].to_owned();
        buffer.start = end;
        head
    }

    fn take(buffer: &mut TextBuffer) -> Self {
        let rest = if buffer.start == 0 {
            std::mem::take(&mut buffer.text)
        } else {
            let rest = buffer.pending().to_owned();
            buffer.text.clear();
            rest
        };
        buffer.start = 0;
        rest
    }

    fn unit_count(&self) -> usize {
        self.chars().count()
    }

    fn from_units(units: Units) -> Result<Self, Units> {
        units.into_string()
    }
}
