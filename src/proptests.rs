//! Property-based tests for lazy reading.
//!
//! These tests verify reader invariants hold for arbitrary inputs:
//!
//! - Concatenating every chunk reproduces the stream
//! - Every chunk but the last ends with the delimiter and holds it once
//! - Reads never exceed the configured read size
//! - Output does not depend on how the source slices its reads

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use bytes::Bytes;
use proptest::prelude::*;

use crate::chunk::Chunk;
use crate::config::{Delimiter, ReadConfig};
use crate::reader::LazyRead;
use crate::source::{InMemory, UnitRead};
use crate::splitter::Splitter;
use crate::units::Units;

/// Source that records every requested read size.
struct Recording {
    inner: InMemory,
    requests: Rc<RefCell<Vec<usize>>>,
}

impl UnitRead for Recording {
    type Error = Infallible;

    fn read_units(&mut self, max_units: usize) -> Result<Units, Infallible> {
        self.requests.borrow_mut().push(max_units);
        self.inner.read_units(max_units)
    }
}

fn read_all(body: Units, delimiter: &Units, read_size: usize) -> Vec<Chunk> {
    let config = ReadConfig::new(read_size).unwrap();
    let delimiter = Delimiter::new(delimiter.clone()).unwrap();
    LazyRead::with_config(InMemory::new(body), delimiter, config)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

// ==================== Byte Stream Properties ====================

proptest! {
    /// Chunks concatenate back to the original bytes.
    #[test]
    fn bytes_roundtrip(
        body in prop::collection::vec(0u8..4, 0..512),
        delimiter in prop::collection::vec(0u8..4, 1..4),
        read_size in 1usize..64,
    ) {
        let chunks = read_all(Units::from(body.clone()), &Units::from(delimiter), read_size);
        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.as_raw().to_vec()).collect();
        prop_assert_eq!(joined, body);
    }

    /// Every chunk except the last ends with the delimiter, and the first
    /// occurrence of the delimiter in each chunk is that ending.
    #[test]
    fn bytes_boundaries_at_first_match(
        body in prop::collection::vec(0u8..3, 0..512),
        delimiter in prop::collection::vec(0u8..3, 1..3),
        read_size in 1usize..32,
    ) {
        let chunks = read_all(Units::from(body), &Units::from(delimiter.clone()), read_size);
        let (last, init) = chunks.split_last().unwrap();

        for chunk in init {
            let raw = chunk.data.as_raw();
            prop_assert!(raw.ends_with(&delimiter));
            let first = raw.windows(delimiter.len()).position(|w| w == &delimiter[..]);
            prop_assert_eq!(first, Some(raw.len() - delimiter.len()));
        }
        prop_assert_eq!(
            last.data.as_raw().windows(delimiter.len()).position(|w| w == &delimiter[..]),
            None
        );
    }

    /// Chunking is independent of the read size.
    #[test]
    fn bytes_read_size_independent(
        body in prop::collection::vec(any::<u8>(), 0..256),
        read_size in 1usize..128,
    ) {
        let delimiter = Units::from(&b"\x00\x01"[..]);
        let reference = read_all(Units::from(body.clone()), &delimiter, 4096);
        let chunks = read_all(Units::from(body), &delimiter, read_size);
        prop_assert_eq!(chunks, reference);
    }

    /// Offsets are contiguous and start at zero.
    #[test]
    fn bytes_offsets_contiguous(
        body in prop::collection::vec(0u8..4, 0..256),
        read_size in 1usize..16,
    ) {
        let chunks = read_all(Units::from(body), &Units::from(&b"\x00"[..]), read_size);
        let mut expected = 0;
        for chunk in &chunks {
            prop_assert_eq!(chunk.offset, expected);
            expected = chunk.end();
        }
    }

    /// Only the final chunk may be empty.
    #[test]
    fn no_spurious_empty_chunks(
        body in prop::collection::vec(0u8..2, 0..256),
        read_size in 1usize..16,
    ) {
        let chunks = read_all(Units::from(body), &Units::from(&b"\x01"[..]), read_size);
        for chunk in &chunks[..chunks.len() - 1] {
            prop_assert!(!chunk.is_empty());
        }
    }
}

// ==================== Text Stream Properties ====================

proptest! {
    /// Text chunks concatenate back to the original string.
    #[test]
    fn text_roundtrip(
        body in "[aß€😀;]{0,200}",
        read_size in 1usize..32,
    ) {
        let chunks = read_all(Units::from(body.clone()), &Units::from(";"), read_size);
        let joined: String = chunks.iter().filter_map(|c| c.as_str()).collect();
        prop_assert_eq!(joined, body);
    }

    /// Text chunk count equals delimiter count plus one.
    #[test]
    fn text_chunk_count(
        body in "[ab€|]{0,200}",
        read_size in 1usize..32,
    ) {
        let chunks = read_all(Units::from(body.clone()), &Units::from("|"), read_size);
        prop_assert_eq!(chunks.len(), body.matches('|').count() + 1);
    }

    /// Multi-character delimiters are found across read boundaries.
    #[test]
    fn text_multi_char_delimiter(
        body in "[xy]{0,100}",
        read_size in 1usize..8,
    ) {
        let chunks = read_all(Units::from(body.clone()), &Units::from("xyx"), read_size);
        let expected: Vec<String> = {
            let mut out = Vec::new();
            let mut rest = body.as_str();
            while let Some(pos) = rest.find("xyx") {
                out.push(rest[..pos + 3].to_string());
                rest = &rest[pos + 3..];
            }
            out.push(rest.to_string());
            out
        };
        let texts: Vec<String> = chunks.iter().filter_map(|c| c.as_str().map(str::to_string)).collect();
        prop_assert_eq!(texts, expected);
    }
}

// ==================== Read Granularity Properties ====================

proptest! {
    /// After the probe, every read asks for exactly `read_size` units.
    #[test]
    fn reads_request_read_size(
        body in prop::collection::vec(0u8..4, 0..256),
        read_size in 1usize..32,
    ) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let source = Recording {
            inner: InMemory::new(body.clone()),
            requests: Rc::clone(&requests),
        };
        let config = ReadConfig::new(read_size).unwrap();
        let reader = LazyRead::with_config(source, Delimiter::new(b"\x00").unwrap(), config).unwrap();
        let count = reader.count();

        let requests = requests.borrow();
        prop_assert_eq!(requests[0], 0);
        prop_assert!(requests[1..].iter().all(|&n| n == read_size));
        prop_assert_eq!(requests.len(), 1 + body.len().div_ceil(read_size) + 1);
        prop_assert_eq!(count, occurrences(&body, b"\x00") + 1);
    }

    /// Pushing the same data in different slices yields the same chunks.
    #[test]
    fn splitter_push_size_independent(
        body in prop::collection::vec(0u8..3, 0..256),
        step in 1usize..17,
    ) {
        let delimiter = Bytes::from_static(b"\x01\x02");

        let mut whole = Splitter::new(delimiter.clone()).unwrap();
        whole.push(Bytes::from(body.clone()));
        let mut expected: Vec<Chunk> = std::iter::from_fn(|| whole.next_chunk()).collect();
        expected.push(whole.finish());

        let mut sliced = Splitter::new(delimiter).unwrap();
        let mut chunks = Vec::new();
        for piece in body.chunks(step) {
            sliced.push(Bytes::copy_from_slice(piece));
            chunks.extend(std::iter::from_fn(|| sliced.next_chunk()));
        }
        chunks.push(sliced.finish());

        prop_assert_eq!(chunks, expected);
    }
}
