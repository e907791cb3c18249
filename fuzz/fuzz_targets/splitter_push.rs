#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use lazyreader::Splitter;

fuzz_target!(|input: (Vec<u8>, Vec<u8>, Vec<u8>)| {
    let (data, delimiter, cuts) = input;
    if delimiter.is_empty() {
        assert!(Splitter::new(Bytes::from(delimiter)).is_err());
        return;
    }

    // Reference: everything in one push
    let mut whole = Splitter::new(Bytes::from(delimiter.clone())).unwrap();
    whole.push(Bytes::from(data.clone()));
    let mut expected: Vec<_> = std::iter::from_fn(|| whole.next_chunk()).collect();
    expected.push(whole.finish());

    // Same data cut at fuzzer-chosen sizes
    let mut splitter = Splitter::new(Bytes::from(delimiter)).unwrap();
    let mut chunks = Vec::new();
    let mut rest = &data[..];
    for cut in cuts.iter().cycle().take(data.len()) {
        if rest.is_empty() {
            break;
        }
        let (piece, tail) = rest.split_at((*cut as usize).min(rest.len()));
        splitter.push(Bytes::copy_from_slice(piece));
        chunks.extend(std::iter::from_fn(|| splitter.next_chunk()));
        rest = tail;
    }
    splitter.push(Bytes::copy_from_slice(rest));
    chunks.extend(std::iter::from_fn(|| splitter.next_chunk()));
    chunks.push(splitter.finish());

    assert_eq!(chunks, expected);
    assert_eq!(splitter.pending_len(), 0);
});
