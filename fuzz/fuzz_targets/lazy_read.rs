#![no_main]

use libfuzzer_sys::fuzz_target;
use lazyreader::{BinaryReader, Delimiter, LazyRead, ReadConfig, TextReader};

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u8)| {
    let (data, delimiter, read_size) = input;
    let read_size = read_size as usize + 1;

    let Ok(byte_delimiter) = Delimiter::new(delimiter.clone()) else {
        assert!(delimiter.is_empty());
        return;
    };
    let config = ReadConfig::new(read_size).unwrap();

    // Binary: chunks rebuild the input and every chunk but the last ends
    // with the delimiter
    let reader = LazyRead::with_config(BinaryReader::new(&data[..]), byte_delimiter, config).unwrap();
    let chunks: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

    let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.as_raw().to_vec()).collect();
    assert_eq!(joined, data);

    let mut expected_offset = 0u64;
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.offset, expected_offset);
        expected_offset = chunk.end();
        if i < chunks.len() - 1 {
            assert!(chunk.data.as_raw().ends_with(&delimiter));
        }
    }

    // Text: only valid UTF-8 inputs round-trip
    let (Ok(text), Ok(text_delimiter)) = (std::str::from_utf8(&data), std::str::from_utf8(&delimiter))
    else {
        return;
    };
    let reader = LazyRead::with_config(
        TextReader::new(text.as_bytes()),
        Delimiter::new(text_delimiter).unwrap(),
        config,
    )
    .unwrap();
    let chunks: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

    let joined: String = chunks.iter().filter_map(|c| c.as_str()).collect();
    assert_eq!(joined, text);
    assert_eq!(chunks.last().unwrap().end(), text.chars().count() as u64);
});
