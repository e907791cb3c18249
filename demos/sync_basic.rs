//! Basic synchronous lazy reading example.
//!
//! Run with:
//!     cargo run --example sync_basic

use lazyreader::{Delimiter, InMemory, LazyRead, ReadConfig, lazy_read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Records separated by semicolons rather than newlines
    let body = "A triplet of lines;separated by semicolons;not newlines";

    println!("Reading {} characters...\n", body.chars().count());

    for chunk in lazy_read(InMemory::new(body), Delimiter::new(";")?) {
        let chunk = chunk?;
        println!(
            "{:>3}..{:<3} {:?}",
            chunk.offset,
            chunk.end(),
            chunk.as_str().unwrap_or_default()
        );
    }

    // Small reads: the reader still finds every delimiter
    let config = ReadConfig::new(4)?.with_empty_tail(false);
    let source = InMemory::new(&b"id=1\nid=2\nid=3\n"[..]);
    let reader = LazyRead::with_config(source, Delimiter::new(b"\n")?, config)?;

    let mut total_chunks = 0;
    for chunk in reader {
        let chunk = chunk?;
        total_chunks += 1;
        println!("Record {}: {}", total_chunks, chunk);
    }

    println!("\nTotal: {} records", total_chunks);

    Ok(())
}
