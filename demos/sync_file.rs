//! File line-reading example.
//!
//! Run with:
//!     RUST_LOG=debug cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use lazyreader::{BinaryReader, Delimiter, LazyRead, ReadConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Reading file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Larger reads for files
    let config = ReadConfig::new(64 * 1024)?;
    let reader = LazyRead::with_config(BinaryReader::new(file), Delimiter::new(b"\n")?, config)?;

    let mut total_lines = 0;
    let mut total_bytes = 0;
    let mut longest = 0;

    for chunk in reader {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        total_lines += 1;
        total_bytes += chunk.len();
        longest = longest.max(chunk.len());
    }

    println!("Total: {} lines, {} bytes", total_lines, total_bytes);
    println!("Longest line: {} bytes", longest);
    if total_lines > 0 {
        println!("Average line length: {} bytes", total_bytes / total_lines);
    }

    Ok(())
}
