//! Async lazy reading with tokio.
//!
//! Demonstrates `lazy_read_async` over a tokio file through the
//! `tokio_util::compat` bridge. Several files can be read concurrently.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- FILE...

use futures_util::StreamExt;
use lazyreader::{Delimiter, ReadConfig, lazy_read_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn count_lines(path: String) -> Result<(String, usize), BoxError> {
    let file = tokio::fs::File::open(&path).await?;
    let config = ReadConfig::default().with_empty_tail(false);
    let mut stream = lazy_read_async(file.compat(), Delimiter::new(b"\n")?, config)?;

    let mut lines = 0;
    while let Some(chunk) = stream.next().await {
        let _line = chunk?;
        lines += 1;
    }
    Ok((path, lines))
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    env_logger::init();

    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    let tasks: Vec<_> = paths
        .into_iter()
        .map(|path| tokio::spawn(count_lines(path)))
        .collect();

    for task in tasks {
        let (path, lines) = task.await??;
        println!("{}: {} lines", path, lines);
    }

    Ok(())
}
