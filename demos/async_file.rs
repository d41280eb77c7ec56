//! Async file fingerprinting example.
//!
//! Fingerprints several files concurrently on a tokio runtime. Each
//! fingerprint is still computed sequentially over its own file.
//!
//! Run with:
//!     cargo run --example async_file --features async-io -- a.bin b.bin

use std::env;

use hazzy::fingerprint_async;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    let paths = if paths.is_empty() {
        vec!["Cargo.toml".to_string()]
    } else {
        paths
    };

    println!("Fingerprinting {} files concurrently...\n", paths.len());

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let file = tokio::fs::File::open(&path).await?;
                let fp = fingerprint_async(file.compat()).await?;
                Ok::<_, hazzy::FingerprintError>((path, fp))
            })
        })
        .collect();

    for handle in handles {
        match handle.await? {
            Ok((path, fp)) => println!("{fp}  {path}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
