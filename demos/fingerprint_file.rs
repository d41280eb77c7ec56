//! File fingerprinting example.
//!
//! Run with:
//!     RUST_LOG=hazzy=debug cargo run --example fingerprint_file -- /path/to/file

use std::env;

use hazzy::fingerprint_file;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    let paths = if paths.is_empty() {
        vec!["Cargo.toml".to_string()]
    } else {
        paths
    };

    for path in &paths {
        match fingerprint_file(path) {
            Ok(fp) => println!("{fp}  {path}"),
            Err(e) => eprintln!("{path}: {e}"),
        }
    }

    Ok(())
}
