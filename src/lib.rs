//! hazzy
//!
//! Similarity-tolerant fingerprints for byte streams.
//!
//! A fingerprint has three `.`-separated fields:
//!
//! - a gzip compression ratio in thousandths (`floor((1 - gz / raw) * 1000)`,
//!   negative when gzip framing outweighs the savings)
//! - a two-symbol coarse code of the first 100 KiB block
//! - two-symbol fine codes of every 1 KiB segment of the whole input
//!
//! Two files with similar content share ratios and long runs of fine codes;
//! the coarse code gives a cheap first comparison. Codes are 16-bit byte sums,
//! not digests: collisions are expected, and nothing here resists
//! adversarial input.
//!
//! The crate intentionally:
//! - does NOT buffer whole inputs (memory is bounded by one block)
//! - does NOT compare or index fingerprints
//! - does NOT manage concurrency
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use hazzy::{Fingerprinter, FingerprintConfig, FingerprintError};
//!
//! fn main() -> Result<(), FingerprintError> {
//!     let file = File::open("data.bin")?;
//!     let fingerprinter = Fingerprinter::new(FingerprintConfig::default())?;
//!
//!     let fingerprint = fingerprinter.fingerprint(file)?;
//!     println!("{fingerprint}");
//!     Ok(())
//! }
//! ```
//!
//! # In memory
//!
//! ```
//! let fingerprint = hazzy::fingerprint_bytes(vec![0u8; 3])?;
//! assert_eq!(fingerprint.coarse(), "00");
//! assert_eq!(fingerprint.fine(), "00");
//! assert!(fingerprint.ratio() < 0);
//! # Ok::<(), hazzy::FingerprintError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use hazzy::fingerprint_async;
//! use tokio_util::compat::TokioAsyncReadCompatExt;
//!
//! async fn demo() -> Result<(), hazzy::FingerprintError> {
//!     let file = tokio::fs::File::open("data.bin").await?;
//!     let fingerprint = fingerprint_async(file.compat()).await?;
//!     println!("{fingerprint}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod code;
mod compress;
mod config;
mod error;
mod fingerprint;
mod fingerprinter;

mod buffer; // internal (thread-local reuse)

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface (intentionally tiny)
//

pub use code::{ALPHABET_LEN, Alphabet, ChunkCode, ChunkHasher, hash_chunk};
pub use compress::compression_ratio;
pub use config::{
    DEFAULT_BLOCK_SIZE, DEFAULT_COMPRESSION_LEVEL, DEFAULT_SEGMENT_SIZE, FingerprintConfig,
    MAX_COMPRESSION_LEVEL,
};
pub use error::FingerprintError;
pub use fingerprint::Fingerprint;
pub use fingerprinter::{
    FingerprintEngine, Fingerprinter, fingerprint_bytes, fingerprint_file, fingerprint_reader,
};

#[cfg(feature = "async-io")]
pub use async_io::{FingerprintFuture, fingerprint_async};
