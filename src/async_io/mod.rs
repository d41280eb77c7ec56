//! Async fingerprinting support.
//!
//! This module provides asynchronous fingerprinting using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and compatible
//! with tokio, async-std, smol, and other async runtimes.
//!
//! - [`fingerprint_async`] - Creates a future fingerprinting an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod future;

pub use future::{FingerprintFuture, fingerprint_async};
