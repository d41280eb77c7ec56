//! Fingerprinting engine and drivers.
//!
//! - [`FingerprintEngine`] - Stateful engine with `update()`/`finish()` API
//! - [`Fingerprinter`] - Drives an engine from readers, files and buffers

mod driver;
mod engine;

pub use driver::{Fingerprinter, fingerprint_bytes, fingerprint_file, fingerprint_reader};
pub use engine::FingerprintEngine;
