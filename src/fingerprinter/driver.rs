//! High-level fingerprinting API - Fingerprinter and convenience functions.
//!
//! - [`Fingerprinter`] - Holds a configuration and drives engines from
//!   readers, files and in-memory buffers
//! - [`fingerprint_reader`], [`fingerprint_bytes`], [`fingerprint_file`] -
//!   Shortcuts using the default configuration
//!
//! # Example
//!
//! ```no_run
//! use hazzy::Fingerprinter;
//!
//! let fingerprinter = Fingerprinter::default();
//! let fingerprint = fingerprinter.fingerprint_file("data.bin")?;
//! println!("{fingerprint}");
//! # Ok::<(), hazzy::FingerprintError>(())
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use crate::config::FingerprintConfig;
use crate::error::FingerprintError;
use crate::fingerprint::Fingerprint;

use super::engine::FingerprintEngine;

/// Computes fingerprints with a fixed configuration.
///
/// `Fingerprinter` is cheap to copy and holds no per-computation state, so
/// one instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use hazzy::{Fingerprinter, FingerprintConfig};
///
/// let fingerprinter = Fingerprinter::new(FingerprintConfig::default())?;
/// let fingerprint = fingerprinter.fingerprint_bytes(vec![0u8, 0, 0])?;
/// assert_eq!(fingerprint.coarse(), "00");
/// assert_eq!(fingerprint.fine(), "00");
/// assert!(fingerprint.ratio() < 0);
/// # Ok::<(), hazzy::FingerprintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fingerprinter {
    config: FingerprintConfig,
}

impl Fingerprinter {
    /// Creates a new fingerprinter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::InvalidConfig`] if the configuration fails
    /// [`FingerprintConfig::validate`].
    pub fn new(config: FingerprintConfig) -> Result<Self, FingerprintError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Starts a push-based computation.
    pub fn engine(&self) -> FingerprintEngine {
        FingerprintEngine::with_valid_config(self.config)
    }

    /// Fingerprints everything `reader` yields until end of stream.
    ///
    /// Reads are issued one block at a time. Interrupted reads are retried; any other read error aborts the
    /// computation.
    ///
    /// # Errors
    ///
    /// - [`FingerprintError::Io`] if a read or the compressor fails
    /// - [`FingerprintError::EmptyInput`] if the reader yields no bytes
    pub fn fingerprint<R: Read>(&self, mut reader: R) -> Result<Fingerprint, FingerprintError> {
        let mut engine = self.engine();
        let mut scratch = vec![0u8; self.config.block_size()];

        loop {
            match reader.read(&mut scratch) {
                Ok(0) => break,
                Ok(n) => engine.update(&scratch[..n])?,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        engine.finish()
    }

    /// Fingerprints an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::EmptyInput`] for an empty buffer.
    pub fn fingerprint_bytes(&self, data: impl Into<Bytes>) -> Result<Fingerprint, FingerprintError> {
        let data = data.into();
        let mut engine = self.engine();
        engine.update(&data)?;
        engine.finish()
    }

    /// Fingerprints the file at `path`.
    ///
    /// The file is opened read-only and closed on every return path.
    ///
    /// # Errors
    ///
    /// - [`FingerprintError::Io`] if the file cannot be opened or read
    /// - [`FingerprintError::EmptyInput`] for a zero-length file
    pub fn fingerprint_file(&self, path: impl AsRef<Path>) -> Result<Fingerprint, FingerprintError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "fingerprinting file");

        let file = File::open(path)?;
        self.fingerprint(file)
    }
}

/// Fingerprints a reader with the default configuration.
///
/// See [`Fingerprinter::fingerprint`].
pub fn fingerprint_reader<R: Read>(reader: R) -> Result<Fingerprint, FingerprintError> {
    Fingerprinter::default().fingerprint(reader)
}

/// Fingerprints an in-memory buffer with the default configuration.
///
/// ```
/// let fp = hazzy::fingerprint_bytes(vec![b'x'; 4096])?;
/// assert_eq!(fp.segment_count(), 4);
/// # Ok::<(), hazzy::FingerprintError>(())
/// ```
pub fn fingerprint_bytes(data: impl Into<Bytes>) -> Result<Fingerprint, FingerprintError> {
    Fingerprinter::default().fingerprint_bytes(data)
}

/// Fingerprints a file with the default configuration.
///
/// See [`Fingerprinter::fingerprint_file`].
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<Fingerprint, FingerprintError> {
    Fingerprinter::default().fingerprint_file(path)
}
