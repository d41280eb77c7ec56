//! Error types for hazzy.

use thiserror::Error;

/// Errors that can occur while computing or parsing a fingerprint.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// An I/O error occurred while reading input data or finalizing the
    /// compressor.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input yielded zero bytes, so no compression ratio exists.
    #[error("empty input: cannot fingerprint zero bytes")]
    EmptyInput,

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A fingerprint string did not match `ratio.coarse.fine`.
    #[error("invalid fingerprint {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}
