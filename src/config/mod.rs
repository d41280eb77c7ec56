//! Configuration for fingerprinting behavior.
//!
//! [`FingerprintConfig`] fixes the block and segment sizes, the gzip level
//! and the code alphabet. Fingerprints are only comparable when all four
//! match, so the defaults should be left alone outside of tests.
//!
//! # Example
//!
//! ```
//! use hazzy::FingerprintConfig;
//!
//! // Smaller blocks, e.g. for tests
//! let config = FingerprintConfig::new(4096, 512)?;
//! assert_eq!(config.block_size(), 4096);
//!
//! // Builder pattern
//! let config = FingerprintConfig::default().with_compression_level(6);
//! config.validate()?;
//! # Ok::<(), hazzy::FingerprintError>(())
//! ```

use crate::code::Alphabet;
use crate::error::FingerprintError;

/// Default block size (100 KiB). The first block yields the coarse code.
pub const DEFAULT_BLOCK_SIZE: usize = 100 * 1024;

/// Default segment size (1 KiB). Every segment yields one fine code.
pub const DEFAULT_SEGMENT_SIZE: usize = 1024;

/// Default gzip level (fastest).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 1;

/// Highest gzip level accepted.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Configuration for fingerprint computation.
///
/// # Size Constraints
///
/// - Both sizes non-zero
/// - `segment_size <= block_size`
/// - `block_size` a multiple of `segment_size`, so every segment except the
///   last one of the input is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerprintConfig {
    block_size: usize,
    segment_size: usize,
    compression_level: u32,
    alphabet: Alphabet,
}

impl FingerprintConfig {
    /// Creates a configuration with the given block and segment sizes and
    /// default level and alphabet.
    ///
    /// Returns error if sizes are zero, out of order, or the block size is
    /// not a multiple of the segment size.
    pub fn new(block_size: usize, segment_size: usize) -> Result<Self, FingerprintError> {
        let config = Self {
            block_size,
            segment_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the block size. Not validated; see [`FingerprintConfig::validate`].
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Sets the segment size. Not validated; see [`FingerprintConfig::validate`].
    pub fn with_segment_size(mut self, size: usize) -> Self {
        self.segment_size = size;
        self
    }

    /// Sets the gzip level. Not validated; see [`FingerprintConfig::validate`].
    ///
    /// Changing the level changes every ratio this configuration produces.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    /// Sets the code alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Returns the block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the segment size.
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Returns the gzip level.
    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Returns the code alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use hazzy::FingerprintConfig;
    ///
    /// let config = FingerprintConfig::default().with_segment_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.block_size == 0 || self.segment_size == 0 {
            return Err(FingerprintError::InvalidConfig {
                message: "block and segment sizes must be non-zero",
            });
        }

        if self.segment_size > self.block_size {
            return Err(FingerprintError::InvalidConfig {
                message: "segment_size cannot be greater than block_size",
            });
        }

        if self.block_size % self.segment_size != 0 {
            return Err(FingerprintError::InvalidConfig {
                message: "block_size must be a multiple of segment_size",
            });
        }

        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(FingerprintError::InvalidConfig {
                message: "compression level must be between 0 and 9",
            });
        }

        Ok(())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            segment_size: DEFAULT_SEGMENT_SIZE,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            alphabet: Alphabet::DEFAULT,
        }
    }
}
