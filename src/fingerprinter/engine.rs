//! Core fingerprint engine - FingerprintEngine with streaming API.
//!
//! The engine is a push-based state machine:
//!
//! - [`FingerprintEngine`] - Owns the compressor and both code accumulators
//! - `update()` - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finish()` - Flush the last block and produce the fingerprint
//!
//! Input is regrouped into fixed-size blocks before anything is hashed or
//! compressed, so the result never depends on how the bytes were split
//! across `update()` calls.
//!
//! # Example
//!
//! ```
//! use hazzy::{FingerprintConfig, FingerprintEngine};
//!
//! let mut engine = FingerprintEngine::new(FingerprintConfig::default())?;
//!
//! engine.update(b"first")?;
//! engine.update(b"second")?;
//!
//! let fingerprint = engine.finish()?;
//! assert_eq!(fingerprint.coarse().len(), 2);
//! # Ok::<(), hazzy::FingerprintError>(())
//! ```

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::code::{ChunkCode, ChunkHasher};
use crate::compress::{GzipCounter, compression_ratio};
use crate::config::FingerprintConfig;
use crate::error::FingerprintError;
use crate::fingerprint::Fingerprint;

/// A streaming fingerprint computation.
///
/// For every full block (and the trailing partial block at `finish()`):
///
/// 1. The block is fed to a gzip compressor that only counts its output
/// 2. Each segment of the block contributes one code to the fine hash
/// 3. The first block, and only the first, sets the coarse hash
///
/// # Memory
///
/// At most one block is held at a time. Compressed output is counted and
/// dropped, never buffered.
///
/// # Determinism
///
/// Identical byte streams produce identical fingerprints for a given
/// configuration, regardless of how many bytes each `update()` carries.
#[derive(Debug)]
pub struct FingerprintEngine {
    config: FingerprintConfig,
    hasher: ChunkHasher,
    compressor: GzipCounter,
    block: Buffer,
    original_size: u64,
    blocks: u64,
    coarse: Option<ChunkCode>,
    fine: String,
}

impl FingerprintEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::InvalidConfig`] if the configuration fails
    /// [`FingerprintConfig::validate`].
    pub fn new(config: FingerprintConfig) -> Result<Self, FingerprintError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Creates an engine from a configuration that already passed validation.
    pub(crate) fn with_valid_config(config: FingerprintConfig) -> Self {
        Self {
            config,
            hasher: ChunkHasher::new(*config.alphabet()),
            compressor: GzipCounter::new(config.compression_level()),
            block: Buffer::take(config.block_size()),
            original_size: 0,
            blocks: 0,
            coarse: None,
            fine: String::new(),
        }
    }

    /// Pushes data into the engine.
    ///
    /// Complete blocks are processed immediately; the remainder waits for
    /// more data or `finish()`.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::Io`] if the compressor fails.
    pub fn update(&mut self, mut data: &[u8]) -> Result<(), FingerprintError> {
        let block_size = self.config.block_size();

        while !data.is_empty() {
            let take = (block_size - self.block.len()).min(data.len());
            self.block.extend_from_slice(&data[..take]);
            data = &data[take..];

            if self.block.len() == block_size {
                self.process_block()?;
            }
        }

        Ok(())
    }

    /// Finalizes the computation.
    ///
    /// Processes the trailing partial block, flushes the compressor and
    /// computes the ratio.
    ///
    /// # Errors
    ///
    /// - [`FingerprintError::Io`] if the compressor fails to finish
    /// - [`FingerprintError::EmptyInput`] if no bytes were pushed
    pub fn finish(mut self) -> Result<Fingerprint, FingerprintError> {
        if !self.block.is_empty() {
            self.process_block()?;
        }

        let Self {
            compressor,
            original_size,
            coarse,
            fine,
            ..
        } = self;

        let compressed_size = compressor.finish()?;

        let (Some(ratio), Some(coarse)) = (compression_ratio(original_size, compressed_size), coarse)
        else {
            return Err(FingerprintError::EmptyInput);
        };

        debug!(original_size, compressed_size, ratio, "fingerprint finalized");

        Ok(Fingerprint::from_parts(ratio, coarse, fine))
    }

    /// Returns the number of bytes pushed so far.
    pub fn bytes_seen(&self) -> u64 {
        self.original_size + self.block.len() as u64
    }

    /// Returns the number of bytes waiting for their block to fill.
    pub fn pending_len(&self) -> usize {
        self.block.len()
    }

    /// Returns the configuration used by this engine.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    fn process_block(&mut self) -> Result<(), FingerprintError> {
        let block = self.block.as_slice();

        self.compressor.write(block)?;
        self.original_size += block.len() as u64;

        for segment in block.chunks(self.config.segment_size()) {
            self.hasher.hash(segment).push_to(&mut self.fine);
        }

        if self.coarse.is_none() {
            self.coarse = Some(self.hasher.hash(block));
        }

        trace!(block = self.blocks, len = block.len(), "block processed");
        self.blocks += 1;
        self.block.clear();

        Ok(())
    }
}

impl Default for FingerprintEngine {
    fn default() -> Self {
        Self::with_valid_config(FingerprintConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::hash_chunk;
    use crate::config::MAX_COMPRESSION_LEVEL;

    fn small_config() -> FingerprintConfig {
        FingerprintConfig::new(64, 16).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let engine = FingerprintEngine::default();
        assert!(matches!(
            engine.finish(),
            Err(FingerprintError::EmptyInput)
        ));
    }

    #[test]
    fn test_empty_updates_are_ignored() {
        let mut engine = FingerprintEngine::default();
        engine.update(&[]).unwrap();
        engine.update(&[]).unwrap();
        assert_eq!(engine.bytes_seen(), 0);
        assert!(matches!(
            engine.finish(),
            Err(FingerprintError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_byte() {
        let mut engine = FingerprintEngine::default();
        engine.update(&[42]).unwrap();
        let fp = engine.finish().unwrap();

        let code = hash_chunk(&[42]).to_string();
        assert_eq!(fp.coarse(), code);
        assert_eq!(fp.fine(), code);
        assert!(fp.ratio() < -1000);
    }

    #[test]
    fn test_pending_tracking() {
        let mut engine = FingerprintEngine::new(small_config()).unwrap();
        engine.update(&[1u8; 100]).unwrap();
        assert_eq!(engine.pending_len(), 36);
        assert_eq!(engine.bytes_seen(), 100);
    }

    #[test]
    fn test_coarse_from_first_block_only() {
        let mut data = vec![1u8; 64];
        data.extend_from_slice(&[7u8; 64]);

        let mut engine = FingerprintEngine::new(small_config()).unwrap();
        engine.update(&data).unwrap();
        let fp = engine.finish().unwrap();

        assert_eq!(fp.coarse(), hash_chunk(&[1u8; 64]).to_string());
    }

    #[test]
    fn test_fine_covers_every_block() {
        let data: Vec<u8> = (0..150u32).map(|i| (i % 256) as u8).collect();

        let mut engine = FingerprintEngine::new(small_config()).unwrap();
        engine.update(&data).unwrap();
        let fp = engine.finish().unwrap();

        let expected: String = data.chunks(16).map(|s| hash_chunk(s).to_string()).collect();
        assert_eq!(fp.fine(), expected);
        assert_eq!(fp.segment_count(), 10);
    }

    #[test]
    fn test_update_size_independence() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 + 13) as u8).collect();

        let mut whole = FingerprintEngine::new(small_config()).unwrap();
        whole.update(&data).unwrap();
        let whole = whole.finish().unwrap();

        let mut bytewise = FingerprintEngine::new(small_config()).unwrap();
        for b in &data {
            bytewise.update(std::slice::from_ref(b)).unwrap();
        }
        let bytewise = bytewise.finish().unwrap();

        assert_eq!(whole, bytewise);
    }

    #[test]
    fn test_compression_level_changes_ratio_only() {
        let data: Vec<u8> = (0..20_000u32).map(|i| ((i / 3) % 97) as u8).collect();

        let mut fast = FingerprintEngine::default();
        fast.update(&data).unwrap();
        let fast = fast.finish().unwrap();

        let mut stored =
            FingerprintEngine::new(FingerprintConfig::default().with_compression_level(0)).unwrap();
        stored.update(&data).unwrap();
        let stored = stored.finish().unwrap();

        assert_eq!(fast.coarse(), stored.coarse());
        assert_eq!(fast.fine(), stored.fine());
        assert!(stored.ratio() <= 0);
        assert!(fast.ratio() > stored.ratio());
    }

    #[test]
    fn test_rejects_zero_block_size() {
        let config = FingerprintConfig::default().with_block_size(0);
        assert!(matches!(
            FingerprintEngine::new(config),
            Err(FingerprintError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_segment_size() {
        let config = FingerprintConfig::default().with_segment_size(0);
        assert!(matches!(
            FingerprintEngine::new(config),
            Err(FingerprintError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let config = FingerprintConfig::default().with_compression_level(MAX_COMPRESSION_LEVEL + 1);
        assert!(matches!(
            FingerprintEngine::new(config),
            Err(FingerprintError::InvalidConfig { .. })
        ));
    }
}
