//! Chunk code types.
//!
//! - [`Alphabet`] - The 62 symbols codes are drawn from
//! - [`ChunkCode`] - Two-symbol weak checksum of a chunk
//! - [`ChunkHasher`] - Computes chunk codes

mod alphabet;
mod hasher;

pub use alphabet::{ALPHABET_LEN, Alphabet};
pub use hasher::{ChunkCode, ChunkHasher, hash_chunk};
