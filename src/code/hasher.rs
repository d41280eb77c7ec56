//! Weak two-symbol chunk checksum.

use std::fmt;

use super::alphabet::{ALPHABET_LEN, Alphabet};

/// A two-symbol code summarizing a byte chunk.
///
/// Codes are derived from a 16-bit wrapping byte sum, so distinct chunks
/// collide whenever their sums agree modulo 65536.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkCode([u8; 2]);

impl ChunkCode {
    /// Number of characters in a code.
    pub const LEN: usize = 2;

    /// Returns the two ASCII symbols.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Appends the code to `out`.
    pub fn push_to(&self, out: &mut String) {
        out.push(char::from(self.0[0]));
        out.push(char::from(self.0[1]));
    }
}

impl fmt::Display for ChunkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(self.0[0]), char::from(self.0[1]))
    }
}

/// Maps byte chunks to [`ChunkCode`]s over an [`Alphabet`].
///
/// # Example
///
/// ```
/// use hazzy::ChunkHasher;
///
/// let hasher = ChunkHasher::default();
/// assert_eq!(hasher.hash(&[0, 0, 0]).to_string(), "00");
/// // 'a' is 97 = 35 + 62: symbols 35 ('z') and 1 ('1')
/// assert_eq!(hasher.hash(b"a").to_string(), "z1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkHasher {
    alphabet: Alphabet,
}

impl ChunkHasher {
    /// Creates a hasher over the given alphabet.
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Computes the code of `chunk`.
    ///
    /// The first symbol is `sum % 62`, the second `(sum / 62) % 62`, where
    /// `sum` is the byte total wrapped to 16 bits. The empty chunk maps to
    /// the first symbol twice.
    pub fn hash(&self, chunk: &[u8]) -> ChunkCode {
        let sum = byte_sum(chunk);
        let radix = ALPHABET_LEN as u16;
        let first = usize::from(sum % radix);
        let second = usize::from((sum / radix) % radix);
        ChunkCode([self.alphabet.symbol(first), self.alphabet.symbol(second)])
    }

    /// Returns the alphabet used by this hasher.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Computes the code of `chunk` over [`Alphabet::DEFAULT`].
pub fn hash_chunk(chunk: &[u8]) -> ChunkCode {
    ChunkHasher::default().hash(chunk)
}

#[inline]
fn byte_sum(chunk: &[u8]) -> u16 {
    chunk
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_chunk() {
        assert_eq!(hash_chunk(&[]).to_string(), "00");
    }

    #[test]
    fn test_zero_bytes() {
        assert_eq!(hash_chunk(&[0, 0, 0]), hash_chunk(&[]));
    }

    #[test]
    fn test_symbol_order() {
        // 62 + 5 = 67: first symbol 5, second symbol 1
        assert_eq!(hash_chunk(&[67]).to_string(), "51");
        // 255 = 4 * 62 + 7
        assert_eq!(hash_chunk(&[255]).to_string(), "74");
    }

    #[test]
    fn test_sum_wraps_at_16_bits() {
        // 257 * 255 = 65535, one more byte of 1 wraps to zero
        let mut chunk = vec![255u8; 257];
        assert_eq!(byte_sum(&chunk), u16::MAX);
        chunk.push(1);
        assert_eq!(byte_sum(&chunk), 0);
        assert_eq!(hash_chunk(&chunk).to_string(), "00");
    }

    #[test]
    fn test_large_sum() {
        // 1024 * 200 = 204800 = 3 * 65536 + 8192; 8192 = 132 * 62 + 8
        let chunk = vec![200u8; 1024];
        assert_eq!(byte_sum(&chunk), 8192);
        let code = hash_chunk(&chunk);
        assert_eq!(code.as_bytes(), &[b'8', Alphabet::DEFAULT.symbol(132 % 62)]);
    }

    #[test]
    fn test_custom_alphabet() {
        let reversed: String = Alphabet::DEFAULT.as_str().chars().rev().collect();
        let hasher = ChunkHasher::new(Alphabet::new(&reversed).unwrap());
        assert_eq!(hasher.hash(&[]).to_string(), "ZZ");
    }

    #[test]
    fn test_push_to() {
        let mut out = String::from("x");
        hash_chunk(b"a").push_to(&mut out);
        assert_eq!(out, "xz1");
    }

    proptest! {
        #[test]
        fn code_depends_only_on_wrapped_sum(a in proptest::collection::vec(any::<u8>(), 0..=2048)) {
            // Same total, different content and length.
            let split: Vec<u8> = a.iter().flat_map(|&x| [x / 2, x - x / 2]).collect();
            prop_assert_eq!(byte_sum(&a), byte_sum(&split));
            prop_assert_eq!(hash_chunk(&a), hash_chunk(&split));
        }

        #[test]
        fn permutations_collide(mut data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
            let before = hash_chunk(&data);
            data.reverse();
            prop_assert_eq!(before, hash_chunk(&data));
        }

        #[test]
        fn codes_use_alphabet_symbols(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
            let code = hash_chunk(&data);
            for &symbol in code.as_bytes() {
                prop_assert!(Alphabet::DEFAULT.index_of(symbol).is_some());
            }
        }
    }
}
