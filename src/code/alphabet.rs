//! The symbol table chunk codes are drawn from.

use std::fmt;

use crate::error::FingerprintError;

/// Number of symbols in an alphabet.
pub const ALPHABET_LEN: usize = 62;

const DEFAULT_SYMBOLS: &[u8; ALPHABET_LEN] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered, index-addressable set of 62 ASCII symbols.
///
/// Fingerprints are only comparable when they were produced with the same
/// alphabet. [`Alphabet::DEFAULT`] (`0-9a-zA-Z`) must never change order.
///
/// # Example
///
/// ```
/// use hazzy::Alphabet;
///
/// let alphabet = Alphabet::DEFAULT;
/// assert_eq!(alphabet.symbol(0), b'0');
/// assert_eq!(alphabet.symbol(61), b'Z');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet([u8; ALPHABET_LEN]);

impl Alphabet {
    /// Digits, then lowercase, then uppercase ASCII letters.
    pub const DEFAULT: Alphabet = Alphabet(*DEFAULT_SYMBOLS);

    /// Creates a custom alphabet.
    ///
    /// Symbols must be 62 distinct printable ASCII characters, none of them
    /// `.` (the fingerprint field separator).
    ///
    /// ```
    /// use hazzy::Alphabet;
    ///
    /// let reversed: String = Alphabet::DEFAULT.as_str().chars().rev().collect();
    /// let alphabet = Alphabet::new(&reversed)?;
    /// assert_eq!(alphabet.symbol(0), b'Z');
    ///
    /// assert!(Alphabet::new("abc").is_err());
    /// # Ok::<(), hazzy::FingerprintError>(())
    /// ```
    pub fn new(symbols: &str) -> Result<Self, FingerprintError> {
        let bytes = symbols.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(FingerprintError::InvalidConfig {
                message: "alphabet must have exactly 62 symbols",
            });
        }

        let mut table = [0u8; ALPHABET_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_graphic() || b == b'.' {
                return Err(FingerprintError::InvalidConfig {
                    message: "alphabet symbols must be printable ASCII other than '.'",
                });
            }
            if table[..i].contains(&b) {
                return Err(FingerprintError::InvalidConfig {
                    message: "alphabet symbols must be distinct",
                });
            }
            table[i] = b;
        }

        Ok(Self(table))
    }

    /// Returns the symbol at `index`, wrapping indices past the end.
    #[inline]
    pub fn symbol(&self, index: usize) -> u8 {
        self.0[index % ALPHABET_LEN]
    }

    /// Returns the position of `symbol`, if it belongs to this alphabet.
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.0.iter().position(|&b| b == symbol)
    }

    /// Returns the symbols in order.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let alphabet = Alphabet::DEFAULT;
        assert_eq!(
            alphabet.as_str(),
            "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        assert_eq!(alphabet.symbol(10), b'a');
        assert_eq!(alphabet.symbol(36), b'A');
        assert_eq!(alphabet.index_of(b'z'), Some(35));
        assert_eq!(alphabet.index_of(b'-'), None);
    }

    #[test]
    fn test_new_roundtrips_default() {
        let alphabet = Alphabet::new(Alphabet::DEFAULT.as_str()).unwrap();
        assert_eq!(alphabet, Alphabet::DEFAULT);
    }

    #[test]
    fn test_invalid_length() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new(&"a".repeat(63)).is_err());
    }

    #[test]
    fn test_invalid_symbols() {
        let mut with_dot = Alphabet::DEFAULT.as_str().to_string();
        with_dot.replace_range(0..1, ".");
        assert!(Alphabet::new(&with_dot).is_err());

        let mut with_space = Alphabet::DEFAULT.as_str().to_string();
        with_space.replace_range(0..1, " ");
        assert!(Alphabet::new(&with_space).is_err());
    }

    #[test]
    fn test_duplicate_symbols() {
        let mut dup = Alphabet::DEFAULT.as_str().to_string();
        dup.replace_range(1..2, "0");
        assert!(Alphabet::new(&dup).is_err());
    }

    #[test]
    fn test_debug() {
        let s = format!("{:?}", Alphabet::DEFAULT);
        assert!(s.starts_with("Alphabet(\"0123"));
    }
}
