//! The Fingerprint type - `ratio.coarse.fine`.

use std::fmt;
use std::str::FromStr;

use crate::code::ChunkCode;
use crate::error::FingerprintError;

/// A similarity-tolerant fingerprint of a byte stream.
///
/// - `ratio`: `floor((1 - compressed / original) * 1000)`, negative when gzip
///   expanded the input
/// - `coarse`: code of the first block (up to 100 KiB)
/// - `fine`: codes of every segment (up to 1 KiB) of the whole input
///
/// Serialized as `"{ratio}.{coarse}.{fine}"`.
///
/// # Example
///
/// ```
/// use hazzy::Fingerprint;
///
/// let fp: Fingerprint = "-6667.00.00".parse()?;
/// assert_eq!(fp.ratio(), -6667);
/// assert_eq!(fp.coarse(), "00");
/// assert_eq!(fp.segment_count(), 1);
/// assert_eq!(fp.to_string(), "-6667.00.00");
/// # Ok::<(), hazzy::FingerprintError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    ratio: i64,
    coarse: String,
    fine: String,
}

impl Fingerprint {
    pub(crate) fn from_parts(ratio: i64, coarse: ChunkCode, fine: String) -> Self {
        Self {
            ratio,
            coarse: coarse.to_string(),
            fine,
        }
    }

    /// Returns the compression ratio.
    pub fn ratio(&self) -> i64 {
        self.ratio
    }

    /// Returns the coarse code (two symbols).
    pub fn coarse(&self) -> &str {
        &self.coarse
    }

    /// Returns the concatenated fine codes.
    pub fn fine(&self) -> &str {
        &self.fine
    }

    /// Iterates over the fine codes, one per segment, in input order.
    pub fn fine_codes(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.fine.len())
            .step_by(ChunkCode::LEN)
            .filter_map(|i| self.fine.get(i..i + ChunkCode::LEN))
    }

    /// Returns the number of segments the input was split into.
    pub fn segment_count(&self) -> usize {
        self.fine.len() / ChunkCode::LEN
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.ratio, self.coarse, self.fine)
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| FingerprintError::Parse {
            input: s.to_string(),
            reason,
        };

        let mut fields = s.split('.');
        let (Some(ratio), Some(coarse), Some(fine), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(fail("expected three '.'-separated fields"));
        };

        let parsed: i64 = ratio.parse().map_err(|_| fail("ratio is not an integer"))?;
        // Reject "+1", "007" and "-0": only the canonical form round-trips.
        if parsed.to_string() != ratio {
            return Err(fail("ratio is not in canonical base-10 form"));
        }

        if coarse.len() != ChunkCode::LEN || !is_code_text(coarse) {
            return Err(fail("coarse code must be exactly two symbols"));
        }

        if fine.len() % ChunkCode::LEN != 0 || !is_code_text(fine) {
            return Err(fail("fine codes must be whole two-symbol groups"));
        }

        Ok(Self {
            ratio: parsed,
            coarse: coarse.to_string(),
            fine: fine.to_string(),
        })
    }
}

fn is_code_text(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_graphic() && b != b'.')
}
