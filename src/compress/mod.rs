//! Compression-ratio measurement.
//!
//! Input is streamed through a gzip encoder whose output lands in a counting
//! sink, so memory use does not grow with input size.

mod gzip;

pub(crate) use gzip::GzipCounter;

/// Computes `floor((1 - compressed / original) * 1000)`.
///
/// The result is negative when compression expanded the input. Returns
/// `None` for an empty input, where no ratio exists.
///
/// ```
/// use hazzy::compression_ratio;
///
/// assert_eq!(compression_ratio(1000, 250), Some(750));
/// assert_eq!(compression_ratio(3, 23), Some(-6667));
/// assert_eq!(compression_ratio(0, 20), None);
/// ```
pub fn compression_ratio(original: u64, compressed: u64) -> Option<i64> {
    if original == 0 {
        return None;
    }
    let original = i128::from(original);
    let compressed = i128::from(compressed);
    // Exact integer floor; div_euclid by a positive divisor rounds down.
    let ratio = ((original - compressed) * 1000).div_euclid(original);
    Some(i64::try_from(ratio).unwrap_or(i64::MIN))
}
