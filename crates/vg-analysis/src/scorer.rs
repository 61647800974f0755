//! Chi-squared goodness of fit against a reference letter distribution.

use vg_core::{FrequencyDistribution, LetterCounts, Result, ALPHABET_LEN};

/// Lower is a closer match. Letters the distribution gives zero weight are skipped.
pub(crate) fn chi_squared_counts(counts: &LetterCounts, dist: &FrequencyDistribution) -> f64 {
    let n = counts.total() as f64;
    let mut chi_sq = 0.0;
    for i in 0..ALPHABET_LEN {
        let expected = dist.get(i) * n;
        if expected == 0.0 {
            continue;
        }
        let diff = counts.get(i) as f64 - expected;
        chi_sq += diff * diff / expected;
    }
    chi_sq
}

pub fn chi_squared(text: &str, dist: &FrequencyDistribution) -> Result<f64> {
    Ok(chi_squared_counts(&LetterCounts::from_text(text)?, dist))
}
