//! Index of coincidence and key-period analysis.
//!
//! A slice taken at the true key period (or a multiple of it) was enciphered
//! with a single shift, so its IOC stays near the English value (~0.065).
//! Slices at other periods mix shifts and fall towards the uniform 1/26.

use tracing::debug;
use vg_core::{Alphabet, CipherError, LetterCounts, PeriodCoincidence, Result};

/// De-interleave: slice `j` holds positions `j, j + period, j + 2 * period, ...`.
pub(crate) fn slice_indices(indices: &[u8], period: usize) -> Vec<Vec<u8>> {
    (0..period)
        .map(|offset| indices.iter().skip(offset).step_by(period).copied().collect())
        .collect()
}

fn check_period(period: usize, minimum: usize) -> Result<()> {
    if period < minimum {
        return Err(CipherError::InvalidPeriod { period, minimum });
    }
    Ok(())
}

/// Split `text` into `period` interleaved slices.
pub fn slices(text: &str, period: usize) -> Result<Vec<String>> {
    check_period(period, 1)?;
    let indices = Alphabet::to_indices(text)?;
    Ok(slice_indices(&indices, period)
        .iter()
        .map(|s| Alphabet::from_indices(s))
        .collect())
}

/// IOC from precomputed counts; `0.0` when fewer than two letters exist.
pub(crate) fn ioc_of_counts(counts: &LetterCounts) -> f64 {
    let n = counts.total();
    if n < 2 {
        return 0.0;
    }
    let numerator: u64 = counts.as_slice().iter().map(|&c| c * c.saturating_sub(1)).sum();
    numerator as f64 / (n * (n - 1)) as f64
}

pub(crate) fn ioc_for_period(indices: &[u8], period: usize) -> f64 {
    let total: f64 = slice_indices(indices, period)
        .iter()
        .map(|s| ioc_of_counts(&LetterCounts::from_indices(s)))
        .sum();
    total / period as f64
}

pub fn index_of_coincidence(text: &str) -> Result<f64> {
    Ok(ioc_of_counts(&LetterCounts::from_text(text)?))
}

/// Mean IOC over the `period` interleaved slices of `text`.
pub fn index_of_coincidence_for_period(text: &str, period: usize) -> Result<f64> {
    check_period(period, 1)?;
    let indices = Alphabet::to_indices(text)?;
    Ok(ioc_for_period(&indices, period))
}

/// Mean IOC for every period in `2..=max_period`, ascending.
pub fn indices_of_coincidence(text: &str, max_period: usize) -> Result<Vec<PeriodCoincidence>> {
    check_period(max_period, 2)?;
    let indices = Alphabet::to_indices(text)?;
    let scan: Vec<PeriodCoincidence> = (2..=max_period)
        .map(|period| PeriodCoincidence { period, ioc: ioc_for_period(&indices, period) })
        .collect();
    debug!(len = indices.len(), max_period, "scanned periods for coincidence");
    Ok(scan)
}

/// Smallest period whose mean IOC reaches `threshold`, falling back to the
/// period with the highest IOC (earliest on ties).
pub fn suggest_key_period(text: &str, max_period: usize, threshold: f64) -> Result<usize> {
    let scan = indices_of_coincidence(text, max_period)?;
    if let Some(hit) = scan.iter().find(|pc| pc.ioc >= threshold) {
        debug!(period = hit.period, ioc = hit.ioc, "period reached english threshold");
        return Ok(hit.period);
    }
    let best = scan
        .iter()
        .fold(scan[0], |best, pc| if pc.ioc > best.ioc { *pc } else { best });
    debug!(period = best.period, ioc = best.ioc, "no period reached threshold, using highest ioc");
    Ok(best.period)
}
