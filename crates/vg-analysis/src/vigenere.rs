//! Vigenère key guesser — one independent Caesar guess per key position.

use crate::caesar::guess_from_indices;
use crate::coincidence::slice_indices;
use tracing::debug;
use vg_core::{
    AnalysisConfig, Alphabet, CipherError, FrequencyDistribution, Result, VigenereGuessResult, ENGLISH,
};

pub fn guess_vigenere_key(ciphertext: &str, keyperiod: usize) -> Result<VigenereGuessResult> {
    guess_vigenere_key_with(ciphertext, keyperiod, &AnalysisConfig::default(), &ENGLISH)
}

/// Every `keyperiod`-th letter was shifted by the same key symbol, so each
/// slice is solved on its own and the results are kept in key-position order.
pub fn guess_vigenere_key_with(
    ciphertext: &str,
    keyperiod: usize,
    config: &AnalysisConfig,
    dist: &FrequencyDistribution,
) -> Result<VigenereGuessResult> {
    if keyperiod < 1 {
        return Err(CipherError::InvalidPeriod { period: keyperiod, minimum: 1 });
    }
    config.validate()?;
    let indices = Alphabet::to_indices(ciphertext)?;
    let positions = slice_indices(&indices, keyperiod)
        .iter()
        .map(|slice| guess_from_indices(slice, config, dist))
        .collect();
    let result = VigenereGuessResult::new(positions);
    debug!(
        len = indices.len(),
        keyperiod,
        key = %result.best_key(),
        ambiguous = result.ambiguous_positions().len(),
        "guessed vigenere key"
    );
    Ok(result)
}
