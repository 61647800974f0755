//! Caesar key guesser — score all 26 shifts and keep the plausible ones.

use crate::scorer::chi_squared_counts;
use tracing::{debug, trace};
use vg_core::{
    AnalysisConfig, Alphabet, FrequencyDistribution, KeyCandidate, KeyGuessResult, LetterCounts, Result,
    ALPHABET_LEN, ENGLISH,
};

/// Every shift scored and sorted ascending, alphabet order on equal scores.
///
/// Each key is scored independently and stored at its own index before
/// sorting, so the ranking does not depend on evaluation order.
pub fn rank_keys(counts: &LetterCounts, dist: &FrequencyDistribution) -> [KeyCandidate; ALPHABET_LEN] {
    let mut ranked: [KeyCandidate; ALPHABET_LEN] = std::array::from_fn(|k| {
        let k = k as u8;
        KeyCandidate::new(k, chi_squared_counts(&counts.shifted(k), dist))
    });
    // sort_by is stable, so ties keep alphabet order
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

/// Keep the best candidate plus alternates scoring under `ambiguity_ratio * best`.
pub fn select_candidates(ranked: &[KeyCandidate; ALPHABET_LEN], config: &AnalysisConfig) -> KeyGuessResult {
    let [best, rest @ ..] = ranked;
    let cutoff = best.score * config.ambiguity_ratio;
    let alternates = rest
        .iter()
        .take(config.max_candidates.saturating_sub(1))
        .take_while(|c| c.score < cutoff)
        .copied()
        .collect();
    KeyGuessResult::new(*best, alternates)
}

pub(crate) fn guess_from_indices(
    indices: &[u8],
    config: &AnalysisConfig,
    dist: &FrequencyDistribution,
) -> KeyGuessResult {
    let counts = LetterCounts::from_indices(indices);
    let ranked = rank_keys(&counts, dist);
    for c in &ranked {
        trace!(key = %c.symbol, score = c.score, "caesar candidate");
    }
    let result = select_candidates(&ranked, config);
    debug!(
        len = indices.len(),
        best = %result.best().symbol,
        score = result.best().score,
        kept = result.candidates().len(),
        "guessed caesar key"
    );
    result
}

/// Guess with the default policy against English.
pub fn guess_caesar_key(ciphertext: &str) -> Result<KeyGuessResult> {
    guess_caesar_key_with(ciphertext, &AnalysisConfig::default(), &ENGLISH)
}

pub fn guess_caesar_key_with(
    ciphertext: &str,
    config: &AnalysisConfig,
    dist: &FrequencyDistribution,
) -> Result<KeyGuessResult> {
    config.validate()?;
    let indices = Alphabet::to_indices(ciphertext)?;
    Ok(guess_from_indices(&indices, config, dist))
}
