use crate::alphabet::Alphabet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which cipher a key is applied with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Single-symbol shift; only the first key symbol is used.
    Caesar,
    Vigenere,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "Caesar"),
            CipherKind::Vigenere => write!(f, "Vigenere"),
        }
    }
}

/// A candidate key symbol with its chi-squared score (lower is better).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyCandidate {
    pub symbol: char,
    pub score: f64,
}

impl KeyCandidate {
    pub fn new(index: u8, score: f64) -> Self {
        Self { symbol: Alphabet::symbol(index), score }
    }
}

/// Ranked candidates for one Caesar key, best first. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RankedCandidates")]
pub struct KeyGuessResult {
    candidates: Vec<KeyCandidate>,
}

/// Unchecked wire form of [`KeyGuessResult`].
#[derive(Deserialize)]
struct RankedCandidates {
    candidates: Vec<KeyCandidate>,
}

impl TryFrom<RankedCandidates> for KeyGuessResult {
    type Error = String;

    fn try_from(raw: RankedCandidates) -> std::result::Result<Self, String> {
        if raw.candidates.is_empty() {
            return Err("a key guess needs at least one candidate".into());
        }
        if raw.candidates.windows(2).any(|w| w[1].score.total_cmp(&w[0].score).is_lt()) {
            return Err("key guess candidates must be ordered by ascending score".into());
        }
        Ok(Self { candidates: raw.candidates })
    }
}

impl KeyGuessResult {
    /// `alternates` must already be ordered by ascending score.
    pub fn new(best: KeyCandidate, alternates: Vec<KeyCandidate>) -> Self {
        let mut candidates = Vec::with_capacity(alternates.len() + 1);
        candidates.push(best);
        candidates.extend(alternates);
        Self { candidates }
    }

    pub fn best(&self) -> KeyCandidate {
        self.candidates[0]
    }

    pub fn candidates(&self) -> &[KeyCandidate] {
        &self.candidates
    }

    pub fn letters(&self) -> Vec<char> {
        self.candidates.iter().map(|c| c.symbol).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.score).collect()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// One [`KeyGuessResult`] per key position, in key-index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VigenereGuessResult {
    positions: Vec<KeyGuessResult>,
}

impl VigenereGuessResult {
    pub fn new(positions: Vec<KeyGuessResult>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[KeyGuessResult] {
        &self.positions
    }

    pub fn period(&self) -> usize {
        self.positions.len()
    }

    /// Key assembled from the top candidate of every position.
    pub fn best_key(&self) -> String {
        self.positions.iter().map(|p| p.best().symbol).collect()
    }

    /// Positions whose guess kept an alternate candidate.
    pub fn ambiguous_positions(&self) -> Vec<usize> {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ambiguous())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Mean index of coincidence for one candidate key period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodCoincidence {
    pub period: usize,
    pub ioc: f64,
}
