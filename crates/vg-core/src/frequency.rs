//! Reference letter distributions used as the null hypothesis for scoring.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Standard English monogram frequencies, `a` through `z`.
pub const ENGLISH: FrequencyDistribution = FrequencyDistribution([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
]);

/// 26 non-negative probabilities, index-aligned with the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FrequencyDistribution([f64; ALPHABET_LEN]);

impl FrequencyDistribution {
    pub fn new(values: [f64; ALPHABET_LEN]) -> Result<Self> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            return Err(CipherError::InvalidDistribution(format!(
                "entry {i} is {v}, expected a finite non-negative value"
            )));
        }
        Ok(Self(values))
    }

    pub fn english() -> Self {
        ENGLISH
    }

    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for FrequencyDistribution {
    fn default() -> Self {
        ENGLISH
    }
}

impl TryFrom<Vec<f64>> for FrequencyDistribution {
    type Error = CipherError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let arr: [f64; ALPHABET_LEN] = values.try_into().map_err(|_| {
            CipherError::InvalidDistribution(format!("expected {ALPHABET_LEN} entries, got {len}"))
        })?;
        Self::new(arr)
    }
}

impl From<FrequencyDistribution> for Vec<f64> {
    fn from(dist: FrequencyDistribution) -> Self {
        dist.0.to_vec()
    }
}
