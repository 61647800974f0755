//! Analyst facade — every engine operation under one configured policy.

use crate::{caesar, cipher, coincidence, scorer, vigenere};
use vg_core::{
    AnalysisConfig, CipherKind, FrequencyDistribution, KeyGuessResult, PeriodCoincidence, Result,
    VigenereGuessResult,
};

/// Holds the candidate policy and reference distribution. Stateless between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Analyst {
    config: AnalysisConfig,
    distribution: FrequencyDistribution,
}

impl Analyst {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, distribution: FrequencyDistribution::english() })
    }

    pub fn with_distribution(mut self, distribution: FrequencyDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn distribution(&self) -> &FrequencyDistribution {
        &self.distribution
    }

    pub fn encrypt(&self, text: &str, key: &str, kind: CipherKind) -> Result<String> {
        cipher::encrypt(text, key, kind)
    }

    pub fn decrypt(&self, text: &str, key: &str, kind: CipherKind) -> Result<String> {
        cipher::decrypt(text, key, kind)
    }

    pub fn index_of_coincidence(&self, text: &str) -> Result<f64> {
        coincidence::index_of_coincidence(text)
    }

    pub fn indices_of_coincidence(&self, text: &str, max_period: usize) -> Result<Vec<PeriodCoincidence>> {
        coincidence::indices_of_coincidence(text, max_period)
    }

    pub fn suggest_key_period(&self, text: &str, max_period: usize) -> Result<usize> {
        coincidence::suggest_key_period(text, max_period, self.config.english_ioc_threshold)
    }

    pub fn chi_squared(&self, text: &str) -> Result<f64> {
        scorer::chi_squared(text, &self.distribution)
    }

    pub fn guess_caesar_key(&self, ciphertext: &str) -> Result<KeyGuessResult> {
        caesar::guess_caesar_key_with(ciphertext, &self.config, &self.distribution)
    }

    pub fn guess_vigenere_key(&self, ciphertext: &str, keyperiod: usize) -> Result<VigenereGuessResult> {
        vigenere::guess_vigenere_key_with(ciphertext, keyperiod, &self.config, &self.distribution)
    }
}

impl Default for Analyst {
    fn default() -> Self {
        Self { config: AnalysisConfig::default(), distribution: FrequencyDistribution::english() }
    }
}
