use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VigenereLabConfig {
    pub analysis: AnalysisConfig,
    pub shell: ShellConfig,
}

/// Candidate-retention policy for key guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// An alternate candidate is kept while `score < ambiguity_ratio * best`.
    pub ambiguity_ratio: f64,
    /// Upper bound on candidates returned per Caesar guess, best included.
    pub max_candidates: usize,
    /// Mean IOC at or above which a period is taken to look like English.
    pub english_ioc_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub default_keyperiod: usize,
    pub default_max_period: usize,
}

pub const DEFAULT_AMBIGUITY_RATIO: f64 = 1.5;
pub const DEFAULT_MAX_CANDIDATES: usize = 2;
pub const DEFAULT_ENGLISH_IOC_THRESHOLD: f64 = 0.06;

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ambiguity_ratio: DEFAULT_AMBIGUITY_RATIO,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            english_ioc_threshold: DEFAULT_ENGLISH_IOC_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(CipherError::InvalidConfig("max_candidates must be at least 1".into()));
        }
        if !self.ambiguity_ratio.is_finite() || self.ambiguity_ratio <= 0.0 {
            return Err(CipherError::InvalidConfig(format!(
                "ambiguity_ratio must be a positive number, got {}",
                self.ambiguity_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.english_ioc_threshold) {
            return Err(CipherError::InvalidConfig(format!(
                "english_ioc_threshold must lie in [0, 1], got {}",
                self.english_ioc_threshold
            )));
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { default_keyperiod: 5, default_max_period: 10 }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_keyperiod < 1 {
            return Err(CipherError::InvalidPeriod { period: self.default_keyperiod, minimum: 1 });
        }
        if self.default_max_period < 2 {
            return Err(CipherError::InvalidPeriod { period: self.default_max_period, minimum: 2 });
        }
        Ok(())
    }
}

impl VigenereLabConfig {
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.shell.validate()
    }
}
