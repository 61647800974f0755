//! Shared building blocks for the Vigenère lab: the alphabet, the reference
//! letter frequencies, the error taxonomy, result types and configuration.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod frequency;
pub mod types;

pub use alphabet::{Alphabet, LetterCounts, ALPHABET_LEN};
pub use config::{AnalysisConfig, ShellConfig, VigenereLabConfig};
pub use error::{CipherError, Result};
pub use frequency::{FrequencyDistribution, ENGLISH};
pub use types::{CipherKind, KeyCandidate, KeyGuessResult, PeriodCoincidence, VigenereGuessResult};

#[cfg(test)]
mod tests;
