use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error("Invalid alphabet symbol {symbol:?} at position {position}")]
    InvalidAlphabetSymbol { symbol: char, position: usize },
    #[error("Key must not be empty")]
    EmptyKey,
    #[error("Invalid period {period}: must be at least {minimum}")]
    InvalidPeriod { period: usize, minimum: usize },
    #[error("Invalid frequency distribution: {0}")]
    InvalidDistribution(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
