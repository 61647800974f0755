use thiserror::Error;
use vg_core::CipherError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Cipher(#[from] CipherError),
    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument { command: &'static str, expected: &'static str },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShellResult<T> = std::result::Result<T, ShellError>;
