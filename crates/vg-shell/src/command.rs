//! Command-line parsing: `name [args]`, where args is the rest of the line.

use crate::error::{ShellError, ShellResult};
use vg_core::CipherKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetKey(String),
    ShowKey,
    SetPlain(String),
    ShowPlain,
    SetCipher(String),
    ShowCipher,
    SetKeyPeriod(usize),
    ShowKeyPeriod,
    View,
    Encrypt(CipherKind),
    Decrypt(CipherKind),
    /// IOC table for periods `2..=n`; `None` uses the configured maximum.
    Iocs(Option<usize>),
    SuggestPeriod(Option<usize>),
    Guess(CipherKind),
    Test,
    Help,
    Quit,
}

/// Name and help line for every command, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("setkey", "Sets the cipher key to use."),
    ("key", "Prints the current key."),
    ("setplain", "Sets the current plain text."),
    ("plain", "Prints the current plain text."),
    ("setcipher", "Sets the current cipher text."),
    ("cipher", "Prints the current cipher text."),
    ("setkeyperiod", "Sets the key period."),
    ("keyperiod", "Prints the current key period."),
    ("view", "Shows current key, plain and cipher texts."),
    ("vencrypt", "Encrypts the stored plain text with the set key using the Vigenere cipher."),
    ("vdecrypt", "Decrypts the stored cipher text with the set key using the Vigenere cipher."),
    ("cencrypt", "Encrypts the stored plain text with the first key letter using the Caesar cipher."),
    ("cdecrypt", "Decrypts the stored cipher text with the first key letter using the Caesar cipher."),
    ("getiocs", "Tabulates indices of coincidence of the cipher text for periods 2..=n [n]."),
    ("suggestperiod", "Suggests a key period for the cipher text and stores it [n]."),
    ("vguess", "Guesses the Vigenere key for the cipher text and key period."),
    ("cguess", "Guesses the Caesar key for the cipher text."),
    ("vtest", "Sets default plain text and key, then runs Vigenere encrypt and decrypt."),
    ("help", "Lists the available commands."),
    ("quit", "Quits the program."),
];

fn required(args: &str, command: &'static str, expected: &'static str) -> ShellResult<String> {
    if args.is_empty() {
        return Err(ShellError::MissingArgument { command, expected });
    }
    Ok(args.to_string())
}

fn number(args: &str) -> ShellResult<usize> {
    args.parse().map_err(|_| ShellError::InvalidNumber(args.to_string()))
}

fn optional_number(args: &str) -> ShellResult<Option<usize>> {
    if args.is_empty() {
        Ok(None)
    } else {
        number(args).map(Some)
    }
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> ShellResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, args) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "setkey" => Command::SetKey(required(args, "setkey", "a key")?),
            "key" => Command::ShowKey,
            "setplain" => Command::SetPlain(required(args, "setplain", "a plain text")?),
            "plain" => Command::ShowPlain,
            "setcipher" => Command::SetCipher(required(args, "setcipher", "a cipher text")?),
            "cipher" => Command::ShowCipher,
            "setkeyperiod" => {
                Command::SetKeyPeriod(number(&required(args, "setkeyperiod", "a number")?)?)
            }
            "keyperiod" => Command::ShowKeyPeriod,
            "view" => Command::View,
            "vencrypt" => Command::Encrypt(CipherKind::Vigenere),
            "vdecrypt" => Command::Decrypt(CipherKind::Vigenere),
            "cencrypt" => Command::Encrypt(CipherKind::Caesar),
            "cdecrypt" => Command::Decrypt(CipherKind::Caesar),
            "getiocs" => Command::Iocs(optional_number(args)?),
            "suggestperiod" => Command::SuggestPeriod(optional_number(args)?),
            "vguess" => Command::Guess(CipherKind::Vigenere),
            "cguess" => Command::Guess(CipherKind::Caesar),
            "vtest" => Command::Test,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(name.to_string())),
        };
        Ok(Some(cmd))
    }
}
