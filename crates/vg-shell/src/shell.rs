//! Command dispatch over a [`Session`].

use crate::command::{Command, COMMANDS};
use crate::error::ShellResult;
use crate::session::Session;
use crate::table::Table;
use tracing::debug;
use vg_analysis::Analyst;
use vg_core::{Alphabet, CipherError, CipherKind, KeyGuessResult, ShellConfig, VigenereGuessResult, VigenereLabConfig};

pub const DEFAULT_PLAIN_TEXT: &str = "greetingstravellerwelcometothelittlecipherplaygroundhavefun";
pub const DEFAULT_KEY: &str = "hello";

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Output(s) | Reply::Quit(s) => s,
        }
    }
}

pub struct Shell {
    session: Session,
    analyst: Analyst,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: VigenereLabConfig) -> ShellResult<Self> {
        config.validate()?;
        Ok(Self {
            session: Session::from_config(&config.shell),
            analyst: Analyst::new(config.analysis)?,
            config: config.shell,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and execute one input line. Blank lines produce empty output.
    pub fn run_line(&mut self, line: &str) -> ShellResult<Reply> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd),
            None => Ok(Reply::Output(String::new())),
        }
    }

    /// Run `cmd`. On error the session is left exactly as it was.
    pub fn execute(&mut self, cmd: Command) -> ShellResult<Reply> {
        debug!(?cmd, "executing command");
        let out = match cmd {
            Command::SetKey(key) => {
                self.session.key = Alphabet::normalize(&key)?;
                format!("Setting key to '{}'", self.session.key)
            }
            Command::ShowKey => self.session.key.clone(),
            Command::SetPlain(text) => {
                self.session.plain_text = Alphabet::normalize(&text)?;
                format!("Setting plain text to '{}'", self.session.plain_text)
            }
            Command::ShowPlain => self.session.plain_text.clone(),
            Command::SetCipher(text) => {
                self.session.cipher_text = Alphabet::normalize(&text)?;
                format!("Setting cipher text to '{}'", self.session.cipher_text)
            }
            Command::ShowCipher => self.session.cipher_text.clone(),
            Command::SetKeyPeriod(period) => {
                if period < 1 {
                    return Err(CipherError::InvalidPeriod { period, minimum: 1 }.into());
                }
                self.session.keyperiod = period;
                format!("Setting key period to {period}")
            }
            Command::ShowKeyPeriod => self.session.keyperiod.to_string(),
            Command::View => self.session.summary(),
            Command::Encrypt(kind) => self.encrypt(kind)?,
            Command::Decrypt(kind) => self.decrypt(kind)?,
            Command::Iocs(max_period) => self.iocs(max_period.unwrap_or(self.config.default_max_period))?,
            Command::SuggestPeriod(max_period) => {
                self.suggest_period(max_period.unwrap_or(self.config.default_max_period))?
            }
            Command::Guess(CipherKind::Caesar) => {
                let guess = self.analyst.guess_caesar_key(&self.session.cipher_text)?;
                format!("Guessing the Caesar key for current cipher text...\n{}", caesar_table(&guess))
            }
            Command::Guess(CipherKind::Vigenere) => {
                let guess = self
                    .analyst
                    .guess_vigenere_key(&self.session.cipher_text, self.session.keyperiod)?;
                format!(
                    "Guessing the Vigenere key for current cipher text and keyperiod...\n{}\nBest key: {}",
                    vigenere_table(&guess),
                    guess.best_key()
                )
            }
            Command::Test => self.self_test()?,
            Command::Help => help_text(),
            Command::Quit => return Ok(Reply::Quit("Quitting.".into())),
        };
        Ok(Reply::Output(out))
    }

    /// Caesar commands keep only the first key symbol in the session.
    fn effective_key(&self, kind: CipherKind) -> ShellResult<String> {
        match kind {
            CipherKind::Vigenere => Ok(self.session.key.clone()),
            CipherKind::Caesar => self
                .session
                .key
                .chars()
                .next()
                .map(String::from)
                .ok_or_else(|| CipherError::EmptyKey.into()),
        }
    }

    fn encrypt(&mut self, kind: CipherKind) -> ShellResult<String> {
        let key = self.effective_key(kind)?;
        let cipher_text = self.analyst.encrypt(&self.session.plain_text, &key, kind)?;
        self.session.key = key;
        self.session.cipher_text = cipher_text;
        Ok(format!("Encrypting current data with {kind}...\n{}", self.session.summary()))
    }

    fn decrypt(&mut self, kind: CipherKind) -> ShellResult<String> {
        let key = self.effective_key(kind)?;
        let plain_text = self.analyst.decrypt(&self.session.cipher_text, &key, kind)?;
        self.session.key = key;
        self.session.plain_text = plain_text;
        Ok(format!("Decrypting current data with {kind}...\n{}", self.session.summary()))
    }

    fn iocs(&self, max_period: usize) -> ShellResult<String> {
        let scan = self.analyst.indices_of_coincidence(&self.session.cipher_text, max_period)?;
        let mut table = Table::new(["Period", "Index of Coincidence"]);
        for pc in &scan {
            table.add_row([pc.period.to_string(), format!("{:.6}", pc.ioc)]);
        }
        Ok(format!("Calculating the indices of coincidence for cipher text...\n{table}"))
    }

    fn suggest_period(&mut self, max_period: usize) -> ShellResult<String> {
        let period = self.analyst.suggest_key_period(&self.session.cipher_text, max_period)?;
        self.session.keyperiod = period;
        Ok(format!("Suggested key period: {period}\nSetting key period to {period}"))
    }

    /// Runs its steps against the live session and rolls back if any fails.
    fn self_test(&mut self) -> ShellResult<String> {
        let steps = [
            Command::SetKey(DEFAULT_KEY.into()),
            Command::SetPlain(DEFAULT_PLAIN_TEXT.into()),
            Command::Encrypt(CipherKind::Vigenere),
            Command::Decrypt(CipherKind::Vigenere),
        ];
        self.run_all(steps)
    }

    pub(crate) fn run_all(&mut self, steps: impl IntoIterator<Item = Command>) -> ShellResult<String> {
        let snapshot = self.session.clone();
        let mut out = Vec::new();
        for step in steps {
            match self.execute(step) {
                Ok(reply) => out.push(reply.text().to_string()),
                Err(e) => {
                    self.session = snapshot;
                    return Err(e);
                }
            }
        }
        Ok(out.join("\n"))
    }
}

const GUESS_HEADERS: [&str; 3] = ["Key Position #", "Possible Characters", "Chi-Sq Score"];

fn push_position(table: &mut Table, position: usize, guess: &KeyGuessResult) {
    for (j, c) in guess.candidates().iter().enumerate() {
        let label = if j == 0 { position.to_string() } else { String::new() };
        table.add_row([label, c.symbol.to_string(), format!("{:.3}", c.score)]);
    }
}

pub fn caesar_table(guess: &KeyGuessResult) -> Table {
    let mut table = Table::new(GUESS_HEADERS);
    push_position(&mut table, 1, guess);
    table
}

pub fn vigenere_table(guess: &VigenereGuessResult) -> Table {
    let mut table = Table::new(GUESS_HEADERS);
    for (idx, position) in guess.positions().iter().enumerate() {
        push_position(&mut table, idx + 1, position);
        table.divide();
    }
    table
}

pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    COMMANDS
        .iter()
        .map(|(name, about)| format!("{name:<width$}  {about}"))
        .collect::<Vec<_>>()
        .join("\n")
}
