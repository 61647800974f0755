use vg_core::ShellConfig;

/// Working state of one shell: the current key, texts and key period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub key: String,
    pub plain_text: String,
    pub cipher_text: String,
    pub keyperiod: usize,
}

impl Session {
    pub fn new(keyperiod: usize) -> Self {
        Self {
            key: String::new(),
            plain_text: String::new(),
            cipher_text: String::new(),
            keyperiod,
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(config.default_keyperiod)
    }

    /// Three-line overview of key and texts.
    pub fn summary(&self) -> String {
        format!(
            "Plain text  : {}\nCipher text : {}\nKey text    : {}",
            self.plain_text, self.cipher_text, self.key
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}
