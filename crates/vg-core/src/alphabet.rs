//! The 26-letter lowercase Latin alphabet and letter counting over it.
//!
//! Every text entering the engine passes through [`Alphabet::to_indices`],
//! which is the only place characters are mapped to numbers. Characters
//! outside the alphabet are rejected there, before any arithmetic happens.

use crate::error::{CipherError, Result};

pub const ALPHABET_LEN: usize = 26;

const SYMBOLS: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz";

/// Fixed ordered symbol set. Index arithmetic is modulo [`ALPHABET_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alphabet;

impl Alphabet {
    /// Index of `c` after lowercasing, or `None` if it is not a member.
    pub fn lookup(c: char) -> Option<u8> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(lower as u8 - b'a')
        } else {
            None
        }
    }

    /// Index of `c`, failing with `InvalidAlphabetSymbol` for non-members.
    pub fn index_of(c: char, position: usize) -> Result<u8> {
        Self::lookup(c).ok_or(CipherError::InvalidAlphabetSymbol { symbol: c, position })
    }

    /// Symbol for `index`, or `None` past the end of the alphabet.
    pub fn checked_symbol(index: u8) -> Option<char> {
        SYMBOLS.get(index as usize).map(|&b| b as char)
    }

    /// Symbol for `index`.
    ///
    /// # Panics
    ///
    /// If `index >= ALPHABET_LEN`. Out-of-range indices are never wrapped.
    pub fn symbol(index: u8) -> char {
        SYMBOLS[index as usize] as char
    }

    /// Map a whole text to indices. Positions in errors count characters, not bytes.
    pub fn to_indices(text: &str) -> Result<Vec<u8>> {
        text.chars()
            .enumerate()
            .map(|(pos, c)| Self::index_of(c, pos))
            .collect()
    }

    pub fn from_indices(indices: &[u8]) -> String {
        indices.iter().map(|&i| Self::symbol(i)).collect()
    }

    /// Validate and lowercase `text`.
    pub fn normalize(text: &str) -> Result<String> {
        Self::to_indices(text).map(|idx| Self::from_indices(&idx))
    }

    pub fn symbols() -> impl Iterator<Item = char> {
        SYMBOLS.iter().map(|&b| b as char)
    }
}

/// Per-letter occurrence counts, index-aligned with [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [u64; ALPHABET_LEN],
}

impl LetterCounts {
    /// # Panics
    ///
    /// If any index is `>= ALPHABET_LEN`.
    pub fn from_indices(indices: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_LEN];
        for &i in indices {
            counts[i as usize] += 1;
        }
        Self { counts }
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::from_indices(&Alphabet::to_indices(text)?))
    }

    pub fn get(&self, index: usize) -> u64 {
        self.counts[index]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Counts of the same text after decrypting it with key symbol `key`.
    ///
    /// Decryption maps ciphertext letter `c` to `(c - key) mod 26`, so plaintext
    /// letter `p` gets the count of ciphertext letter `(p + key) mod 26`.
    pub fn shifted(&self, key: u8) -> Self {
        let k = key as usize % ALPHABET_LEN;
        let mut counts = [0u64; ALPHABET_LEN];
        for (p, slot) in counts.iter_mut().enumerate() {
            *slot = self.counts[(p + k) % ALPHABET_LEN];
        }
        Self { counts }
    }
}
