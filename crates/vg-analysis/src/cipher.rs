//! Cipher transform — generalized polyalphabetic shift.

use vg_core::{Alphabet, CipherError, CipherKind, Result, ALPHABET_LEN};

/// Shift every text index by the key index at the same position (key repeats).
///
/// `key` must be non-empty and every index must be below the alphabet length.
pub(crate) fn transform_indices(text: &[u8], key: &[u8], encrypt: bool) -> Vec<u8> {
    let n = ALPHABET_LEN as u8;
    text.iter()
        .zip(key.iter().cycle())
        .map(|(&t, &k)| if encrypt { (t + k) % n } else { (t + n - k) % n })
        .collect()
}

fn key_indices(key: &str) -> Result<Vec<u8>> {
    let key = Alphabet::to_indices(key)?;
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    Ok(key)
}

/// Vigenère transform of `text` under `key`. Both are lowercased and validated first.
pub fn transform(text: &str, key: &str, encrypt: bool) -> Result<String> {
    let key = key_indices(key)?;
    let text = Alphabet::to_indices(text)?;
    Ok(Alphabet::from_indices(&transform_indices(&text, &key, encrypt)))
}

pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, true)
}

pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, false)
}

/// Caesar transform: the whole key is validated, only its first symbol is applied.
fn caesar(text: &str, key: &str, encrypt: bool) -> Result<String> {
    let key = key_indices(key)?;
    let text = Alphabet::to_indices(text)?;
    Ok(Alphabet::from_indices(&transform_indices(&text, &key[..1], encrypt)))
}

pub fn caesar_encrypt(text: &str, key: &str) -> Result<String> {
    caesar(text, key, true)
}

pub fn caesar_decrypt(text: &str, key: &str) -> Result<String> {
    caesar(text, key, false)
}

pub fn encrypt(text: &str, key: &str, kind: CipherKind) -> Result<String> {
    match kind {
        CipherKind::Caesar => caesar_encrypt(text, key),
        CipherKind::Vigenere => vigenere_encrypt(text, key),
    }
}

pub fn decrypt(text: &str, key: &str, kind: CipherKind) -> Result<String> {
    match kind {
        CipherKind::Caesar => caesar_decrypt(text, key),
        CipherKind::Vigenere => vigenere_decrypt(text, key),
    }
}
