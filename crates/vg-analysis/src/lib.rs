//! Vigenère lab analysis engine: cipher transform plus ciphertext-only key recovery.
//!
//! Modules, leaf-first:
//! 1. `cipher` — polyalphabetic shift transform; Caesar is the one-symbol-key case
//! 2. `coincidence` — index of coincidence, per-period de-interleaving, period suggestion
//! 3. `scorer` — chi-squared fit against a reference letter distribution
//! 4. `caesar` — brute-force all 26 shifts and rank them by score
//! 5. `vigenere` — split by key period and solve every slice as a Caesar cipher
//!
//! [`Analyst`] bundles them behind one configured facade.

pub mod analyst;
pub mod caesar;
pub mod cipher;
pub mod coincidence;
pub mod scorer;
pub mod vigenere;

pub use analyst::Analyst;
pub use caesar::guess_caesar_key;
pub use cipher::{caesar_decrypt, caesar_encrypt, decrypt, encrypt, transform, vigenere_decrypt, vigenere_encrypt};
pub use coincidence::{index_of_coincidence, index_of_coincidence_for_period, indices_of_coincidence, slices, suggest_key_period};
pub use scorer::chi_squared;
pub use vigenere::guess_vigenere_key;
