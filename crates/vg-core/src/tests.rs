use crate::*;
use crate::config::{DEFAULT_AMBIGUITY_RATIO, DEFAULT_MAX_CANDIDATES};

// ========== Alphabet ==========

#[test]
fn test_index_bijection() {
    for (i, c) in Alphabet::symbols().enumerate() {
        assert_eq!(Alphabet::lookup(c), Some(i as u8));
        assert_eq!(Alphabet::symbol(i as u8), c);
    }
}

#[test]
fn test_lookup_case_insensitive() {
    assert_eq!(Alphabet::lookup('A'), Some(0));
    assert_eq!(Alphabet::lookup('Z'), Some(25));
    assert_eq!(Alphabet::lookup('q'), Alphabet::lookup('Q'));
}

#[test]
fn test_non_member_rejected() {
    for c in [' ', '1', '!', 'é', 'ß', '\n', '{'] {
        assert_eq!(Alphabet::lookup(c), None, "{c:?} must not map to an index");
    }
}

#[test]
fn test_to_indices_reports_position() {
    let err = Alphabet::to_indices("abc d").unwrap_err();
    assert_eq!(err, CipherError::InvalidAlphabetSymbol { symbol: ' ', position: 3 });
}

#[test]
fn test_to_indices_position_counts_chars() {
    let err = Alphabet::to_indices("éa!").unwrap_err();
    assert_eq!(err, CipherError::InvalidAlphabetSymbol { symbol: 'é', position: 0 });
    let err = Alphabet::to_indices("aé!").unwrap_err();
    assert_eq!(err, CipherError::InvalidAlphabetSymbol { symbol: 'é', position: 1 });
}

#[test]
fn test_last_symbol_not_aliased() {
    // A failed lookup must never come back as 'z'.
    assert!(Alphabet::to_indices("a?").is_err());
    assert_eq!(Alphabet::to_indices("az").unwrap(), vec![0, 25]);
}

#[test]
fn test_normalize() {
    assert_eq!(Alphabet::normalize("HeLLo").unwrap(), "hello");
    assert_eq!(Alphabet::normalize("").unwrap(), "");
    assert!(Alphabet::normalize("hello world").is_err());
}

#[test]
fn test_checked_symbol_out_of_range() {
    assert_eq!(Alphabet::checked_symbol(25), Some('z'));
    assert_eq!(Alphabet::checked_symbol(26), None);
    assert_eq!(Alphabet::checked_symbol(u8::MAX), None);
}

#[test]
#[should_panic]
fn test_symbol_out_of_range_not_wrapped() {
    // 26 must not come back as 'a'
    Alphabet::symbol(26);
}

#[test]
#[should_panic]
fn test_counts_out_of_range_not_wrapped() {
    LetterCounts::from_indices(&[0, 26]);
}

// ========== LetterCounts ==========

#[test]
fn test_counts_basic() {
    let counts = LetterCounts::from_text("Hello").unwrap();
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.get(Alphabet::lookup('l').unwrap() as usize), 2);
    assert_eq!(counts.get(Alphabet::lookup('h').unwrap() as usize), 1);
    assert_eq!(counts.get(0), 0);
}

#[test]
fn test_counts_empty() {
    let counts = LetterCounts::from_text("").unwrap();
    assert_eq!(counts.total(), 0);
    assert!(counts.as_slice().iter().all(|&c| c == 0));
}

#[test]
fn test_counts_shifted_matches_decryption() {
    // "bcd" decrypted with key 'b' (1) is "abc".
    let shifted = LetterCounts::from_text("bcd").unwrap().shifted(1);
    assert_eq!(shifted, LetterCounts::from_text("abc").unwrap());
}

#[test]
fn test_counts_shifted_wraps() {
    // "a" decrypted with key 'b' is "z".
    let shifted = LetterCounts::from_text("a").unwrap().shifted(1);
    assert_eq!(shifted.get(25), 1);
    assert_eq!(shifted.total(), 1);
}

#[test]
fn test_counts_shift_zero_identity() {
    let counts = LetterCounts::from_text("thequickbrownfox").unwrap();
    assert_eq!(counts.shifted(0), counts);
}

// ========== FrequencyDistribution ==========

#[test]
fn test_english_sums_to_one() {
    assert!((ENGLISH.sum() - 1.0).abs() < 1e-3);
    assert!(ENGLISH.as_slice().iter().all(|&p| p > 0.0));
}

#[test]
fn test_english_e_most_common() {
    let e = Alphabet::lookup('e').unwrap() as usize;
    let max = ENGLISH.as_slice().iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(ENGLISH.get(e), max);
}

#[test]
fn test_distribution_rejects_negative() {
    let mut values = [1.0 / 26.0; 26];
    values[3] = -0.1;
    assert!(matches!(FrequencyDistribution::new(values), Err(CipherError::InvalidDistribution(_))));
}

#[test]
fn test_distribution_rejects_nan() {
    let mut values = [1.0 / 26.0; 26];
    values[0] = f64::NAN;
    assert!(FrequencyDistribution::new(values).is_err());
}

#[test]
fn test_distribution_wrong_length() {
    let err = FrequencyDistribution::try_from(vec![0.5, 0.5]).unwrap_err();
    assert!(err.to_string().contains("expected 26 entries, got 2"));
}

#[test]
fn test_distribution_json() {
    let json = serde_json::to_string(&ENGLISH).unwrap();
    let back: FrequencyDistribution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ENGLISH);
    assert!(serde_json::from_str::<FrequencyDistribution>("[0.1, 0.2]").is_err());
}

// ========== Types ==========

#[test]
fn test_key_guess_result_views() {
    let result = KeyGuessResult::new(KeyCandidate::new(12, 10.0), vec![KeyCandidate::new(0, 12.5)]);
    assert_eq!(result.letters(), vec!['m', 'a']);
    assert_eq!(result.scores(), vec![10.0, 12.5]);
    assert_eq!(result.best().symbol, 'm');
    assert!(result.is_ambiguous());
}

#[test]
fn test_key_guess_json_rejects_empty() {
    let err = serde_json::from_str::<KeyGuessResult>(r#"{"candidates":[]}"#).unwrap_err();
    assert!(err.to_string().contains("at least one candidate"));
    let nested = r#"{"positions":[{"candidates":[]}]}"#;
    assert!(serde_json::from_str::<VigenereGuessResult>(nested).is_err());
}

#[test]
fn test_key_guess_json_rejects_unordered() {
    let json = r#"{"candidates":[{"symbol":"a","score":5.0},{"symbol":"b","score":1.0}]}"#;
    assert!(serde_json::from_str::<KeyGuessResult>(json).is_err());
}

#[test]
fn test_key_guess_json_roundtrip() {
    let result = KeyGuessResult::new(KeyCandidate::new(12, 10.0), vec![KeyCandidate::new(0, 12.5)]);
    let json = serde_json::to_string(&result).unwrap();
    let back: KeyGuessResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.best().symbol, 'm');
}

#[test]
fn test_vigenere_result_best_key() {
    let positions = vec![
        KeyGuessResult::new(KeyCandidate::new(10, 1.0), vec![]),
        KeyGuessResult::new(KeyCandidate::new(4, 2.0), vec![KeyCandidate::new(0, 2.5)]),
        KeyGuessResult::new(KeyCandidate::new(24, 3.0), vec![]),
    ];
    let result = VigenereGuessResult::new(positions);
    assert_eq!(result.period(), 3);
    assert_eq!(result.best_key(), "key");
    assert_eq!(result.ambiguous_positions(), vec![1]);
}

#[test]
fn test_cipher_kind_display() {
    assert_eq!(CipherKind::Caesar.to_string(), "Caesar");
    assert_eq!(serde_json::to_string(&CipherKind::Vigenere).unwrap(), "\"vigenere\"");
}

#[test]
fn test_error_messages() {
    let e = CipherError::InvalidPeriod { period: 0, minimum: 1 };
    assert_eq!(e.to_string(), "Invalid period 0: must be at least 1");
    assert_eq!(CipherError::EmptyKey.to_string(), "Key must not be empty");
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = VigenereLabConfig::default();
    assert_eq!(cfg.analysis.ambiguity_ratio, DEFAULT_AMBIGUITY_RATIO);
    assert_eq!(cfg.analysis.max_candidates, DEFAULT_MAX_CANDIDATES);
    assert_eq!(cfg.shell.default_keyperiod, 5);
    assert_eq!(cfg.shell.default_max_period, 10);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_partial_json() {
    let cfg = VigenereLabConfig::from_json_str(r#"{"analysis":{"max_candidates":3}}"#).unwrap();
    assert_eq!(cfg.analysis.max_candidates, 3);
    assert_eq!(cfg.analysis.ambiguity_ratio, DEFAULT_AMBIGUITY_RATIO);
    assert_eq!(cfg.shell, ShellConfig::default());
}

#[test]
fn test_config_empty_json() {
    let cfg = VigenereLabConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, VigenereLabConfig::default());
}

#[test]
fn test_config_invalid_json() {
    assert!(VigenereLabConfig::from_json_str("{not json").is_err());
}

#[test]
fn test_config_validate_rejects_zero_candidates() {
    let cfg = AnalysisConfig { max_candidates: 0, ..AnalysisConfig::default() };
    assert!(matches!(cfg.validate(), Err(CipherError::InvalidConfig(_))));
}

#[test]
fn test_config_validate_rejects_bad_ratio() {
    for ratio in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let cfg = AnalysisConfig { ambiguity_ratio: ratio, ..AnalysisConfig::default() };
        assert!(cfg.validate().is_err(), "ratio {ratio} should be rejected");
    }
}

#[test]
fn test_shell_config_validate() {
    let cfg = ShellConfig { default_keyperiod: 0, ..ShellConfig::default() };
    assert_eq!(cfg.validate(), Err(CipherError::InvalidPeriod { period: 0, minimum: 1 }));
    let cfg = ShellConfig { default_max_period: 1, ..ShellConfig::default() };
    assert_eq!(cfg.validate(), Err(CipherError::InvalidPeriod { period: 1, minimum: 2 }));
}
