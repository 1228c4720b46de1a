//! Password generator for SecuroPass.
//!
//! Draws characters from a bank assembled from the caller's preferences using
//! the system CSPRNG, then optionally prefixes a user phrase and truncates the
//! result to the requested length.

use tracing::debug;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::credential::{
    GenerationPreferences, SamplingPolicy, MAX_PASSWORD_LENGTH, PHRASE_MAX_LENGTH,
    PHRASE_SEPARATOR,
};
use crate::types::errors::GeneratorError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    /// Generates a password of exactly `prefs.length` characters.
    fn generate(&self, prefs: &GenerationPreferences) -> Result<String, GeneratorError>;

    /// Returns the characters eligible for random selection under `prefs`.
    fn build_bank(&self, prefs: &GenerationPreferences) -> Vec<char>;
}

/// Password generator backed by `ring`'s system random source.
pub struct PasswordGenerator {
    crypto: CryptoService,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            crypto: CryptoService::new(),
        }
    }

    /// Checks length and phrase bounds before any randomness is consumed.
    pub fn validate(prefs: &GenerationPreferences) -> Result<(), GeneratorError> {
        if prefs.length == 0 || prefs.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidPreferences(format!(
                "length must be between 1 and {}, got {}",
                MAX_PASSWORD_LENGTH, prefs.length
            )));
        }

        if let Some(phrase) = prefs.phrase.as_deref() {
            let count = phrase.chars().count();
            if count > PHRASE_MAX_LENGTH {
                return Err(GeneratorError::InvalidPreferences(format!(
                    "phrase must be at most {} characters, got {}",
                    PHRASE_MAX_LENGTH, count
                )));
            }
            if phrase.chars().any(char::is_whitespace) {
                return Err(GeneratorError::InvalidPreferences(
                    "phrase must not contain whitespace".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Bytes at or above the largest multiple of `bound` are rejected so no
    /// index is favoured.
    fn random_below(&self, bound: usize) -> Result<usize, GeneratorError> {
        debug_assert!(bound > 0 && bound <= 256);
        let limit = 256 - (256 % bound);
        loop {
            let bytes = self.crypto.generate_random_bytes(16)?;
            if let Some(b) = bytes.into_iter().map(usize::from).find(|b| *b < limit) {
                return Ok(b % bound);
            }
        }
    }

    fn sample_with_replacement(
        &self,
        bank: &[char],
        length: usize,
    ) -> Result<String, GeneratorError> {
        (0..length)
            .map(|_| self.random_below(bank.len()).map(|i| bank[i]))
            .collect()
    }

    fn sample_without_replacement(
        &self,
        bank: &[char],
        length: usize,
    ) -> Result<String, GeneratorError> {
        if bank.len() < length {
            return Err(GeneratorError::InsufficientBankSize {
                bank: bank.len(),
                length,
            });
        }

        // Partial Fisher-Yates: the first `length` slots end up a uniform sample.
        let mut pool = bank.to_vec();
        for i in 0..length {
            let j = i + self.random_below(pool.len() - i)?;
            pool.swap(i, j);
        }
        Ok(pool[..length].iter().collect())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    fn generate(&self, prefs: &GenerationPreferences) -> Result<String, GeneratorError> {
        Self::validate(prefs)?;

        let bank = self.build_bank(prefs);
        if bank.is_empty() {
            return Err(GeneratorError::InvalidPreferences(
                "character bank is empty".to_string(),
            ));
        }

        // Only the positions the phrase and separator leave free are drawn.
        let prefix_len = prefs
            .active_phrase()
            .map_or(0, |phrase| phrase.chars().count() + 1);
        let tail_len = prefs.length.saturating_sub(prefix_len);

        let tail = match prefs.sampling {
            SamplingPolicy::WithReplacement => self.sample_with_replacement(&bank, tail_len)?,
            SamplingPolicy::WithoutReplacement => {
                self.sample_without_replacement(&bank, tail_len)?
            }
        };

        debug!(
            length = prefs.length,
            bank_size = bank.len(),
            with_phrase = prefs.active_phrase().is_some(),
            "Generated password"
        );

        match prefs.active_phrase() {
            Some(phrase) => Ok(phrase
                .chars()
                .chain(std::iter::once(PHRASE_SEPARATOR))
                .chain(tail.chars())
                .take(prefs.length)
                .collect()),
            None => Ok(tail),
        }
    }

    fn build_bank(&self, prefs: &GenerationPreferences) -> Vec<char> {
        let mut bank: Vec<char> = LOWERCASE.chars().collect();
        if prefs.include_uppercase {
            bank.extend(UPPERCASE.chars());
        }
        if prefs.include_symbols {
            bank.extend(SYMBOLS.chars());
        }
        if prefs.include_numbers {
            bank.extend(DIGITS.chars());
        }
        bank
    }
}
