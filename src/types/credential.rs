use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::errors::CryptoError;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 48;

/// Longest phrase that may be merged into a generated password.
pub const PHRASE_MAX_LENGTH: usize = 32;

/// Length used when the caller has not picked one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Separator placed between the phrase and the random tail.
pub const PHRASE_SEPARATOR: char = '_';

/// AES-256-GCM nonce/IV length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// AES-256-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Leading byte of every ciphertext token.
const TOKEN_VERSION: u8 = 0x01;

/// How characters are drawn from the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingPolicy {
    /// Every position is drawn independently; the bank can never run out.
    #[default]
    WithReplacement,
    /// No character repeats; the bank must hold at least `length` characters.
    WithoutReplacement,
}

/// Options for generating a random password.
///
/// Built fresh for every request. Lowercase letters are always part of the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPreferences {
    pub include_uppercase: bool,
    pub include_symbols: bool,
    pub include_numbers: bool,
    pub length: usize,
    pub phrase: Option<String>,
    #[serde(default)]
    pub sampling: SamplingPolicy,
}

impl Default for GenerationPreferences {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_symbols: true,
            include_numbers: true,
            length: DEFAULT_PASSWORD_LENGTH,
            phrase: None,
            sampling: SamplingPolicy::default(),
        }
    }
}

impl GenerationPreferences {
    /// Sets the phrase after stripping whitespace from it.
    /// An input that is empty after stripping clears the phrase.
    pub fn with_phrase(mut self, raw: &str) -> Self {
        let phrase = sanitize_phrase(raw);
        self.phrase = if phrase.is_empty() { None } else { Some(phrase) };
        self
    }

    /// Returns the phrase if one is set and non-empty.
    pub fn active_phrase(&self) -> Option<&str> {
        self.phrase.as_deref().filter(|p| !p.is_empty())
    }
}

/// Removes every whitespace character from a user-typed phrase.
pub fn sanitize_phrase(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A persisted credential: the identifier and its text-safe ciphertext.
///
/// The key that opens `ciphertext` is never stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub identifier: String,
    pub ciphertext: String,
}

/// One row of the vault listing: an identifier and either its secret
/// or the reason it could not be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedCredential {
    pub identifier: String,
    pub secret: Result<String, String>,
}

/// Encrypted data container used by CryptoService.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    pub ciphertext: Vec<u8>,
    pub iv: Vec<u8>,
    pub auth_tag: Vec<u8>,
}

impl EncryptedData {
    /// Packs version, nonce, ciphertext and tag into one URL-safe base64 string.
    pub fn to_token(&self) -> String {
        let mut raw =
            Vec::with_capacity(1 + self.iv.len() + self.ciphertext.len() + self.auth_tag.len());
        raw.push(TOKEN_VERSION);
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.ciphertext);
        raw.extend_from_slice(&self.auth_tag);
        URL_SAFE.encode(raw)
    }

    /// Parses a token produced by [`EncryptedData::to_token`].
    pub fn from_token(token: &str) -> Result<Self, CryptoError> {
        let raw = URL_SAFE
            .decode(token.trim())
            .map_err(|e| CryptoError::Decryption(format!("Ciphertext is not valid base64: {}", e)))?;

        if raw.len() < 1 + NONCE_LENGTH + TAG_LENGTH {
            return Err(CryptoError::Decryption(format!(
                "Ciphertext too short: {} bytes",
                raw.len()
            )));
        }
        if raw[0] != TOKEN_VERSION {
            return Err(CryptoError::Decryption(format!(
                "Unsupported ciphertext version: {}",
                raw[0]
            )));
        }

        let body = &raw[1..];
        let tag_start = body.len() - TAG_LENGTH;
        Ok(Self {
            iv: body[..NONCE_LENGTH].to_vec(),
            ciphertext: body[NONCE_LENGTH..tag_start].to_vec(),
            auth_tag: body[tag_start..].to_vec(),
        })
    }
}
