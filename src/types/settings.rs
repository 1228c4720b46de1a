use serde::{Deserialize, Serialize};

use super::credential::{GenerationPreferences, SamplingPolicy, DEFAULT_PASSWORD_LENGTH};

/// Secret-store scope used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "SecuroPass";

/// File name of the ciphertext store.
pub const STORE_FILE_NAME: &str = "sp.json";

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VaultSettings {
    pub storage: StorageSettings,
    pub generator: GeneratorSettings,
}

/// Where ciphertexts and keys live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Ciphertext file; `None` means `<data dir>/sp.json`.
    pub store_path: Option<String>,
    /// Scope under which keys are filed in the secret store.
    pub service_name: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            store_path: None,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

/// Starting values for new generation requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    pub length: usize,
    pub uppercase: bool,
    pub symbols: bool,
    pub numbers: bool,
    pub sampling: SamplingPolicy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            symbols: true,
            numbers: true,
            sampling: SamplingPolicy::WithReplacement,
        }
    }
}

impl GeneratorSettings {
    /// Builds a fresh preferences value from these defaults, without a phrase.
    pub fn to_preferences(&self) -> GenerationPreferences {
        GenerationPreferences {
            include_uppercase: self.uppercase,
            include_symbols: self.symbols,
            include_numbers: self.numbers,
            length: self.length,
            phrase: None,
            sampling: self.sampling,
        }
    }
}
