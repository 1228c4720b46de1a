//! App Core for SecuroPass.
//!
//! Central struct wiring settings, the password generator and the credential
//! vault together for a presentation layer.

use tracing::{info, warn};

use crate::services::credential_vault::CredentialVault;
use crate::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::store::{CipherStore, SecretStore};
use crate::types::credential::GenerationPreferences;
use crate::types::errors::{GeneratorError, SettingsError};

/// Central application struct holding all services.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub generator: PasswordGenerator,
    pub vault: CredentialVault<Box<dyn SecretStore>>,
}

impl App {
    /// Loads settings and opens the vault with the platform secret store.
    ///
    /// Without the `keychain` feature keys are held in memory only and are
    /// lost when the process exits.
    pub fn new(config_override: Option<String>) -> Result<Self, SettingsError> {
        #[cfg(feature = "keychain")]
        let secrets: Box<dyn SecretStore> = Box::new(crate::store::KeyringSecretStore::new());

        #[cfg(not(feature = "keychain"))]
        let secrets: Box<dyn SecretStore> = {
            warn!("Built without keychain support; keys will not survive this process");
            Box::new(crate::store::InMemorySecretStore::new())
        };

        Self::with_secret_store(config_override, secrets)
    }

    /// Loads settings and opens the vault with the given secret store.
    pub fn with_secret_store(
        config_override: Option<String>,
        secrets: Box<dyn SecretStore>,
    ) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_override);
        let settings = settings_engine.load()?;

        let store_path = settings_engine.resolve_store_path();
        info!(
            store = %store_path.display(),
            scope = %settings.storage.service_name,
            "Opening credential vault"
        );

        let vault = CredentialVault::new(secrets, CipherStore::open(store_path))
            .with_scope(settings.storage.service_name);

        Ok(Self {
            settings_engine,
            generator: PasswordGenerator::new(),
            vault,
        })
    }

    /// Fresh preferences seeded from the configured generator defaults.
    pub fn default_preferences(&self) -> GenerationPreferences {
        self.settings_engine.get_settings().generator.to_preferences()
    }

    /// Generates a password, logging rejected preferences.
    pub fn generate(&self, prefs: &GenerationPreferences) -> Result<String, GeneratorError> {
        self.generator.generate(prefs).map_err(|e| {
            warn!(error = %e, "Password generation rejected");
            e
        })
    }
}
