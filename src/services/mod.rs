// SecuroPass services
// Services provide core functionality: crypto, password generation, the credential vault and settings.

pub mod credential_vault;
pub mod crypto_service;
pub mod password_generator;
pub mod settings_engine;
