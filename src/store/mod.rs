//! SecuroPass storage layer.
//!
//! Keys and ciphertexts live in two separate places: keys in a [`SecretStore`]
//! (the OS keyring in production), ciphertexts in a flat JSON map on disk
//! handled by [`CipherStore`].
//!
//! # Usage
//!
//! ```no_run
//! use securopass::store::{CipherStore, InMemorySecretStore, SecretStore};
//!
//! let ciphers = CipherStore::open("sp.json");
//! let identifiers = ciphers.load().expect("failed to read store").into_keys();
//!
//! let secrets = InMemorySecretStore::new();
//! secrets.set_secret("SecuroPass", "alice", "key-text").expect("store key");
//! ```

pub mod cipher_store;
pub mod secret_store;

pub use cipher_store::CipherStore;
#[cfg(feature = "keychain")]
pub use secret_store::KeyringSecretStore;
pub use secret_store::{InMemorySecretStore, SecretStore};
