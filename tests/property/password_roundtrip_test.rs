//! Property-based tests for sealing and storing credentials.
//!
//! These tests verify that AES-256-GCM tokens and the full vault round trip
//! preserve arbitrary secrets, and that a stale key never opens a newer record.

use std::sync::Arc;

use proptest::prelude::*;
use securopass::services::credential_vault::{CredentialVault, CredentialVaultTrait};
use securopass::services::crypto_service::{CryptoService, CryptoServiceTrait};
use securopass::store::{CipherStore, InMemorySecretStore};
use securopass::types::credential::EncryptedData;
use tempfile::TempDir;

// **Property 1: Token round-trip**
//
// *For any* plaintext bytes and 32-byte key, sealing, encoding to a token,
// parsing the token and opening SHALL return the original plaintext.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn token_roundtrip_preserves_plaintext(
        plaintext in proptest::collection::vec(any::<u8>(), 0..=1024),
        key in proptest::collection::vec(any::<u8>(), 32..=32),
    ) {
        let service = CryptoService::new();

        let token = service
            .encrypt_aes256gcm(&plaintext, &key)
            .expect("Encryption should succeed for valid key")
            .to_token();
        let parsed = EncryptedData::from_token(&token).expect("Token should parse");
        let decrypted = service
            .decrypt_aes256gcm(&parsed, &key)
            .expect("Decryption should succeed with the same key");

        prop_assert_eq!(decrypted, plaintext);
    }
}

// **Property 2: Vault round-trip**
//
// *For any* identifier and secret string, `save` then `retrieve` SHALL return
// the secret unchanged, and the identifier SHALL appear in the listing.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn vault_roundtrip_preserves_secret(
        identifier in "[a-zA-Z0-9@._-]{1,40}",
        secret in any::<String>(),
    ) {
        let dir = TempDir::new().unwrap();
        let vault = CredentialVault::new(
            InMemorySecretStore::new(),
            CipherStore::open(dir.path().join("sp.json")),
        );

        vault.save(&identifier, &secret).unwrap();

        prop_assert_eq!(vault.retrieve(&identifier).unwrap(), secret);
        prop_assert!(vault.list_identifiers().unwrap().contains(&identifier));
    }
}

// **Property 3: Overwrite isolation**
//
// *For any* two secrets saved in turn under one identifier, retrieval SHALL
// return the second, and the first ciphertext SHALL NOT open under the new key.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn overwrite_revokes_previous_ciphertext(
        first in ".{0,64}",
        second in ".{0,64}",
    ) {
        let dir = TempDir::new().unwrap();
        let secrets = Arc::new(InMemorySecretStore::new());
        let vault = CredentialVault::new(
            Arc::clone(&secrets),
            CipherStore::open(dir.path().join("sp.json")),
        );

        vault.save("id", &first).unwrap();
        let old_token = vault.cipher_store().get("id").unwrap().unwrap();
        vault.save("id", &second).unwrap();

        prop_assert_eq!(vault.retrieve("id").unwrap(), second);

        let mut map = vault.cipher_store().load().unwrap();
        map.insert("id".to_string(), old_token);
        vault.cipher_store().write(&map).unwrap();
        prop_assert!(vault.retrieve("id").is_err());
    }
}
