//! Password vault storage operations

use serde::{Deserialize, Serialize};

use super::Store;
use crate::errors::Result;
use crate::vault::Vault;

/// A stored vault entry; the password only ever touches disk encrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: u64,
    pub title: String,
    pub account: String,
    pub encrypted_pwd: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: String,
}

/// Vault entry as returned by the API: password decrypted, ciphertext
/// blanked so it never leaves the process.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordView {
    pub id: u64,
    pub title: String,
    pub account: String,
    pub password: String,
    pub encrypted_pwd: String,
    pub url: String,
    pub tags: String,
}

impl Store {
    /// List vault entries newest first with passwords decrypted.
    ///
    /// Entries whose token no longer verifies surface as "Error" rather
    /// than failing the whole listing.
    pub async fn list_passwords(&self, vault: &Vault) -> Vec<PasswordView> {
        self.read(|data| {
            let mut entries = data.passwords.clone();
            entries.sort_by(|a, b| b.id.cmp(&a.id));
            entries
                .into_iter()
                .map(|e| {
                    let password = vault
                        .decrypt(&e.encrypted_pwd)
                        .unwrap_or_else(|_| "Error".to_string());
                    PasswordView {
                        id: e.id,
                        title: e.title,
                        account: e.account,
                        password,
                        encrypted_pwd: String::new(),
                        url: e.url,
                        tags: e.tags,
                    }
                })
                .collect()
        })
        .await
    }

    /// Encrypt and insert a new vault entry, returning its id.
    pub async fn add_password(
        &self,
        vault: &Vault,
        title: String,
        account: String,
        password: &str,
        url: String,
        tags: String,
    ) -> Result<u64> {
        let encrypted_pwd = vault.encrypt(password);
        self.write(|data| {
            let id = data.take_password_id();
            data.passwords.push(PasswordEntry {
                id,
                title,
                account,
                encrypted_pwd,
                url,
                tags,
            });
            id
        })
        .await
    }

    /// Remove a vault entry. Returns false for an unknown id.
    pub async fn delete_password(&self, id: u64) -> Result<bool> {
        self.write(|data| {
            let before = data.passwords.len();
            data.passwords.retain(|p| p.id != id);
            data.passwords.len() != before
        })
        .await
    }
}
