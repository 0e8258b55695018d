//! Reversible encryption for vault passwords
//!
//! HMAC-SHA256 keystream XOR with a random nonce, authenticated by a
//! second HMAC over nonce and ciphertext. Token layout:
//! `base64(nonce || ciphertext || tag)`. The master key is generated per
//! install and kept next to the store file.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{Result, ToolbenchError};

type HmacSha256 = Hmac<Sha256>;

const NONCE_LEN: usize = 16;
const TAG_LEN: usize = 32;

/// Reversible string cipher backing the password vault
pub struct Vault {
    enc_key: [u8; 32],
    mac_key: [u8; 32],
}

impl Vault {
    /// Load the master key file, generating one on first run.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let master: [u8; 32] = if path.exists() {
            let encoded = std::fs::read_to_string(path)?;
            let bytes = BASE64
                .decode(encoded.trim())
                .map_err(|e| ToolbenchError::Crypto(format!("bad key file: {}", e)))?;
            bytes
                .try_into()
                .map_err(|_| ToolbenchError::Crypto("bad key file length".to_string()))?
        } else {
            let key: [u8; 32] = rand::random();
            std::fs::write(path, BASE64.encode(key))?;
            restrict_permissions(path);
            key
        };
        Ok(Self::from_master(&master))
    }

    /// Build a vault directly from a master key (used by tests).
    pub fn from_master(master: &[u8; 32]) -> Self {
        Self {
            enc_key: derive(master, b"enc"),
            mac_key: derive(master, b"mac"),
        }
    }

    /// Encrypt a password into a base64 token.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let nonce: [u8; NONCE_LEN] = rand::random();

        let mut ciphertext = plaintext.as_bytes().to_vec();
        self.apply_keystream(&nonce, &mut ciphertext);

        let tag = self.mac(&nonce, &ciphertext).finalize().into_bytes();

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len() + TAG_LEN);
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        out.extend_from_slice(&tag);
        BASE64.encode(out)
    }

    /// Decrypt a token produced by [`Vault::encrypt`], verifying its tag.
    pub fn decrypt(&self, token: &str) -> Result<String> {
        let raw = BASE64
            .decode(token)
            .map_err(|e| ToolbenchError::Crypto(format!("bad token: {}", e)))?;
        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(ToolbenchError::Crypto("token too short".to_string()));
        }
        let (nonce, rest) = raw.split_at(NONCE_LEN);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);

        self.mac(nonce, ciphertext)
            .verify_slice(tag)
            .map_err(|_| ToolbenchError::Crypto("tag mismatch".to_string()))?;

        let mut plaintext = ciphertext.to_vec();
        self.apply_keystream(nonce, &mut plaintext);
        String::from_utf8(plaintext)
            .map_err(|_| ToolbenchError::Crypto("plaintext is not UTF-8".to_string()))
    }

    fn mac(&self, nonce: &[u8], ciphertext: &[u8]) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.mac_key).expect("HMAC can take key of any size");
        mac.update(nonce);
        mac.update(ciphertext);
        mac
    }

    fn apply_keystream(&self, nonce: &[u8], data: &mut [u8]) {
        let mut counter: u64 = 0;
        let mut offset = 0;
        while offset < data.len() {
            let mut mac =
                HmacSha256::new_from_slice(&self.enc_key).expect("HMAC can take key of any size");
            mac.update(nonce);
            mac.update(&counter.to_be_bytes());
            let block = mac.finalize().into_bytes();
            for (b, k) in data[offset..].iter_mut().zip(block.iter()) {
                *b ^= k;
            }
            offset += block.len();
            counter += 1;
        }
    }
}

fn derive(master: &[u8; 32], label: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(master).expect("HMAC can take key of any size");
    mac.update(label);
    mac.finalize().into_bytes().into()
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600));
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}
