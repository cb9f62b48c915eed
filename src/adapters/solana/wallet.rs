use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to decode secret key: {0}")]
    DecodeError(String),
    #[error("Invalid keypair bytes: {0}")]
    InvalidKeypair(String),
}

/// Wallet credential for one invocation
///
/// Built from the caller-supplied base64 secret, owned for the lifetime of
/// the process and dropped on exit. The secret itself is never logged;
/// log the derived public key instead.
pub struct WalletManager {
    keypair: Keypair,
}

impl WalletManager {
    /// Decode a base64-encoded secret key into a keypair
    pub fn from_base64(secret_key_base64: &str) -> Result<Self, WalletError> {
        let bytes = BASE64
            .decode(secret_key_base64.trim())
            .map_err(|e| WalletError::DecodeError(e.to_string()))?;

        Self::from_bytes(&bytes)
    }

    /// Load keypair from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        let keypair = Keypair::try_from(bytes)
            .map_err(|e| WalletError::InvalidKeypair(e.to_string()))?;

        Ok(Self { keypair })
    }

    /// Create a new random keypair (for testing)
    pub fn new_random() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Get the public key as a string
    pub fn public_key(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    /// Get the public key as Pubkey
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get keypair reference for signing
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_random_wallet() {
        let wallet = WalletManager::new_random();
        let pubkey = wallet.public_key();
        assert!(!pubkey.is_empty());
        // Base58 of a 32-byte key is 43 or 44 chars depending on leading zeros
        assert!((43..=44).contains(&pubkey.len()));
    }

    #[test]
    fn test_from_base64_roundtrip() {
        let wallet1 = WalletManager::new_random();
        let encoded = BASE64.encode(wallet1.keypair().to_bytes());

        let wallet2 = WalletManager::from_base64(&encoded).unwrap();
        assert_eq!(wallet1.public_key(), wallet2.public_key());
    }

    #[test]
    fn test_from_base64_trims_whitespace() {
        let wallet1 = WalletManager::new_random();
        let encoded = format!("  {}\n", BASE64.encode(wallet1.keypair().to_bytes()));

        let wallet2 = WalletManager::from_base64(&encoded).unwrap();
        assert_eq!(wallet1.public_key(), wallet2.public_key());
    }

    #[test]
    fn test_invalid_base64() {
        let result = WalletManager::from_base64("not base64 at all!!!");
        assert!(matches!(result, Err(WalletError::DecodeError(_))));
    }

    #[test]
    fn test_invalid_bytes() {
        // Valid base64, wrong length for a keypair
        let encoded = BASE64.encode([0u8; 10]);
        let result = WalletManager::from_base64(&encoded);
        assert!(matches!(result, Err(WalletError::InvalidKeypair(_))));
    }

    #[test]
    fn test_pubkey_formats() {
        let wallet = WalletManager::new_random();
        assert_eq!(wallet.public_key(), wallet.pubkey().to_string());
    }
}
