use std::sync::Arc;

use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolanaClientError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
    #[error("Invalid commitment level: {0}")]
    InvalidCommitment(String),
}

/// Wrapper around Solana RPC client with async-compatible methods
///
/// The connection handle for one invocation: created from the configured
/// endpoint, used to refresh blockhashes before signing, dropped at exit.
#[derive(Clone)]
pub struct SolanaClient {
    client: Arc<RpcClient>,
}

impl SolanaClient {
    /// Create a new Solana RPC client with confirmed commitment
    pub fn new(rpc_url: String) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(
            rpc_url,
            CommitmentConfig::confirmed(),
        ));
        Self { client }
    }

    /// Create a client with an explicit commitment level
    pub fn with_commitment(rpc_url: String, commitment: &str) -> Result<Self, SolanaClientError> {
        let commitment = match commitment {
            "processed" => CommitmentConfig::processed(),
            "confirmed" => CommitmentConfig::confirmed(),
            "finalized" => CommitmentConfig::finalized(),
            other => return Err(SolanaClientError::InvalidCommitment(other.to_string())),
        };

        let client = Arc::new(RpcClient::new_with_commitment(rpc_url, commitment));
        Ok(Self { client })
    }

    /// Get a recent blockhash (needed before signing a transaction)
    pub async fn get_latest_blockhash(&self) -> Result<solana_sdk::hash::Hash, SolanaClientError> {
        // Spawn blocking to make the sync RPC call async-compatible
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_latest_blockhash()
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = SolanaClient::new("https://api.devnet.solana.com".to_string());
        // Just verify it compiles and constructs
        assert!(std::mem::size_of_val(&client) > 0);
    }

    #[test]
    fn test_commitment_parsing() {
        let url = "https://api.devnet.solana.com".to_string();
        assert!(SolanaClient::with_commitment(url.clone(), "finalized").is_ok());
        assert!(SolanaClient::with_commitment(url, "instant").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SolanaClientError::RpcError("test".to_string());
        assert!(err.to_string().contains("RPC request failed"));
    }
}
