//! Trading Port
//!
//! Narrow interface over the external pump.fun trading backend: build a
//! signed buy transaction, build a signed sell transaction, list recently
//! created tokens. Everything behind this trait (request construction,
//! signing, wire formats) is opaque to the adapter core, which only
//! encodes the results as JSON.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a trading backend implementation
#[derive(Debug, Error)]
pub enum TradeError {
    /// HTTP request to the trading API failed or returned an error status
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Local signing of the returned transaction failed
    #[error("Transaction signing failed: {0}")]
    SigningError(String),

    /// RPC call to the ledger endpoint failed
    #[error("RPC error: {0}")]
    RpcError(String),

    /// Wallet credential could not be constructed from the supplied secret
    #[error("Wallet error: {0}")]
    WalletError(String),

    /// Request parameters rejected before any network call
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// A recently created pump.fun token as reported by the backend.
///
/// Only the fields the bridge inspects are typed; everything else the
/// backend sends is preserved in `extra` and serialized back out verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentToken {
    /// Token mint address
    pub mint: String,
    /// Token name
    #[serde(default)]
    pub name: String,
    /// Token symbol
    #[serde(default)]
    pub symbol: String,
    /// Creation timestamp (milliseconds, as reported by the API)
    #[serde(default)]
    pub created_timestamp: u64,
    /// Market cap in USD
    #[serde(default)]
    pub usd_market_cap: f64,
    /// Remaining backend fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecentToken {
    /// Create a token with minimal fields (test fixtures)
    pub fn new(mint: &str, name: &str, symbol: &str) -> Self {
        Self {
            mint: mint.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            created_timestamp: 0,
            usd_market_cap: 0.0,
            extra: serde_json::Map::new(),
        }
    }
}

/// Trait for the external trading backend
///
/// Buy/sell operations return the signed, serialized transaction bytes;
/// the caller decides how to encode or submit them. `list_recent_tokens`
/// is a read-only operation and implementations must not require a wallet
/// for it.
#[async_trait]
pub trait TradingPort: Send + Sync {
    /// Build and sign a buy transaction for `mint`, spending `sol_amount`
    /// SOL with the given slippage tolerance (percent).
    async fn build_buy_transaction(
        &self,
        mint: &str,
        sol_amount: f64,
        slippage: f64,
    ) -> Result<Vec<u8>, TradeError>;

    /// Build and sign a sell transaction for `mint`, selling a fraction of
    /// the held balance given by `multiplier` (1.0 = everything).
    async fn build_sell_transaction(
        &self,
        mint: &str,
        multiplier: f64,
    ) -> Result<Vec<u8>, TradeError>;

    /// List the most recently created tokens, newest first, up to `limit`.
    async fn list_recent_tokens(&self, limit: usize) -> Result<Vec<RecentToken>, TradeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TradeError::ApiError("status 500".to_string());
        assert!(err.to_string().contains("API request failed"));

        let err = TradeError::InvalidParameters("negative amount".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[test]
    fn test_recent_token_extra_fields_roundtrip() {
        let json = r#"{
            "mint": "So11111111111111111111111111111111111111112",
            "name": "Wrapped SOL",
            "symbol": "WSOL",
            "created_timestamp": 1700000000000,
            "usd_market_cap": 12345.6,
            "creator": "abc",
            "complete": false
        }"#;

        let token: RecentToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "WSOL");
        assert_eq!(
            token.extra.get("creator").and_then(|v| v.as_str()),
            Some("abc")
        );

        // Unknown fields survive re-serialization
        let out = serde_json::to_value(&token).unwrap();
        assert_eq!(out["complete"], false);
    }

    #[test]
    fn test_recent_token_missing_optional_fields() {
        let token: RecentToken = serde_json::from_str(r#"{"mint": "abc"}"#).unwrap();
        assert_eq!(token.name, "");
        assert_eq!(token.created_timestamp, 0);
    }
}
