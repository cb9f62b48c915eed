//! Pump.fun API Client
//!
//! HTTP client for the pump.fun trade and frontend APIs. Buy/sell requests
//! fetch an unsigned transaction from the trade API, refresh its blockhash
//! against the configured RPC endpoint, sign it with the invocation's
//! wallet, and hand back the serialized bytes. The recent-token listing is
//! read-only and works without a wallet or RPC connection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use solana_sdk::transaction::VersionedTransaction;

use crate::adapters::solana::{SolanaClient, WalletManager};
use crate::ports::{RecentToken, TradeError, TradingPort};

use super::types::{TradeAction, TradeAmount, TradeRequestBody};

/// Pump.fun API client configuration
#[derive(Debug, Clone)]
pub struct PumpClientConfig {
    /// Trade API endpoint (returns unsigned transactions)
    pub trade_api_url: String,
    /// Frontend API base URL (coin listings)
    pub frontend_api_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Priority fee attached to trades, in SOL
    pub priority_fee_sol: f64,
    /// Slippage tolerance for sells, in percent (the sell operation takes
    /// no slippage argument of its own)
    pub sell_slippage: f64,
    /// Liquidity pool to trade against
    pub pool: String,
}

impl Default for PumpClientConfig {
    fn default() -> Self {
        Self {
            trade_api_url: "https://pumpportal.fun/api/trade-local".to_string(),
            frontend_api_url: "https://frontend-api.pump.fun".to_string(),
            timeout: Duration::from_secs(30),
            priority_fee_sol: 0.0005,
            sell_slippage: 10.0,
            pool: "pump".to_string(),
        }
    }
}

/// Wallet + RPC pair needed for the signing paths
struct TradeSigner {
    solana: SolanaClient,
    wallet: WalletManager,
}

/// Pump.fun trading client
pub struct PumpClient {
    config: PumpClientConfig,
    http: Client,
    signer: Option<TradeSigner>,
}

impl PumpClient {
    /// Create a client able to build and sign trades
    pub fn with_signer(
        config: PumpClientConfig,
        solana: SolanaClient,
        wallet: WalletManager,
    ) -> Result<Self, TradeError> {
        Self::build(config, Some(TradeSigner { solana, wallet }))
    }

    /// Create a read-only client (recent-token listing only)
    pub fn read_only(config: PumpClientConfig) -> Result<Self, TradeError> {
        Self::build(config, None)
    }

    fn build(config: PumpClientConfig, signer: Option<TradeSigner>) -> Result<Self, TradeError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TradeError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http,
            signer,
        })
    }

    fn signer(&self) -> Result<&TradeSigner, TradeError> {
        self.signer
            .as_ref()
            .ok_or_else(|| TradeError::SigningError("no wallet attached to this client".into()))
    }

    /// POST a trade request and return the unsigned transaction bytes
    async fn request_unsigned_transaction(
        &self,
        body: &TradeRequestBody,
    ) -> Result<Vec<u8>, TradeError> {
        let response = self
            .http
            .post(&self.config.trade_api_url)
            .json(body)
            .send()
            .await
            .map_err(|e| TradeError::ApiError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TradeError::ApiError(format!(
                "trade API returned {}: {}",
                status, detail
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TradeError::ApiError(e.to_string()))?;

        if bytes.is_empty() {
            return Err(TradeError::ApiError(
                "trade API returned an empty transaction".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }

    /// Re-anchor the unsigned transaction to a fresh blockhash and sign it
    async fn sign_and_serialize(&self, unsigned: &[u8]) -> Result<Vec<u8>, TradeError> {
        let signer = self.signer()?;

        let transaction: VersionedTransaction = bincode::deserialize(unsigned)
            .map_err(|e| TradeError::ApiError(format!("undecodable transaction: {}", e)))?;

        let blockhash = signer
            .solana
            .get_latest_blockhash()
            .await
            .map_err(|e| TradeError::RpcError(e.to_string()))?;

        let mut message = transaction.message;
        message.set_recent_blockhash(blockhash);

        let signed = VersionedTransaction::try_new(message, &[signer.wallet.keypair()])
            .map_err(|e| TradeError::SigningError(e.to_string()))?;

        bincode::serialize(&signed).map_err(|e| TradeError::SigningError(e.to_string()))
    }

    async fn build_trade(&self, body: TradeRequestBody) -> Result<Vec<u8>, TradeError> {
        tracing::debug!(action = ?body.action, mint = %body.mint, "requesting unsigned transaction");
        let unsigned = self.request_unsigned_transaction(&body).await?;
        self.sign_and_serialize(&unsigned).await
    }
}

#[async_trait]
impl TradingPort for PumpClient {
    async fn build_buy_transaction(
        &self,
        mint: &str,
        sol_amount: f64,
        slippage: f64,
    ) -> Result<Vec<u8>, TradeError> {
        let signer = self.signer()?;
        let body = TradeRequestBody {
            public_key: signer.wallet.public_key(),
            action: TradeAction::Buy,
            mint: mint.to_string(),
            amount: TradeAmount::Sol(sol_amount),
            denominated_in_sol: "true".to_string(),
            slippage,
            priority_fee: self.config.priority_fee_sol,
            pool: self.config.pool.clone(),
        };

        self.build_trade(body).await
    }

    async fn build_sell_transaction(
        &self,
        mint: &str,
        multiplier: f64,
    ) -> Result<Vec<u8>, TradeError> {
        let signer = self.signer()?;
        let body = TradeRequestBody {
            public_key: signer.wallet.public_key(),
            action: TradeAction::Sell,
            mint: mint.to_string(),
            amount: TradeAmount::from_multiplier(multiplier),
            denominated_in_sol: "false".to_string(),
            slippage: self.config.sell_slippage,
            priority_fee: self.config.priority_fee_sol,
            pool: self.config.pool.clone(),
        };

        self.build_trade(body).await
    }

    async fn list_recent_tokens(&self, limit: usize) -> Result<Vec<RecentToken>, TradeError> {
        let url = format!("{}/coins", self.config.frontend_api_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("offset", "0".to_string()),
                ("limit", limit.to_string()),
                ("sort", "created_timestamp".to_string()),
                ("order", "DESC".to_string()),
                ("includeNsfw", "false".to_string()),
            ])
            .send()
            .await
            .map_err(|e| TradeError::ApiError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TradeError::ApiError(format!(
                "frontend API returned {}: {}",
                status, detail
            )));
        }

        response
            .json::<Vec<RecentToken>>()
            .await
            .map_err(|e| TradeError::ApiError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PumpClientConfig::default();
        assert!(config.trade_api_url.starts_with("https://"));
        assert_eq!(config.pool, "pump");
    }

    #[tokio::test]
    async fn test_read_only_client_refuses_to_sign() {
        let client = PumpClient::read_only(PumpClientConfig::default()).unwrap();

        let err = client
            .build_buy_transaction("Mint111", 0.5, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, TradeError::SigningError(_)));
    }
}
