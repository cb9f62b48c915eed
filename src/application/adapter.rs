//! Trade Request Adapter
//!
//! Core of the bridge: a validated `TradeRequest` goes in, a JSON-ready
//! `TradeOutput` comes out. All domain work happens behind the
//! `TradingPort`; the only transformation applied here is base64-encoding
//! the transaction bytes, so the emitted string decodes back to exactly
//! what the backend produced.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::adapters::solana::WalletManager;
use crate::ports::{RecentToken, TradeError, TradingPort};

/// Default number of recent tokens to list
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// A validated trade request
///
/// Constructed through the checked constructors so malformed input is
/// rejected at the boundary instead of being forwarded to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeRequest {
    Buy {
        mint: String,
        sol_amount: f64,
        slippage: f64,
    },
    Sell {
        mint: String,
        multiplier: f64,
    },
    Recent {
        limit: usize,
    },
}

impl TradeRequest {
    /// Build a buy request, validating mint and numeric bounds
    pub fn buy(mint: &str, sol_amount: f64, slippage: f64) -> Result<Self, TradeError> {
        validate_mint(mint)?;
        if !sol_amount.is_finite() || sol_amount <= 0.0 {
            return Err(TradeError::InvalidParameters(format!(
                "SOL amount must be positive, got {}",
                sol_amount
            )));
        }
        if !slippage.is_finite() || slippage < 0.0 {
            return Err(TradeError::InvalidParameters(format!(
                "slippage must be non-negative, got {}",
                slippage
            )));
        }
        Ok(Self::Buy {
            mint: mint.to_string(),
            sol_amount,
            slippage,
        })
    }

    /// Build a sell request, validating mint and multiplier
    pub fn sell(mint: &str, multiplier: f64) -> Result<Self, TradeError> {
        validate_mint(mint)?;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(TradeError::InvalidParameters(format!(
                "multiplier must be positive, got {}",
                multiplier
            )));
        }
        Ok(Self::Sell {
            mint: mint.to_string(),
            multiplier,
        })
    }

    /// Build a recent-tokens request
    pub fn recent(limit: usize) -> Result<Self, TradeError> {
        if limit == 0 {
            return Err(TradeError::InvalidParameters(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(Self::Recent { limit })
    }
}

fn validate_mint(mint: &str) -> Result<(), TradeError> {
    Pubkey::from_str(mint)
        .map(|_| ())
        .map_err(|e| TradeError::InvalidParameters(format!("invalid mint '{}': {}", mint, e)))
}

/// Result envelope written to stdout as a single JSON object
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TradeOutput {
    /// Signed transaction, base64-encoded: `{"serialized_tx": "..."}`
    Transaction { serialized_tx: String },
    /// Recent token listing: `{"tokens": [...]}`
    Tokens { tokens: Vec<RecentToken> },
}

impl TradeOutput {
    /// Render the envelope as a compact JSON string
    pub fn to_json(&self) -> Result<String, TradeError> {
        serde_json::to_string(self).map_err(|e| TradeError::ApiError(e.to_string()))
    }
}

/// Execute a trade request against a trading port
pub async fn execute<P: TradingPort + ?Sized>(
    port: &P,
    request: TradeRequest,
) -> Result<TradeOutput, TradeError> {
    match request {
        TradeRequest::Buy {
            mint,
            sol_amount,
            slippage,
        } => {
            let bytes = port.build_buy_transaction(&mint, sol_amount, slippage).await?;
            tracing::info!(mint = %mint, size = bytes.len(), "buy transaction built");
            Ok(TradeOutput::Transaction {
                serialized_tx: BASE64.encode(bytes),
            })
        }
        TradeRequest::Sell { mint, multiplier } => {
            let bytes = port.build_sell_transaction(&mint, multiplier).await?;
            tracing::info!(mint = %mint, size = bytes.len(), "sell transaction built");
            Ok(TradeOutput::Transaction {
                serialized_tx: BASE64.encode(bytes),
            })
        }
        TradeRequest::Recent { limit } => {
            let tokens = port.list_recent_tokens(limit).await?;
            tracing::info!(count = tokens.len(), "recent tokens fetched");
            Ok(TradeOutput::Tokens { tokens })
        }
    }
}

/// Run a buy or sell in the documented order: decode the wallet from the
/// caller's secret, then connect to the backend, then execute.
///
/// A malformed secret fails here, before `connect` is ever invoked, so no
/// network client is even constructed for an undecodable credential.
pub async fn run_signed_trade<P, F>(
    secret_key_base64: &str,
    request: TradeRequest,
    connect: F,
) -> Result<TradeOutput, TradeError>
where
    P: TradingPort,
    F: FnOnce(WalletManager) -> Result<P, TradeError>,
{
    let wallet = WalletManager::from_base64(secret_key_base64)
        .map_err(|e| TradeError::WalletError(e.to_string()))?;
    tracing::info!(wallet = %wallet.public_key(), "wallet decoded");

    let port = connect(wallet)?;
    execute(&port, request).await
}
