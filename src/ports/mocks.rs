use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::trading::{RecentToken, TradeError, TradingPort};

/// Mock trading port that records calls and allows controlled responses
///
/// Clones share the call log, so a test can hand a clone to the code under
/// test and inspect the calls through its own handle afterwards.
#[derive(Debug, Default, Clone)]
pub struct MockTradingPort {
    calls: Arc<Mutex<Vec<String>>>,
    transaction: Vec<u8>,
    tokens: Vec<RecentToken>,
    fail_with: Option<String>,
}

impl MockTradingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the transaction bytes returned by buy/sell
    pub fn with_transaction(mut self, bytes: Vec<u8>) -> Self {
        self.transaction = bytes;
        self
    }

    /// Builder method to set the token list returned by list_recent_tokens
    pub fn with_tokens(mut self, tokens: Vec<RecentToken>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Builder method to make every operation fail with an API error
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), TradeError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(msg) => Err(TradeError::ApiError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TradingPort for MockTradingPort {
    async fn build_buy_transaction(
        &self,
        mint: &str,
        sol_amount: f64,
        slippage: f64,
    ) -> Result<Vec<u8>, TradeError> {
        self.record(format!("buy:{}:{}:{}", mint, sol_amount, slippage))?;
        Ok(self.transaction.clone())
    }

    async fn build_sell_transaction(
        &self,
        mint: &str,
        multiplier: f64,
    ) -> Result<Vec<u8>, TradeError> {
        self.record(format!("sell:{}:{}", mint, multiplier))?;
        Ok(self.transaction.clone())
    }

    async fn list_recent_tokens(&self, limit: usize) -> Result<Vec<RecentToken>, TradeError> {
        self.record(format!("recent:{}", limit))?;
        Ok(self.tokens.iter().take(limit).cloned().collect())
    }
}
