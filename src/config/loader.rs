//! Configuration Loader
//!
//! Loads endpoint configuration from a TOML file, falling back to built-in
//! defaults when no file is given. Endpoints are resolved here and passed
//! into the client constructors explicitly, so tests can point the bridge
//! at alternate backends without touching globals.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::pump::client::PumpClientConfig;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub solana: SolanaSection,
    #[serde(default)]
    pub pump: PumpSection,
}

/// Solana RPC configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaSection {
    /// RPC endpoint used to fetch blockhashes before signing
    pub rpc_url: String,
    /// Commitment level: "processed", "confirmed", "finalized"
    pub commitment: String,
}

impl Default for SolanaSection {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: "confirmed".to_string(),
        }
    }
}

impl SolanaSection {
    /// Get RPC URL with environment variable override
    /// Checks PUMP_RPC_URL env var first, falls back to config value
    pub fn get_rpc_url(&self) -> String {
        std::env::var("PUMP_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }
}

/// Pump.fun API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PumpSection {
    /// Trade API endpoint (returns unsigned transactions)
    pub trade_api_url: String,
    /// Frontend API base URL (coin listings)
    pub frontend_api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Priority fee attached to trades, in SOL
    pub priority_fee_sol: f64,
    /// Slippage tolerance for sells, in percent
    pub sell_slippage: f64,
    /// Liquidity pool to trade against
    pub pool: String,
}

impl Default for PumpSection {
    fn default() -> Self {
        let defaults = PumpClientConfig::default();
        Self {
            trade_api_url: defaults.trade_api_url,
            frontend_api_url: defaults.frontend_api_url,
            timeout_secs: defaults.timeout.as_secs(),
            priority_fee_sol: defaults.priority_fee_sol,
            sell_slippage: defaults.sell_slippage,
            pool: defaults.pool,
        }
    }
}

impl PumpSection {
    /// Get trade API URL with PUMP_TRADE_API_URL env override
    pub fn get_trade_api_url(&self) -> String {
        std::env::var("PUMP_TRADE_API_URL").unwrap_or_else(|_| self.trade_api_url.clone())
    }

    /// Get frontend API URL with PUMP_FRONTEND_API_URL env override
    pub fn get_frontend_api_url(&self) -> String {
        std::env::var("PUMP_FRONTEND_API_URL").unwrap_or_else(|_| self.frontend_api_url.clone())
    }

    /// Resolve into the client configuration, applying env overrides
    pub fn to_client_config(&self) -> PumpClientConfig {
        PumpClientConfig {
            trade_api_url: self.get_trade_api_url(),
            frontend_api_url: self.get_frontend_api_url(),
            timeout: Duration::from_secs(self.timeout_secs),
            priority_fee_sol: self.priority_fee_sol,
            sell_slippage: self.sell_slippage,
            pool: self.pool.clone(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from an optional TOML file
///
/// `None` yields the built-in defaults; env overrides are applied later,
/// when sections are resolved into client configurations.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        }
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "solana.rpc_url must not be empty".to_string(),
            ));
        }
        if self.pump.trade_api_url.is_empty() || self.pump.frontend_api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "pump API URLs must not be empty".to_string(),
            ));
        }
        if self.pump.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "pump.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.pump.priority_fee_sol < 0.0 {
            return Err(ConfigError::ValidationError(
                "pump.priority_fee_sol must not be negative".to_string(),
            ));
        }
        if !["processed", "confirmed", "finalized"].contains(&self.solana.commitment.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown commitment level '{}'",
                self.solana.commitment
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_no_file() {
        let config = load_config(None).unwrap();
        assert!(config.solana.rpc_url.contains("mainnet"));
        assert_eq!(config.pump.pool, "pump");
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [solana]
            rpc_url = "http://localhost:8899"
            commitment = "processed"

            [pump]
            trade_api_url = "http://localhost:9999/trade"
            frontend_api_url = "http://localhost:9999"
            timeout_secs = 5
            priority_fee_sol = 0.001
            sell_slippage = 5.0
            pool = "pump"
            "#
        )
        .unwrap();
        file.flush().unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.solana.rpc_url, "http://localhost:8899");
        assert_eq!(config.pump.timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [solana]
            rpc_url = "http://localhost:8899"
            commitment = "confirmed"
            "#
        )
        .unwrap();
        file.flush().unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.solana.rpc_url, "http://localhost:8899");
        assert!(config.pump.trade_api_url.contains("pumpportal"));
    }

    #[test]
    fn test_invalid_commitment_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [solana]
            rpc_url = "http://localhost:8899"
            commitment = "instant"
            "#
        )
        .unwrap();
        file.flush().unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "this is not toml [").unwrap();
        file.flush().unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Some(Path::new("/nonexistent/bridge.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_client_config_resolution() {
        let section = PumpSection::default();
        let client_config = section.to_client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(30));
    }
}
