//! Configuration
//!
//! Endpoint and trade settings, loaded from an optional TOML file with
//! environment variable overrides.

pub mod loader;

pub use loader::{load_config, Config, ConfigError, PumpSection, SolanaSection};
