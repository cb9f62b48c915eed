//! pump-bridge - Transaction-Request CLI for pump.fun
//!
//! Forwards three actions (buy, sell, list recent tokens) to the pump.fun
//! trade APIs, signs the returned transactions locally, and prints a single
//! JSON object on stdout.
//!
//! # Modules
//!
//! - `ports`: Trait boundary to the trading backend, plus a recording mock
//! - `application`: Typed trade requests and the JSON result envelope
//! - `adapters`: External implementations (pump.fun HTTP, Solana, CLI)
//! - `config`: Endpoint configuration with TOML + env overrides

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
