//! Application Layer
//!
//! The adapter core: typed trade requests, dispatch to the trading port,
//! and JSON envelope construction.

pub mod adapter;

pub use adapter::{execute, run_signed_trade, TradeOutput, TradeRequest};
