//! Pump.fun Adapter
//!
//! `TradingPort` implementation backed by the pump.fun HTTP APIs:
//!
//! - the trade API builds an unsigned transaction for a buy or sell, which
//!   this adapter re-anchors to a fresh blockhash and signs locally;
//! - the frontend API serves the recently-created coin list.
//!
//! The signing keypair never leaves the process; only the local signature
//! is applied to what the API returns.

pub mod client;
pub mod types;

pub use client::{PumpClient, PumpClientConfig};
pub use types::{TradeAction, TradeAmount, TradeRequestBody};
