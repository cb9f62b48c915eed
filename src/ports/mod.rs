//! Port Abstractions
//!
//! Trait boundary between the CLI adapter core and the external trading
//! backend. The real implementation lives in `adapters::pump`; tests use
//! the recording mock from `mocks`.

pub mod mocks;
pub mod trading;

pub use trading::{RecentToken, TradeError, TradingPort};
