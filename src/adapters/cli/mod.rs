//! CLI Adapter
//!
//! Command-line surface for the bridge. Three subcommands map one-to-one
//! onto the trading port operations.

pub mod commands;

pub use commands::{BuyCmd, CliApp, Command, RecentCmd, SellCmd};
