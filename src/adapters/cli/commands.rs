//! CLI Command Definitions
//!
//! Argument parsing for the pump-bridge CLI. Numeric arguments are parsed
//! by clap at the boundary, so a malformed amount is rejected with an
//! error instead of being forwarded to the trading backend.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::adapter::DEFAULT_RECENT_LIMIT;

/// pump-bridge - Transaction-request CLI for pump.fun
#[derive(Parser, Debug)]
#[command(
    name = "pump-bridge",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Build signed pump.fun buy/sell transactions and list recent launches",
    long_about = "pump-bridge forwards buy, sell and recent-token requests to the \
                  pump.fun trade APIs, signs the returned transactions locally, and \
                  prints a single JSON object on stdout."
)]
pub struct CliApp {
    /// The action to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available actions
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a signed buy transaction
    Buy(BuyCmd),

    /// Build a signed sell transaction
    Sell(SellCmd),

    /// List recently created tokens
    Recent(RecentCmd),
}

/// Build a buy transaction
#[derive(Parser, Debug)]
pub struct BuyCmd {
    /// Token mint address
    #[arg(value_name = "MINT")]
    pub mint: String,

    /// Amount of SOL to spend
    #[arg(value_name = "SOL_AMOUNT")]
    pub sol_amount: f64,

    /// Slippage tolerance in percent
    #[arg(value_name = "SLIPPAGE")]
    pub slippage: f64,

    /// Base64-encoded secret key of the signing wallet
    #[arg(value_name = "SECRET_KEY_BASE64")]
    pub secret_key: String,
}

/// Build a sell transaction
///
/// Takes the same positional shape as buy. Sells are sized by the
/// multiplier, so the amount slot is accepted but unused.
#[derive(Parser, Debug)]
pub struct SellCmd {
    /// Token mint address
    #[arg(value_name = "MINT")]
    pub mint: String,

    /// Unused for sells; present so buy and sell share one argv shape
    #[arg(value_name = "AMOUNT")]
    pub amount: String,

    /// Fraction of the held balance to sell (1.0 = everything)
    #[arg(value_name = "MULTIPLIER")]
    pub multiplier: f64,

    /// Base64-encoded secret key of the signing wallet
    #[arg(value_name = "SECRET_KEY_BASE64")]
    pub secret_key: String,
}

/// List recent tokens (read-only, no wallet)
#[derive(Parser, Debug)]
pub struct RecentCmd {
    /// Maximum number of tokens to list
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_RECENT_LIMIT)]
    pub limit: usize,

    /// Extra positional arguments are accepted and ignored, for callers
    /// that pass the full buy/sell argument list
    #[arg(value_name = "IGNORED", hide = true, num_args = 0..)]
    pub ignored: Vec<String>,
}
