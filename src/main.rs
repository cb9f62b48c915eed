//! pump-bridge - Transaction-Request CLI for pump.fun
//!
//! One invocation = one request: parse arguments, build the wallet and
//! connection, delegate to the pump.fun backend, print JSON on stdout.
//! Any failure prints to stderr and exits with code 1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pump_bridge::adapters::cli::{BuyCmd, CliApp, Command, RecentCmd, SellCmd};
use pump_bridge::adapters::pump::PumpClient;
use pump_bridge::adapters::solana::{SolanaClient, WalletManager};
use pump_bridge::application::{execute, run_signed_trade, TradeRequest};
use pump_bridge::config::{load_config, Config};
use pump_bridge::ports::TradeError;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (private RPC URLs go here)
    dotenvy::dotenv().ok();

    // try_parse so every CLI error exits 1, matching the rest of the
    // failure surface (clap's own exit code would be 2)
    let app = match CliApp::try_parse() {
        Ok(app) => app,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            eprintln!("Unknown action: expected one of buy, sell, recent");
            std::process::exit(1);
        }
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(app.verbose, app.debug)?;

    let config = load_config(app.config.as_deref()).context("Failed to load configuration")?;

    match app.command {
        Command::Buy(cmd) => buy_command(cmd, &config).await,
        Command::Sell(cmd) => sell_command(cmd, &config).await,
        Command::Recent(cmd) => recent_command(cmd, &config).await,
    }
}

/// Diagnostics go to stderr; stdout carries only the JSON result
fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn buy_command(cmd: BuyCmd, config: &Config) -> Result<()> {
    tracing::info!(mint = %cmd.mint, "building buy transaction");

    let request = TradeRequest::buy(&cmd.mint, cmd.sol_amount, cmd.slippage)?;
    let output = run_signed_trade(&cmd.secret_key, request, |wallet| {
        trading_client(config, wallet)
    })
    .await?;

    println!("{}", output.to_json()?);
    Ok(())
}

async fn sell_command(cmd: SellCmd, config: &Config) -> Result<()> {
    // The amount slot only exists for the shared argv shape
    tracing::info!(mint = %cmd.mint, "building sell transaction");

    let request = TradeRequest::sell(&cmd.mint, cmd.multiplier)?;
    let output = run_signed_trade(&cmd.secret_key, request, |wallet| {
        trading_client(config, wallet)
    })
    .await?;

    println!("{}", output.to_json()?);
    Ok(())
}

async fn recent_command(cmd: RecentCmd, config: &Config) -> Result<()> {
    if !cmd.ignored.is_empty() {
        tracing::debug!(count = cmd.ignored.len(), "ignoring trailing arguments");
    }

    // Read-only path: no wallet, no RPC connection
    let request = TradeRequest::recent(cmd.limit)?;
    let client = PumpClient::read_only(config.pump.to_client_config())?;

    let output = execute(&client, request).await?;
    println!("{}", output.to_json()?);
    Ok(())
}

fn trading_client(config: &Config, wallet: WalletManager) -> Result<PumpClient, TradeError> {
    let solana = SolanaClient::with_commitment(
        config.solana.get_rpc_url(),
        &config.solana.commitment,
    )
    .map_err(|e| TradeError::RpcError(e.to_string()))?;

    PumpClient::with_signer(config.pump.to_client_config(), solana, wallet)
}
