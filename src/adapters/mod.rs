//! External Adapters
//!
//! Concrete implementations at the edges: the clap CLI surface, the
//! pump.fun HTTP client, and the Solana connection/wallet primitives.

pub mod cli;
pub mod pump;
pub mod solana;
