//! Data models for the portfolio viewer

pub mod wallet;
pub mod token;
pub mod portfolio;

// Re-export for convenience
pub use wallet::{is_valid_wallet, WalletAddress};
pub use token::{BalanceEntry, TokenBalance, NATIVE_SYMBOL};
pub use portfolio::{LoadStatus, PortfolioLoad, PortfolioResult, StatusStyle, StatusUpdate};
