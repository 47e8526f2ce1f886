//! Ethereum Portfolio Viewer Library
//!
//! Validates a wallet address, fetches its ETH balance and token balances
//! concurrently from two JSON-RPC services, and merges whatever succeeded
//! into one ordered balance list with a status line.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use error::{FetchError, InvalidAddressFormat};
pub use models::{
    wallet::{is_valid_wallet, WalletAddress},
    token::{BalanceEntry, TokenBalance},
    portfolio::{LoadStatus, PortfolioLoad, PortfolioResult, StatusStyle, StatusUpdate},
};
pub use traits::{
    data_provider::BalanceDataProvider,
    event_handler::PortfolioEventHandler,
};
pub use providers::rpc_provider::AnkrRpcProvider;
pub use handlers::{
    console::ConsoleEventHandler,
    composite::CompositeEventHandler,
    plain_text::PlainTextEventHandler,
};
pub use tracker::{
    portfolio_loader::PortfolioLoader,
    session::{PortfolioSession, SessionState, Submission},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
