//! Core traits for the portfolio viewer

pub mod data_provider;
pub mod event_handler;

// Re-export for convenience
pub use data_provider::BalanceDataProvider;
pub use event_handler::PortfolioEventHandler;
