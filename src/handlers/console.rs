use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::portfolio::{PortfolioResult, StatusStyle, StatusUpdate};
use crate::traits::event_handler::PortfolioEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioEventHandler for ConsoleEventHandler {
    async fn handle_status(&self, status: &StatusUpdate) {
        match status.style {
            StatusStyle::Error => warn!("[{}] {}", status.style.as_class(), status.message),
            _ => info!("[{}] {}", status.style.as_class(), status.message),
        }
    }

    async fn handle_balances(&self, balances: &PortfolioResult) {
        if balances.is_empty() {
            info!("No balances to show");
            return;
        }

        info!("BALANCES ({}):", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        info!("{}", "-".repeat(40));
        for entry in balances {
            info!("  {}", entry);
        }
        info!("{}", "-".repeat(40));
    }
}
