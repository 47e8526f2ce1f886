use async_trait::async_trait;

use crate::models::portfolio::{PortfolioResult, StatusUpdate};

/// Receiver of display updates (status line and balance list)
#[async_trait]
pub trait PortfolioEventHandler: Send + Sync {
    /// Status text changed
    async fn handle_status(&self, status: &StatusUpdate);

    /// Balance list changed; called with an empty result when cleared
    async fn handle_balances(&self, balances: &PortfolioResult);
}
