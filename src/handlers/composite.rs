use std::sync::Arc;
use async_trait::async_trait;

use crate::models::portfolio::{PortfolioResult, StatusUpdate};
use crate::traits::event_handler::PortfolioEventHandler;

/// Forwards every status and balance update to each inner handler, in
/// registration order
#[derive(Default)]
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn PortfolioEventHandler>>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration
    pub fn with(mut self, handler: Arc<dyn PortfolioEventHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

#[async_trait]
impl PortfolioEventHandler for CompositeEventHandler {
    async fn handle_status(&self, status: &StatusUpdate) {
        for handler in &self.handlers {
            handler.handle_status(status).await;
        }
    }

    async fn handle_balances(&self, balances: &PortfolioResult) {
        for handler in &self.handlers {
            handler.handle_balances(balances).await;
        }
    }
}
