use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::warn;

use crate::models::portfolio::{PortfolioResult, StatusUpdate};
use crate::traits::event_handler::PortfolioEventHandler;

/// Writes the status line and balance list as plain text, one item per line
pub struct PlainTextEventHandler<W> {
    out: Mutex<W>,
}

impl PlainTextEventHandler<Stdout> {
    /// Handler writing to the process's stdout
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> PlainTextEventHandler<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn write(&self, text: &str) {
        let mut out = self.out.lock().await;
        if let Err(e) = out.write_all(text.as_bytes()).await {
            warn!("Failed to write output: {}", e);
            return;
        }
        if let Err(e) = out.flush().await {
            warn!("Failed to flush output: {}", e);
        }
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> PortfolioEventHandler for PlainTextEventHandler<W> {
    async fn handle_status(&self, status: &StatusUpdate) {
        self.write(&format!("[{}] {}\n", status.style.as_class(), status.message)).await;
    }

    async fn handle_balances(&self, balances: &PortfolioResult) {
        // Clearing the list prints nothing
        if balances.is_empty() {
            return;
        }
        let text: String = balances.iter().map(|entry| format!("  {}\n", entry)).collect();
        self.write(&text).await;
    }
}
