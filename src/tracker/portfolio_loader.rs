//src/tracker/portfolio_loader.rs
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::models::{
    portfolio::PortfolioLoad,
    token::BalanceEntry,
    wallet::WalletAddress,
};
use crate::traits::data_provider::BalanceDataProvider;
use crate::utils::helper::format_address;

/// Loads native and token balances for a wallet and merges them
#[derive(Clone)]
pub struct PortfolioLoader {
    data_provider: Arc<dyn BalanceDataProvider>,
}

impl PortfolioLoader {
    /// Create a new portfolio loader
    pub fn new(data_provider: Arc<dyn BalanceDataProvider>) -> Self {
        Self { data_provider }
    }

    /// Fetch both sides concurrently and merge whatever succeeded.
    ///
    /// Neither branch cancels the other and branch failures stay inside the
    /// returned [`PortfolioLoad`].
    pub async fn load(&self, wallet: &WalletAddress) -> PortfolioLoad {
        let short = format_address(wallet);
        info!("Loading portfolio for {}", short);

        let (native, tokens) = tokio::join!(self.native_branch(wallet), self.token_branch(wallet));

        if let Err(e) = &native {
            warn!("ETH balance failed for {}: {}", short, e);
        }
        if let Err(e) = &tokens {
            warn!("Token balances failed for {}: {}", short, e);
        }

        let load = PortfolioLoad::from_branches(wallet.clone(), native, tokens);
        info!("Portfolio for {}: {:?} with {} entries", short, load.status, load.balances.len());
        load
    }

    async fn native_branch(&self, wallet: &WalletAddress) -> Result<BalanceEntry, FetchError> {
        let wei = self.data_provider.fetch_native_balance(wallet).await?;
        let entry = BalanceEntry::native(wei);
        debug!("Native entry: {}", entry);
        Ok(entry)
    }

    async fn token_branch(&self, wallet: &WalletAddress) -> Result<Vec<BalanceEntry>, FetchError> {
        let tokens = self.data_provider.fetch_token_balances(wallet).await?;
        Ok(tokens.into_iter().map(BalanceEntry::from).collect())
    }
}
