use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::token::TokenBalance;
use crate::models::wallet::WalletAddress;

/// Core trait for fetching balance data for a wallet
#[async_trait]
pub trait BalanceDataProvider: Send + Sync {
    /// Fetch the native balance in wei at the latest block
    async fn fetch_native_balance(&self, wallet: &WalletAddress) -> Result<u128, FetchError>;

    /// Fetch token balances, already in display units, in service order
    async fn fetch_token_balances(&self, wallet: &WalletAddress) -> Result<Vec<TokenBalance>, FetchError>;
}
