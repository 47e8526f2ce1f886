use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::token::TokenBalance;
use crate::models::wallet::WalletAddress;
use crate::providers::jsonrpc::{decode_response, JsonRpcRequest};
use crate::traits::data_provider::BalanceDataProvider;
use crate::utils::helper::{format_address, parse_quantity};

/// Only chain queried on the aggregation service
pub const TOKEN_BLOCKCHAIN: &str = "eth";

#[derive(Debug, Deserialize)]
struct AccountBalanceResult {
    assets: Vec<TokenBalance>,
}

/// JSON-RPC data provider backed by a node endpoint and Ankr's
/// multichain balance API
pub struct AnkrRpcProvider {
    client: Client,
    eth_url: String,
    multichain_url: String,
    next_id: AtomicU64,
}

impl AnkrRpcProvider {
    /// Create a new provider from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a provider reusing an existing HTTP client
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            eth_url: config.eth_endpoint(),
            multichain_url: config.multichain_endpoint(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call<P, R>(&self, url: &str, method: &str, params: P) -> Result<R, FetchError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(method, params, id);

        debug!("JSON-RPC call {} (id {})", method, id);

        let response = self.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("{} returned HTTP status {}", method, status)));
        }

        let body = response.text().await?;
        decode_response(&body)
    }
}

#[async_trait]
impl BalanceDataProvider for AnkrRpcProvider {
    async fn fetch_native_balance(&self, wallet: &WalletAddress) -> Result<u128, FetchError> {
        let raw: String = self
            .call(&self.eth_url, "eth_getBalance", json!([wallet.as_str(), "latest"]))
            .await?;
        let wei = parse_quantity(&raw)?;

        debug!("Native balance for {}: {} wei", format_address(wallet), wei);
        Ok(wei)
    }

    async fn fetch_token_balances(&self, wallet: &WalletAddress) -> Result<Vec<TokenBalance>, FetchError> {
        let result: AccountBalanceResult = self
            .call(
                &self.multichain_url,
                "ankr_getAccountBalance",
                json!({
                    "walletAddress": wallet.as_str(),
                    "blockchain": TOKEN_BLOCKCHAIN,
                }),
            )
            .await?;

        info!("Found {} token balances for {}", result.assets.len(), format_address(wallet));
        Ok(result.assets)
    }
}
