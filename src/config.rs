// Configuration loading and settings
use std::env;

pub const DEFAULT_ETH_RPC_URL: &str = "https://rpc.ankr.com/eth";
pub const DEFAULT_MULTICHAIN_RPC_URL: &str = "https://rpc.ankr.com/multichain";

#[derive(Debug, Clone)]
pub struct Config {
    pub eth_rpc_url: String,
    pub multichain_rpc_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config {
            eth_rpc_url: env::var("ETH_RPC_URL").unwrap_or_else(|_| DEFAULT_ETH_RPC_URL.to_string()),
            multichain_rpc_url: env::var("MULTICHAIN_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_MULTICHAIN_RPC_URL.to_string()),
            api_key: env::var("ANKR_API_KEY").ok().filter(|key| !key.trim().is_empty()),
        };

        for url in [&config.eth_rpc_url, &config.multichain_rpc_url] {
            reqwest::Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid RPC URL {}: {}", url, e))?;
        }

        Ok(config)
    }

    /// Config pointing both endpoints at explicit URLs, without an API key
    pub fn with_urls(eth_rpc_url: impl Into<String>, multichain_rpc_url: impl Into<String>) -> Self {
        Self {
            eth_rpc_url: eth_rpc_url.into(),
            multichain_rpc_url: multichain_rpc_url.into(),
            api_key: None,
        }
    }

    /// Native balance endpoint, with the API key appended when set
    pub fn eth_endpoint(&self) -> String {
        self.keyed(&self.eth_rpc_url)
    }

    /// Token aggregation endpoint, with the API key appended when set
    pub fn multichain_endpoint(&self) -> String {
        self.keyed(&self.multichain_rpc_url)
    }

    fn keyed(&self, base: &str) -> String {
        match &self.api_key {
            Some(key) => format!("{}/{}", base.trim_end_matches('/'), key.trim()),
            None => base.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_urls(DEFAULT_ETH_RPC_URL, DEFAULT_MULTICHAIN_RPC_URL)
    }
}
