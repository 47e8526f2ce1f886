use std::fmt;

use serde::Deserialize;

use crate::utils::helper::wei_to_eth;

/// Symbol of the chain's native currency
pub const NATIVE_SYMBOL: &str = "ETH";

/// One displayed balance line. The amount stays a decimal string so large
/// token amounts survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    pub symbol: String,
    pub amount: String,
}

impl BalanceEntry {
    /// Create a new balance entry
    pub fn new(symbol: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            amount: amount.into(),
        }
    }

    /// Native balance entry from a raw wei amount (whole ether, truncated)
    pub fn native(wei: u128) -> Self {
        Self::new(NATIVE_SYMBOL, wei_to_eth(wei))
    }

    /// Check if this is the native currency entry
    pub fn is_native(&self) -> bool {
        self.symbol == NATIVE_SYMBOL
    }
}

impl fmt::Display for BalanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.symbol, self.amount)
    }
}

/// Token balance as reported by the aggregation service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub token_symbol: String,
    pub balance: String,
}

impl From<TokenBalance> for BalanceEntry {
    fn from(token: TokenBalance) -> Self {
        BalanceEntry::new(token.token_symbol, token.balance)
    }
}
