use chrono::{DateTime, Utc};

use super::token::BalanceEntry;
use super::wallet::WalletAddress;
use crate::error::FetchError;

/// Ordered balances: native entry first (when present), then tokens in the
/// order the aggregation service returned them. No dedup by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioResult {
    entries: Vec<BalanceEntry>,
}

impl PortfolioResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the two branches of a load
    pub fn merge(native: Option<BalanceEntry>, tokens: Vec<BalanceEntry>) -> Self {
        let mut entries = Vec::with_capacity(tokens.len() + 1);
        entries.extend(native);
        entries.extend(tokens);
        Self { entries }
    }

    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BalanceEntry> {
        self.entries.iter()
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a PortfolioResult {
    type Item = &'a BalanceEntry;
    type IntoIter = std::slice::Iter<'a, BalanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Where a submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    PartialSuccess,
    Error,
}

impl LoadStatus {
    /// Derive the overall status from the two branch outcomes
    pub fn from_branches(native_ok: bool, tokens_ok: bool) -> Self {
        match (native_ok, tokens_ok) {
            (true, true) => LoadStatus::Success,
            (false, false) => LoadStatus::Error,
            _ => LoadStatus::PartialSuccess,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadStatus::Error)
    }
}

/// Visual class of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Info,
    Loading,
    Success,
    Error,
}

impl StatusStyle {
    pub fn as_class(&self) -> &'static str {
        match self {
            StatusStyle::Info => "info",
            StatusStyle::Loading => "loading",
            StatusStyle::Success => "success",
            StatusStyle::Error => "error",
        }
    }
}

/// Status text handed to the UI boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub message: String,
    pub style: StatusStyle,
}

impl StatusUpdate {
    pub fn new(message: impl Into<String>, style: StatusStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn idle() -> Self {
        Self::new("Enter a wallet address", StatusStyle::Info)
    }

    pub fn loading() -> Self {
        Self::new("fetching wallet data...", StatusStyle::Loading)
    }

    pub fn invalid_address() -> Self {
        Self::new("Invalid wallet address", StatusStyle::Error)
    }
}

/// Outcome of one load: the merged balances plus what happened on each side
#[derive(Debug, Clone)]
pub struct PortfolioLoad {
    pub wallet: WalletAddress,
    pub balances: PortfolioResult,
    pub status: LoadStatus,
    pub native: Result<BalanceEntry, FetchError>,
    pub tokens: Result<Vec<BalanceEntry>, FetchError>,
    pub loaded_at: DateTime<Utc>,
}

impl PortfolioLoad {
    /// Combine branch outcomes. A failed branch contributes nothing.
    pub fn from_branches(
        wallet: WalletAddress,
        native: Result<BalanceEntry, FetchError>,
        tokens: Result<Vec<BalanceEntry>, FetchError>,
    ) -> Self {
        let status = LoadStatus::from_branches(native.is_ok(), tokens.is_ok());
        let balances = PortfolioResult::merge(
            native.as_ref().ok().cloned(),
            tokens.as_ref().cloned().unwrap_or_default(),
        );

        Self {
            wallet,
            balances,
            status,
            native,
            tokens,
            loaded_at: Utc::now(),
        }
    }

    /// Human readable status for this load
    pub fn status_update(&self) -> StatusUpdate {
        match (&self.native, &self.tokens) {
            (Ok(_), Ok(_)) => StatusUpdate::new("Wallet data loaded", StatusStyle::Success),
            (Ok(_), Err(e)) => StatusUpdate::new(
                format!("ETH balance loaded; token balances unavailable: {}", e),
                StatusStyle::Success,
            ),
            (Err(e), Ok(_)) => StatusUpdate::new(
                format!("Token balances loaded; ETH balance unavailable: {}", e),
                StatusStyle::Success,
            ),
            (Err(native), Err(tokens)) => StatusUpdate::new(
                format!(
                    "Failed to load wallet data (ETH balance: {}; token balances: {})",
                    native, tokens
                ),
                StatusStyle::Error,
            ),
        }
    }
}
