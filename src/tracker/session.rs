use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::InvalidAddressFormat;
use crate::models::{
    portfolio::{LoadStatus, PortfolioLoad, PortfolioResult, StatusUpdate},
    wallet::WalletAddress,
};
use crate::tracker::portfolio_loader::PortfolioLoader;
use crate::traits::event_handler::PortfolioEventHandler;
use crate::utils::helper::format_address;

/// Display state owned by the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub wallet: Option<WalletAddress>,
    pub balances: PortfolioResult,
    pub status: LoadStatus,
}

/// What happened to a submission that passed validation
#[derive(Debug, Clone)]
pub enum Submission {
    /// Result was applied to the display state
    Applied(PortfolioLoad),
    /// A newer submission started before this one finished; result dropped
    Superseded,
}

impl Submission {
    pub fn is_applied(&self) -> bool {
        matches!(self, Submission::Applied(_))
    }
}

#[derive(Default)]
struct Guarded {
    generation: u64,
    state: SessionState,
}

/// Owns what is on screen and feeds it from wallet submissions.
///
/// Every valid submission clears the previous result before fetching.
/// State changes and the events announcing them happen under one lock,
/// together with a generation counter, so only the latest submission's
/// result ever reaches the display.
pub struct PortfolioSession {
    loader: PortfolioLoader,
    event_handler: Arc<dyn PortfolioEventHandler>,
    inner: Mutex<Guarded>,
}

impl PortfolioSession {
    /// Create a new session in the idle state
    pub fn new(loader: PortfolioLoader, event_handler: Arc<dyn PortfolioEventHandler>) -> Self {
        Self {
            loader,
            event_handler,
            inner: Mutex::new(Guarded::default()),
        }
    }

    /// Current display state
    pub async fn snapshot(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// Handle one wallet submission from the UI
    pub async fn submit(&self, input: &str) -> Result<Submission, InvalidAddressFormat> {
        let wallet = match WalletAddress::parse(input) {
            Ok(wallet) => wallet,
            Err(e) => {
                debug!("Rejected input: {}", e);
                let _guard = self.inner.lock().await;
                self.event_handler.handle_status(&StatusUpdate::invalid_address()).await;
                return Err(e);
            }
        };

        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = SessionState {
                wallet: Some(wallet.clone()),
                balances: PortfolioResult::new(),
                status: LoadStatus::Loading,
            };
            info!("Submission #{} for {}", inner.generation, format_address(&wallet));

            self.event_handler.handle_balances(&inner.state.balances).await;
            self.event_handler.handle_status(&StatusUpdate::loading()).await;
            inner.generation
        };

        let load = self.loader.load(&wallet).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            info!(
                "Dropping result of submission #{} for {}: superseded",
                generation,
                format_address(&wallet)
            );
            return Ok(Submission::Superseded);
        }

        inner.state.balances = load.balances.clone();
        inner.state.status = load.status;
        self.event_handler.handle_balances(&load.balances).await;
        self.event_handler.handle_status(&load.status_update()).await;

        Ok(Submission::Applied(load))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::portfolio::StatusStyle;
    use crate::models::token::{BalanceEntry, TokenBalance};
    use crate::traits::data_provider::BalanceDataProvider;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::sync::Notify;

    const SLOW_WALLET: &str = "0x1111111111111111111111111111111111111111";
    const FAST_WALLET: &str = "0x2222222222222222222222222222222222222222";

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Status(String, StatusStyle),
        Balances(Vec<String>),
    }

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<Event>>,
    }

    #[async_trait]
    impl PortfolioEventHandler for RecordingHandler {
        async fn handle_status(&self, status: &StatusUpdate) {
            self.events.lock().await.push(Event::Status(status.message.clone(), status.style));
        }

        async fn handle_balances(&self, balances: &PortfolioResult) {
            let lines = balances.iter().map(|entry| entry.to_string()).collect();
            self.events.lock().await.push(Event::Balances(lines));
        }
    }

    /// Balance is 1 ETH for the fast wallet and 5 ETH for the slow one,
    /// which only answers after `release` is notified.
    #[derive(Default)]
    struct GatedProvider {
        slow_started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl BalanceDataProvider for GatedProvider {
        async fn fetch_native_balance(&self, wallet: &WalletAddress) -> Result<u128, FetchError> {
            if wallet.as_str() == SLOW_WALLET {
                self.slow_started.notify_one();
                self.release.notified().await;
                Ok(5_000_000_000_000_000_000)
            } else {
                Ok(1_000_000_000_000_000_000)
            }
        }

        async fn fetch_token_balances(&self, _wallet: &WalletAddress) -> Result<Vec<TokenBalance>, FetchError> {
            Ok(vec![])
        }
    }

    fn session_with(provider: Arc<GatedProvider>) -> (Arc<PortfolioSession>, Arc<RecordingHandler>) {
        let handler = Arc::new(RecordingHandler::default());
        let session = PortfolioSession::new(PortfolioLoader::new(provider), handler.clone());
        (Arc::new(session), handler)
    }

    #[tokio::test]
    async fn starts_idle() {
        let (session, _) = session_with(Arc::new(GatedProvider::default()));
        assert_eq!(session.snapshot().await, SessionState::default());
        assert_eq!(session.snapshot().await.status, LoadStatus::Idle);
    }

    #[tokio::test]
    async fn invalid_input_changes_nothing_but_the_status() {
        let (session, handler) = session_with(Arc::new(GatedProvider::default()));
        session.submit(FAST_WALLET).await.unwrap();
        let before = session.snapshot().await;
        handler.events.lock().await.clear();

        let err = session.submit("0x123").await.unwrap_err();

        assert_eq!(err, InvalidAddressFormat("0x123".to_string()));
        assert_eq!(session.snapshot().await, before);
        assert_eq!(
            *handler.events.lock().await,
            vec![Event::Status("Invalid wallet address".into(), StatusStyle::Error)]
        );
    }

    #[tokio::test]
    async fn clears_then_renders_in_order() {
        let (session, handler) = session_with(Arc::new(GatedProvider::default()));

        let submission = session.submit(&format!("  {}  ", FAST_WALLET)).await.unwrap();
        assert!(submission.is_applied());

        assert_eq!(
            *handler.events.lock().await,
            vec![
                Event::Balances(vec![]),
                Event::Status("fetching wallet data...".into(), StatusStyle::Loading),
                Event::Balances(vec!["ETH: 1".into()]),
                Event::Status("Wallet data loaded".into(), StatusStyle::Success),
            ]
        );

        let state = session.snapshot().await;
        assert_eq!(state.wallet.unwrap().as_str(), FAST_WALLET);
        assert_eq!(state.status, LoadStatus::Success);
        assert_eq!(state.balances.entries(), &[BalanceEntry::new("ETH", "1")]);
    }

    #[tokio::test]
    async fn late_result_for_older_wallet_is_dropped() {
        let provider = Arc::new(GatedProvider::default());
        let (session, _) = session_with(provider.clone());

        let slow = tokio::spawn({
            let session = session.clone();
            async move { session.submit(SLOW_WALLET).await }
        });
        provider.slow_started.notified().await;

        let fast = session.submit(FAST_WALLET).await.unwrap();
        assert!(fast.is_applied());

        provider.release.notify_one();
        let slow = tokio::time::timeout(Duration::from_secs(5), slow)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(matches!(slow, Submission::Superseded));

        let state = session.snapshot().await;
        assert_eq!(state.wallet.unwrap().as_str(), FAST_WALLET);
        assert_eq!(state.balances.entries(), &[BalanceEntry::new("ETH", "1")]);
    }

    /// Records events like `RecordingHandler` but parks the first non-empty
    /// balance render until `release` is notified.
    #[derive(Default)]
    struct StallingHandler {
        events: Mutex<Vec<Event>>,
        stalled: std::sync::atomic::AtomicBool,
        render_entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl PortfolioEventHandler for StallingHandler {
        async fn handle_status(&self, status: &StatusUpdate) {
            self.events.lock().await.push(Event::Status(status.message.clone(), status.style));
        }

        async fn handle_balances(&self, balances: &PortfolioResult) {
            use std::sync::atomic::Ordering;

            if !balances.is_empty() && !self.stalled.swap(true, Ordering::SeqCst) {
                self.render_entered.notify_one();
                self.release.notified().await;
            }
            let lines = balances.iter().map(|entry| entry.to_string()).collect();
            self.events.lock().await.push(Event::Balances(lines));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slow_render_of_older_result_stays_under_newer_submission() {
        let provider = Arc::new(GatedProvider::default());
        let handler = Arc::new(StallingHandler::default());
        let session = Arc::new(PortfolioSession::new(PortfolioLoader::new(provider.clone()), handler.clone()));

        let fast = tokio::spawn({
            let session = session.clone();
            async move { session.submit(FAST_WALLET).await }
        });
        handler.render_entered.notified().await;

        let slow = tokio::spawn({
            let session = session.clone();
            async move { session.submit(SLOW_WALLET).await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        handler.release.notify_one();

        let fast = tokio::time::timeout(Duration::from_secs(5), fast)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(fast.is_applied());

        // The newer submission is now loading; its clear and loading events
        // must come after everything the older one rendered.
        tokio::time::timeout(Duration::from_secs(5), provider.slow_started.notified())
            .await
            .unwrap();
        let state = session.snapshot().await;
        assert_eq!(state.wallet.unwrap().as_str(), SLOW_WALLET);
        assert_eq!(state.status, LoadStatus::Loading);
        assert_eq!(
            handler.events.lock().await.last(),
            Some(&Event::Status("fetching wallet data...".into(), StatusStyle::Loading))
        );

        provider.release.notify_one();
        let slow = tokio::time::timeout(Duration::from_secs(5), slow)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(slow.is_applied());
        assert_eq!(
            handler.events.lock().await.last(),
            Some(&Event::Status("Wallet data loaded".into(), StatusStyle::Success))
        );
        assert_eq!(session.snapshot().await.balances.entries(), &[BalanceEntry::new("ETH", "5")]);
    }

    /// Reports one token named after the wallet, so the stored balances
    /// reveal which wallet they were loaded for.
    struct EchoProvider;

    #[async_trait]
    impl BalanceDataProvider for EchoProvider {
        async fn fetch_native_balance(&self, _wallet: &WalletAddress) -> Result<u128, FetchError> {
            tokio::task::yield_now().await;
            Err(FetchError::Network("offline".into()))
        }

        async fn fetch_token_balances(&self, wallet: &WalletAddress) -> Result<Vec<TokenBalance>, FetchError> {
            tokio::task::yield_now().await;
            Ok(vec![TokenBalance {
                token_symbol: wallet.as_str().to_string(),
                balance: "1".to_string(),
            }])
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_submissions_keep_wallet_and_balances_paired() {
        for _ in 0..50 {
            let session = Arc::new(PortfolioSession::new(
                PortfolioLoader::new(Arc::new(EchoProvider)),
                Arc::new(RecordingHandler::default()),
            ));

            let tasks: Vec<_> = [SLOW_WALLET, FAST_WALLET]
                .into_iter()
                .map(|wallet| {
                    let session = session.clone();
                    tokio::spawn(async move { session.submit(wallet).await })
                })
                .collect();
            for task in tasks {
                task.await.unwrap().unwrap();
            }

            let state = session.snapshot().await;
            let wallet = state.wallet.expect("a wallet was submitted");
            assert_eq!(state.status, LoadStatus::PartialSuccess);
            assert_eq!(state.balances.entries(), &[BalanceEntry::new(wallet.as_str(), "1")]);
        }
    }
}
