use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eth_portfolio_viewer::{
  AnkrRpcProvider, CompositeEventHandler, Config, ConsoleEventHandler,
  PlainTextEventHandler, PortfolioEventHandler, PortfolioLoader,
  PortfolioSession, StatusUpdate, Submission,
};

async fn submit(session: &PortfolioSession, input: &str) {
  match session.submit(input).await {
    Ok(Submission::Applied(load)) => {
      info!(
        "Loaded {} at {}",
        load.wallet,
        load.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
      );
    }
    Ok(Submission::Superseded) => {}
    Err(e) => warn!("{}", e),
  }
}

async fn run(config: Config) -> anyhow::Result<()> {
  info!("Initializing portfolio viewer v{}...", eth_portfolio_viewer::VERSION);
  info!("ETH RPC URL: {}", config.eth_rpc_url);
  info!("Multichain RPC URL: {}", config.multichain_rpc_url);
  if config.api_key.is_none() {
    warn!("ANKR_API_KEY not set, using keyless endpoints");
  }

  let provider = Arc::new(AnkrRpcProvider::new(&config));
  // Status and list go to stdout, logs to stderr
  let handler = Arc::new(
    CompositeEventHandler::new()
      .with(Arc::new(ConsoleEventHandler::new()))
      .with(Arc::new(PlainTextEventHandler::stdout())),
  );
  let session =
    PortfolioSession::new(PortfolioLoader::new(provider), handler.clone());

  // Wallets given on the command line are loaded once, in order
  let args: Vec<String> = std::env::args().skip(1).collect();
  if !args.is_empty() {
    for wallet in &args {
      submit(&session, wallet).await;
    }
    return Ok(());
  }

  // Otherwise every line on stdin is one submission
  handler.handle_status(&StatusUpdate::idle()).await;
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await? {
    if line.trim().is_empty() {
      continue;
    }
    submit(&session, &line).await;
  }

  Ok(())
}

fn main() -> anyhow::Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_file(true)
    .with_line_number(true)
    .init();

  let config = Config::from_env()?;

  tokio::runtime::Runtime::new()?.block_on(run(config))
}
