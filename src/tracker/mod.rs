//! Portfolio loading and submission handling

pub mod portfolio_loader;
pub mod session;

pub use portfolio_loader::PortfolioLoader;
pub use session::{PortfolioSession, SessionState, Submission};
