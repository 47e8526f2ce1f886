use thiserror::Error;

/// Raw input rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid wallet address: {0:?}")]
pub struct InvalidAddressFormat(pub String);

/// Failure of a single remote sub-request.
///
/// Carried per branch inside a load result; never returned from
/// `PortfolioLoader::load` itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote error: {message}")]
    RemoteApplication { code: Option<i64>, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
