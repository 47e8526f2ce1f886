//! Remote balance data providers

pub mod jsonrpc;
pub mod rpc_provider;

pub use rpc_provider::AnkrRpcProvider;
