use std::fmt;
use std::str::FromStr;

use crate::error::InvalidAddressFormat;

const ADDRESS_HEX_LEN: usize = 40;

/// Basic Ethereum address check: `0x` followed by exactly 40 hex digits
pub fn is_valid_wallet(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// A wallet address that passed format validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate raw user input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, InvalidAddressFormat> {
        let trimmed = input.trim();
        if is_valid_wallet(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidAddressFormat(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = InvalidAddressFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
