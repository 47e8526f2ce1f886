use crate::error::FetchError;
use crate::models::wallet::WalletAddress;

/// Wei per whole ether
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Parse a JSON-RPC quantity, either `0x`-prefixed hex or plain decimal
pub fn parse_quantity(raw: &str) -> Result<u128, FetchError> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        // "0x" alone is how some nodes encode zero
        Some("") => Ok(0),
        Some(hex) => u128::from_str_radix(hex, 16),
        None => raw.parse::<u128>(),
    };

    parsed.map_err(|e| FetchError::MalformedResponse(format!("invalid quantity {:?}: {}", raw, e)))
}

/// Format wei as whole ether. Truncates, never rounds.
pub fn wei_to_eth(wei: u128) -> String {
    (wei / WEI_PER_ETH).to_string()
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a wallet address for display (truncated)
pub fn format_address(wallet: &WalletAddress) -> String {
    let s = wallet.as_str();
    format!("{}...{}", &s[..6], &s[s.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2500000000000000000", "2" ; "two and a half ether")]
    #[test_case("999999999999999999", "0" ; "just under one ether")]
    #[test_case("1000000000000000000", "1" ; "exactly one ether")]
    #[test_case("0", "0" ; "zero")]
    #[test_case("0x22b1c8c1227a0000", "2" ; "hex quantity")]
    #[test_case("0x0", "0" ; "hex zero")]
    #[test_case("0x", "0" ; "empty hex")]
    fn converts_wei_to_whole_ether(raw: &str, expected: &str) {
        assert_eq!(wei_to_eth(parse_quantity(raw).unwrap()), expected);
    }

    #[test]
    fn conversion_handles_amounts_beyond_u64() {
        // 123456 ETH plus change
        let wei = parse_quantity("123456789012345678901234").unwrap();
        assert_eq!(wei_to_eth(wei), "123456");
    }

    #[test_case("" ; "empty")]
    #[test_case("12.5" ; "fractional")]
    #[test_case("-1" ; "negative")]
    #[test_case("0xzz" ; "bad hex")]
    #[test_case("1000000000000000000000000000000000000000000" ; "overflow")]
    fn rejects_malformed_quantities(raw: &str) {
        assert!(matches!(parse_quantity(raw), Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn truncate_string_keeps_short_input() {
        assert_eq!(truncate_string("abc", 10), "abc");
        assert_eq!(truncate_string("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn format_address_shortens_the_middle() {
        let wallet = WalletAddress::parse("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe").unwrap();
        assert_eq!(format_address(&wallet), "0xde0B...7BAe");
    }
}
