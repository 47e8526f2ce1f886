//! Small helpers shared across the crate

pub mod helper;

pub use helper::{format_address, parse_quantity, truncate_string, wei_to_eth, WEI_PER_ETH};
