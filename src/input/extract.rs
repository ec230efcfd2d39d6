//! Dotted-quad address extraction.

use crate::config::IPV4_PATTERN;
use regex::Regex;
use std::sync::OnceLock;

static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| Regex::new(IPV4_PATTERN).expect("Invalid Regex"))
}

/// Return every dotted-quad in `text`, in source order.
///
/// Duplicates are kept and octets are not range checked, so
/// `999.999.999.999` is returned as-is.
pub fn extract_addresses(text: &str) -> Vec<String> {
    let addresses: Vec<String> = get_ipv4_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    log::debug!("extract_addresses() found {}", addresses.len());
    addresses
}
