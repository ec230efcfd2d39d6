//! Infoblox WAPI interaction.
//!
//! - [`client`] - HTTP client and the [`NetworkResolver`] seam
//! - [`response`] - Decoding of ipv4address responses

mod client;
mod response;

pub use client::{InfobloxClient, NetworkResolver};
pub use response::parse_lookup_response;
