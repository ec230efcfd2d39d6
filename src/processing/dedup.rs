//! Network de-duplication.

use crate::models::{NetworkSet, Server};

/// Collect the unique networks of successfully resolved servers.
///
/// No-record and provider-error lookups are left out.
pub fn unique_networks(servers: &[Server]) -> NetworkSet {
    let networks: NetworkSet = servers
        .iter()
        .filter_map(|s| s.network())
        .map(str::to_string)
        .collect();
    log::info!(
        "{} servers => {} unique networks",
        servers.len(),
        networks.len()
    );
    networks
}
