//! Server list assembly.

use crate::infoblox::NetworkResolver;
use crate::input::{extract_addresses, read_input_file};
use crate::models::{Lookup, Server};
use std::error::Error;

/// Resolve every address in order, one request at a time.
///
/// # Returns
/// * `Ok(Vec<Server>)` - One record per address, in input order
/// * `Err` - The first resolver error, no partial list is kept
pub async fn resolve_servers<R: NetworkResolver>(
    resolver: &R,
    addresses: &[String],
) -> Result<Vec<Server>, Box<dyn Error>> {
    let mut servers = Vec::with_capacity(addresses.len());
    for (i, address) in addresses.iter().enumerate() {
        let lookup = resolver.resolve(address).await?;
        match &lookup {
            Lookup::Network(network) => log::debug!("#{i:3} {address} => {network}"),
            Lookup::NoRecord => log::warn!("#{i:3} {address} => no record"),
            Lookup::ProviderError(text) => log::warn!("#{i:3} {address} => error: {text}"),
        }
        servers.push(Server::new(address.as_str(), lookup));
    }
    log::info!("Resolved {} addresses", servers.len());
    Ok(servers)
}

/// Read `file_name`, extract its addresses and resolve them.
pub async fn get_servers<R: NetworkResolver>(
    resolver: &R,
    file_name: &str,
) -> Result<Vec<Server>, Box<dyn Error>> {
    let text = read_input_file(file_name)?;
    let addresses = extract_addresses(&text);
    log::info!("Found {} addresses in {file_name}", addresses.len());
    resolve_servers(resolver, &addresses).await
}
