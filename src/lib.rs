//! Resolve the IPv4 addresses found in a text file to their Infoblox
//! networks and append the unique networks to a file.
//!
//! read file → extract addresses → lookup each → dedup → append

pub mod config;
pub mod infoblox;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use infoblox::{InfobloxClient, NetworkResolver};
use std::error::Error;

/// Run the whole pipeline against the configured Infoblox host.
///
/// # Returns
/// * `Ok(usize)` - Number of networks appended to the output file
/// * `Err` - On the first read, lookup or write failure
pub async fn run(config: &Config) -> Result<usize, Box<dyn Error>> {
    let client = InfobloxClient::new(config)?;
    run_with_resolver(&client, config).await
}

/// Run the pipeline with any resolver.
pub async fn run_with_resolver<R: NetworkResolver>(
    resolver: &R,
    config: &Config,
) -> Result<usize, Box<dyn Error>> {
    log::info!(
        "#Start run() input={} host={}",
        config.input_file,
        config.infoblox_host
    );
    let servers = processing::get_servers(resolver, &config.input_file).await?;
    output::print_servers(&servers);

    let networks = processing::unique_networks(&servers);
    output::write_networks(&config.output_file, &networks)
}
