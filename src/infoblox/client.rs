//! HTTP client for the WAPI `ipv4address` search.

use super::response::parse_lookup_response;
use crate::config::{Config, WAPI_IPV4ADDRESS_PATH};
use crate::models::Lookup;
use colored::Colorize;
use reqwest::header::AUTHORIZATION;
use std::error::Error;

/// Resolves one address to the network it belongs to.
#[allow(async_fn_in_trait)]
pub trait NetworkResolver {
    /// Look up `address`.
    ///
    /// Transport and decoding failures are errors. A service-reported
    /// failure is a successful [`Lookup::ProviderError`].
    async fn resolve(&self, address: &str) -> Result<Lookup, Box<dyn Error>>;
}

/// Talks to a single Infoblox grid master over HTTPS.
pub struct InfobloxClient {
    client: reqwest::Client,
    host: String,
    auth_token: String,
}

impl InfobloxClient {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| format!("Error building HTTP client: {e}"))?;
        Ok(InfobloxClient {
            client,
            host: config.infoblox_host.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Search URL for one address.
    pub fn lookup_url(&self, address: &str) -> String {
        format!("https://{}{WAPI_IPV4ADDRESS_PATH}{address}", self.host)
    }

    /// GET request for one address, auth value forwarded verbatim.
    pub fn build_request(&self, address: &str) -> Result<reqwest::Request, Box<dyn Error>> {
        let url = self.lookup_url(address);
        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_token.as_str())
            .build()
            .map_err(|e| format!("Error building request for {url}: {e}"))?;
        Ok(request)
    }
}

impl NetworkResolver for InfobloxClient {
    async fn resolve(&self, address: &str) -> Result<Lookup, Box<dyn Error>> {
        let url = self.lookup_url(address);
        log::debug!("GET {url}", url = url.on_blue());

        let request = self.build_request(address)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| {
                log::error!("Request failed: {}", e);
                format!("Error requesting {url}: {e}")
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Error reading response from {url}: {e}"))?;
        log::trace!(
            "status={status}\n┎######\nbody=\n{body}\n┖######",
            body = body.dimmed()
        );

        parse_lookup_response(&body).map_err(|e| {
            log::error!("RESPONSE START:\n\n{}\n\nRESPONSE END\n", body);
            format!("Bad response for {address} (status={status}): {e}").into()
        })
    }
}
