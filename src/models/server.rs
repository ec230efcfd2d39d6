//! Server resolution record.

use std::collections::HashSet;
use std::fmt;

/// Unique network identifiers, insertion order is not kept.
pub type NetworkSet = HashSet<String>;

/// Outcome of asking the IPAM service about one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Network of the first record returned, e.g. `10.0.0.0/24`.
    Network(String),
    /// The service returned an empty result set.
    NoRecord,
    /// The service returned an error object, carries its `text`.
    ProviderError(String),
}

impl Lookup {
    /// Short label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Lookup::Network(_) => "network",
            Lookup::NoRecord => "no_record",
            Lookup::ProviderError(_) => "error",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Network(network) => write!(f, "{network}"),
            Lookup::NoRecord => write!(f, "none"),
            Lookup::ProviderError(text) => write!(f, "{text}"),
        }
    }
}

/// An address found in the input and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    /// Address as matched in the input, not validated.
    pub ip_address: String,
    pub lookup: Lookup,
}

impl Server {
    pub fn new(ip_address: impl Into<String>, lookup: Lookup) -> Self {
        Server {
            ip_address: ip_address.into(),
            lookup,
        }
    }

    /// The resolved network, only for a successful lookup.
    pub fn network(&self) -> Option<&str> {
        match &self.lookup {
            Lookup::Network(network) => Some(network),
            _ => None,
        }
    }
}
