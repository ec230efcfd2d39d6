//! Pipeline processing logic.
//!
//! - [`servers`] - Resolving extracted addresses into [`Server`](crate::models::Server) records
//! - [`dedup`] - Collapsing servers into unique networks

mod dedup;
mod servers;

pub use dedup::unique_networks;
pub use servers::{get_servers, resolve_servers};
