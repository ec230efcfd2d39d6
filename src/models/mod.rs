//! Domain models for network lookups.
//!
//! - [`Lookup`] - Tagged result of resolving one address
//! - [`Server`] - An extracted address paired with its lookup
//! - [`NetworkSet`] - Unique network identifiers

mod server;

pub use server::{Lookup, NetworkSet, Server};
