//! Output of lookup results.
//!
//! - [`file`] - Appending unique networks to the output file
//! - [`terminal`] - Per-address report on stdout

mod file;
mod terminal;

pub use file::write_networks;
pub use terminal::{format_field, print_servers};
