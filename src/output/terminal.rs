//! Terminal output utilities.

use crate::models::{Lookup, Server};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One report row, without colour.
fn server_row(i: usize, server: &Server) -> String {
    format!(
        "{j},{ip_address},{kind},{value}",
        j = format_field(i + 1, 6),
        ip_address = format_field(&server.ip_address, 17),
        kind = format_field(server.lookup.kind(), 11),
        value = format_field(&server.lookup, 20),
    )
}

/// Print one row per server to stdout.
pub fn print_servers(servers: &[Server]) {
    println!(r#" "cnt",       "ip_address",      "kind",              "value""#);
    for (i, server) in servers.iter().enumerate() {
        let row = server_row(i, server);
        match server.lookup {
            Lookup::Network(_) => println!("{row}"),
            Lookup::NoRecord => println!("{}", row.yellow()),
            Lookup::ProviderError(_) => println!("{}", row.on_red()),
        }
    }
}
