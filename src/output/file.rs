//! Network list file writer.

use crate::models::NetworkSet;
use itertools::Itertools;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

/// Append each network on its own line, creating the file if needed.
///
/// Lines are sorted so repeated runs diff cleanly. Earlier contents are kept,
/// so the same network can appear once per run.
///
/// # Returns
/// * `Ok(usize)` - Number of lines written
/// * `Err` - If the file cannot be opened or written
pub fn write_networks(file_name: &str, networks: &NetworkSet) -> Result<usize, Box<dyn Error>> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_name)
        .map_err(|e| format!("Error opening output file {file_name}: {e}"))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for network in networks.iter().sorted() {
        writeln!(writer, "{network}")
            .map_err(|e| format!("Error writing output file {file_name}: {e}"))?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|e| format!("Error writing output file {file_name}: {e}"))?;

    log::info!("Appended {count} networks to {file_name}");
    Ok(count)
}
