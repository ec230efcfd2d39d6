//! Input file reader.

use std::error::Error;

/// Read the whole input file into memory.
///
/// Invalid UTF-8 is replaced rather than rejected, the extractor only cares
/// about ASCII digits and dots.
///
/// # Returns
/// * `Ok(String)` - The file contents
/// * `Err` - If the file is missing or unreadable
pub fn read_input_file(file_name: &str) -> Result<String, Box<dyn Error>> {
    let bytes =
        std::fs::read(file_name).map_err(|e| format!("Error reading input file {file_name}: {e}"))?;
    log::info!("Read {} bytes from {file_name}", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
