//! Reading the input file and pulling addresses out of it.
//!
//! - [`reader`] - Whole-file reads
//! - [`extract`] - Dotted-quad extraction

mod extract;
mod reader;

pub use extract::extract_addresses;
pub use reader::read_input_file;
