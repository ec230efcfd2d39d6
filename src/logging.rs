//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Log config file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Built-in config: `info` and above to stderr.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise logging from `file_name`, or the console config if it is missing.
pub fn init_logging(file_name: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(file_name).exists() {
        log4rs::init_file(file_name, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {file_name}: {e}"))?;
    } else {
        log4rs::init_config(console_config(LevelFilter::Info)?)?;
    }
    Ok(())
}
