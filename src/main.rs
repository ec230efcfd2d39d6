use infoblox_networks::config::Config;
use infoblox_networks::logging::{init_logging, LOG_CONFIG_FILE};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging(LOG_CONFIG_FILE)?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let count = infoblox_networks::run(&config).await?;

    log::info!("#End main() wrote {count} networks to {}", config.output_file);
    Ok(())
}
