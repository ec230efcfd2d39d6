//! Run configuration and fixed constants.
//!
//! Everything the pipeline needs from the command line and the environment
//! is collected once into [`Config`] and handed down explicitly.

use std::error::Error;

/// Environment variable holding the raw `Authorization` header value.
pub const AUTH_ENV_VAR: &str = "infobloxAuth";

/// WAPI path for the ipv4address object, the address is appended.
pub const WAPI_IPV4ADDRESS_PATH: &str = "/wapi/v2.12.1/ipv4address?ip_address=";

/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "networks.txt";

/// Dotted-quad pattern, no octet range validation.
pub const IPV4_PATTERN: &str = r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b";

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text file to scan for addresses.
    pub input_file: String,
    /// Infoblox grid master hostname.
    pub infoblox_host: String,
    /// Forwarded verbatim as the `Authorization` header.
    pub auth_token: String,
    /// File the unique networks are appended to.
    pub output_file: String,
}

impl Config {
    /// Build the config from `argv` (program name first) and the auth value.
    ///
    /// # Returns
    /// * `Ok(Config)` - When exactly two positional arguments were given
    /// * `Err` - With a usage line otherwise
    pub fn new(args: &[String], auth_token: Option<String>) -> Result<Config, Box<dyn Error>> {
        let program = args.first().map(String::as_str).unwrap_or("infoblox-networks");
        let (input_file, infoblox_host) = match args {
            [_, input_file, infoblox_host] => (input_file.clone(), infoblox_host.clone()),
            _ => {
                return Err(format!("usage: {program} <input-file-path> <infoblox-hostname>").into())
            }
        };

        let auth_token = auth_token.unwrap_or_else(|| {
            log::warn!("{AUTH_ENV_VAR} is not set, sending an empty Authorization header");
            String::new()
        });

        Ok(Config {
            input_file,
            infoblox_host,
            auth_token,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        })
    }

    /// Build the config from the process arguments and environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        let args: Vec<String> = std::env::args().collect();
        Config::new(&args, std::env::var(AUTH_ENV_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_new() {
        let config = Config::new(
            &args(&["prog", "servers.txt", "gm.example.com"]),
            Some("Basic abc".to_string()),
        )
        .expect("Config should build");
        assert_eq!(config.input_file, "servers.txt");
        assert_eq!(config.infoblox_host, "gm.example.com");
        assert_eq!(config.auth_token, "Basic abc");
        assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
    }

    #[test]
    fn test_config_missing_auth_is_empty() {
        let config = Config::new(&args(&["prog", "servers.txt", "gm.example.com"]), None)
            .expect("Config should build");
        assert_eq!(config.auth_token, "");
    }

    #[test]
    fn test_config_wrong_arg_count() {
        let err = Config::new(&args(&["prog", "servers.txt"]), None).unwrap_err();
        assert!(err.to_string().starts_with("usage: prog"), "got: {err}");

        let err = Config::new(&args(&["prog", "a", "b", "c"]), None).unwrap_err();
        assert!(err.to_string().contains("<infoblox-hostname>"));
    }
}
