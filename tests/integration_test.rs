//! Integration tests for infoblox-networks
//!
//! These drive the full pipeline with a stub resolver in place of Infoblox.

use infoblox_networks::config::Config;
use infoblox_networks::infoblox::{parse_lookup_response, NetworkResolver};
use infoblox_networks::models::Lookup;
use infoblox_networks::run_with_resolver;
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;

/// Serves canned WAPI bodies per address, through the real decoder.
struct CannedWapi {
    bodies: HashMap<&'static str, &'static str>,
}

impl NetworkResolver for CannedWapi {
    async fn resolve(&self, address: &str) -> Result<Lookup, Box<dyn Error>> {
        let body = self
            .bodies
            .get(address)
            .ok_or_else(|| format!("no route to host for {address}"))?;
        parse_lookup_response(body)
    }
}

fn config(input_file: &str, name: &str) -> (Config, PathBuf) {
    let output = std::env::temp_dir().join(format!(
        "infoblox_networks_it_{}_{name}.txt",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&output);
    let config = Config {
        input_file: input_file.to_string(),
        infoblox_host: "gm.example.com".to_string(),
        auth_token: String::new(),
        output_file: output.to_str().unwrap().to_string(),
    };
    (config, output)
}

fn canned() -> CannedWapi {
    CannedWapi {
        bodies: HashMap::from([
            ("10.20.30.40", r#"[{"network":"10.20.30.0/24"}]"#),
            ("10.20.30.41", r#"[{"network":"10.20.30.0/24"}]"#),
            ("172.16.5.9", r#"{"Error":"AdmConProtoError","text":"no match"}"#),
        ]),
    }
}

#[tokio::test]
async fn test_full_workflow() {
    let (config, output) = config("src/tests/test_data/servers_01.txt", "full");
    let count = run_with_resolver(&canned(), &config)
        .await
        .expect("Pipeline failed");

    assert_eq!(count, 1, "Same network twice and one provider error");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "10.20.30.0/24\n");
    std::fs::remove_file(&output).ok();
}

#[tokio::test]
async fn test_rerun_appends_duplicates() {
    let (config, output) = config("src/tests/test_data/servers_01.txt", "rerun");
    run_with_resolver(&canned(), &config).await.expect("First run failed");
    run_with_resolver(&canned(), &config).await.expect("Second run failed");

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "10.20.30.0/24\n10.20.30.0/24\n"
    );
    std::fs::remove_file(&output).ok();
}

#[tokio::test]
async fn test_missing_input_file() {
    let (config, output) = config("src/tests/test_data/missing.txt", "missing");
    let result = run_with_resolver(&canned(), &config).await;

    assert!(result.is_err(), "Missing input should fail");
    assert!(!output.exists(), "No output file on failure");
}

#[tokio::test]
async fn test_lookup_failure_aborts_run() {
    let (config, output) = config("src/tests/test_data/servers_02.txt", "abort");
    let err = run_with_resolver(&canned(), &config).await.unwrap_err();

    assert!(err.to_string().contains("192.0.2.7"), "got: {err}");
    assert!(!output.exists(), "No partial output after a failed lookup");
}
