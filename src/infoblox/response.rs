//! Decoding of WAPI `ipv4address` responses.
//!
//! A search returns a JSON array of records. Failures come back as a single
//! error object with `Error`, `code` and `text` fields.

use crate::models::Lookup;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;

/// One `ipv4address` record, other fields are ignored.
#[derive(Deserialize, Debug, Clone)]
struct Ipv4AddressRecord {
    /// Network the address belongs to, in CIDR notation.
    network: String,
}

/// Error object returned by WAPI.
#[derive(Deserialize, Debug, Clone)]
struct WapiError {
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    /// Human readable message.
    text: String,
}

/// Decode a WAPI response body into a [`Lookup`].
///
/// # Returns
/// * `Ok(Lookup::Network)` - Network of the first record
/// * `Ok(Lookup::NoRecord)` - Empty result array
/// * `Ok(Lookup::ProviderError)` - Error object, carries its `text`
/// * `Err` - Malformed JSON or a body matching neither shape
pub fn parse_lookup_response(body: &str) -> Result<Lookup, Box<dyn Error>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("Error parsing response JSON: {e}"))?;

    match value {
        Value::Array(_) => {
            let records: Vec<Ipv4AddressRecord> = serde_path_to_error::deserialize(value)
                .map_err(|e| format!("Error decoding records: path={} error={}", e.path(), e))?;

            let mut records = records.into_iter();
            let Some(first) = records.next() else {
                return Ok(Lookup::NoRecord);
            };
            let extra: Vec<String> = records.map(|r| r.network).collect();
            if !extra.is_empty() {
                log::warn!(
                    "Using network {} and ignoring {} more: {:?}",
                    first.network,
                    extra.len(),
                    extra
                );
            }
            Ok(Lookup::Network(first.network))
        }
        Value::Object(_) => {
            let error: WapiError = serde_path_to_error::deserialize(value).map_err(|e| {
                format!("Error decoding error object: path={} error={}", e.path(), e)
            })?;
            log::debug!("WAPI error code={:?} Error={:?}", error.code, error.error);
            Ok(Lookup::ProviderError(error.text))
        }
        other => Err(format!("Unexpected response JSON: {other}").into()),
    }
}
