//! Connection string parsing.
//!
//! The deployment target is configured through a single secret setting in
//! the form `Endpoint=…;AccessKey=…;SecretKey=…[;Region=…]`, so that one
//! environment variable carries both the endpoint and the credentials.

use std::fmt;

use crate::error::{CoreError, Result};

const DEFAULT_REGION: &str = "us-east-1";

/// Parsed form of the store connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString {
    /// Endpoint URL of the blob store.
    pub endpoint: String,

    /// Region name.
    pub region: String,

    /// Access key id.
    pub access_key: String,

    /// Secret access key.
    pub secret_key: String,
}

impl ConnectionString {
    /// Parse a `key=value;key=value` connection string.
    ///
    /// Keys are compared case-insensitively. `Endpoint`, `AccessKey` and
    /// `SecretKey` are required; `Region` defaults to `us-east-1`.
    /// Unknown keys are rejected so that typos fail loudly instead of
    /// silently dropping a credential.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut endpoint = None;
        let mut region = None;
        let mut access_key = None;
        let mut secret_key = None;

        for pair in raw.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CoreError::config(format!(
                    "invalid connection string segment '{pair}': expected key=value"
                ))
            })?;

            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "endpoint" => &mut endpoint,
                "region" => &mut region,
                "accesskey" => &mut access_key,
                "secretkey" => &mut secret_key,
                other => {
                    return Err(CoreError::config(format!(
                        "unknown connection string key '{other}'"
                    )));
                }
            };

            if slot.is_some() {
                return Err(CoreError::config(format!(
                    "duplicate connection string key '{}'",
                    key.trim()
                )));
            }
            *slot = Some(value.trim().to_string());
        }

        let require = |value: Option<String>, name: &str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CoreError::config(format!("connection string is missing {name}")))
        };

        Ok(Self {
            endpoint: require(endpoint, "Endpoint")?,
            region: region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key: require(access_key, "AccessKey")?,
            secret_key: require(secret_key, "SecretKey")?,
        })
    }
}

// Manual Debug so the secret never ends up in logs or error chains.
impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionString")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
