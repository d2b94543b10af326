//! Validated absolute web address

use crate::error::{Result, UtmError};
use std::fmt;
use url::Url;

/// An absolute `http`/`https` URL with a non-empty host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    address: String,
}

impl Address {
    /// Validate `raw` and wrap it.
    ///
    /// The stored form is whatever the `url` parser serializes the input to
    /// (lower-cased scheme and host, `/` for an empty path). Nothing else is
    /// rewritten.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(UtmError::invalid_url("address is empty"));
        }

        let parsed = Url::parse(raw)
            .map_err(|e| UtmError::invalid_url(format!("'{}' is not an absolute URL: {}", raw, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(UtmError::invalid_url(format!(
                    "unsupported scheme '{}', expected http or https",
                    other
                )))
            }
        }

        match parsed.host_str() {
            Some(host) if !host.is_empty() => {}
            _ => return Err(UtmError::invalid_url(format!("'{}' has no host", raw))),
        }

        Ok(Address {
            address: parsed.into(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
