//! Manifest source fetching

use pathstone_core::{PathstoneError, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Where a manifest document is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// A file on the local filesystem
    File(PathBuf),
    /// An HTTP(S) URL
    Http(String),
}

impl ManifestSource {
    /// Classify a locator string as a file path or a URL
    ///
    /// Anything without an `http(s)://` scheme is treated as a filesystem
    /// path. No file-format negotiation happens here.
    pub fn from_locator(locator: &str) -> Self {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            ManifestSource::Http(locator.to_string())
        } else {
            ManifestSource::File(PathBuf::from(locator))
        }
    }

    /// Fetch the raw manifest text in a single request
    pub fn fetch(&self) -> Result<String> {
        match self {
            ManifestSource::File(path) => Ok(fs::read_to_string(path)?),
            ManifestSource::Http(url) => {
                let agent = build_agent();
                let mut response = agent.get(url).call().map_err(|e| {
                    PathstoneError::FetchError(format!("GET {} failed: {}", url, e))
                })?;
                response.body_mut().read_to_string().map_err(|e| {
                    PathstoneError::FetchError(format!(
                        "Failed to read response from {}: {}",
                        url, e
                    ))
                })
            }
        }
    }

    /// The locator in display form
    pub fn locator(&self) -> String {
        match self {
            ManifestSource::File(path) => path.display().to_string(),
            ManifestSource::Http(url) => url.clone(),
        }
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(FETCH_TIMEOUT_SECS)))
        .build();
    config.into()
}
