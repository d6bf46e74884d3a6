//! Fetching the default configuration
//!
//! `temple --init` downloads a starter catalog and writes it to the config
//! path. The body is checked to be JSON before anything is written, so an
//! HTML error page never ends up as the user's config.

use crate::{Result, TempleError};
use log::debug;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Where the starter catalog is published
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/skmatz/temple/master/temple.json";

/// Download the config at `url` and write it to `path`
///
/// Creates the parent directory if needed and returns the number of bytes
/// written.
///
/// # Errors
///
/// Returns `TempleError::Download` if the request fails, the server answers
/// with a non-success status, or the body is not JSON. Returns
/// `TempleError::DestinationWrite` if the file cannot be written.
pub fn download_default_config(url: &str, path: &Path) -> Result<usize> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("temple/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TempleError::Download(e.to_string()))?;

    debug!("fetching default config from {url}");
    let response = client
        .get(url)
        .send()
        .map_err(|e| TempleError::Download(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TempleError::Download(format!("{url}: HTTP {status}")));
    }

    let body = response
        .bytes()
        .map_err(|e| TempleError::Download(format!("{url}: {e}")))?;

    serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(|e| TempleError::Download(format!("{url}: response is not JSON ({e})")))?;

    write_config(path, &body)?;
    Ok(body.len())
}

fn write_config(path: &Path, body: &[u8]) -> Result<()> {
    let write_err = |source| TempleError::DestinationWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, body).map_err(write_err)
}
