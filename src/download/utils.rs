use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// File name of a download link: everything after the last `/`.
pub fn file_name(download_url: &str) -> &str {
    download_url
        .rsplit_once('/')
        .map_or(download_url, |(_, name)| name)
}

pub fn build_download_path(download_url: &str, target_dir: &Path) -> PathBuf {
    target_dir.join(file_name(download_url))
}

/// Blocking client shared by the scrape and download steps.
///
/// The total request timeout is disabled: a large file can legitimately take
/// longer than reqwest's 30 second default to stream.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(None::<Duration>)
        .build()
        .map_err(Error::Client)
}
