use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use moo_common::config::Config;
use moo_common::error::{MooError, Result};
use moo_common::model::Artifact;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use tokio::fs::File as TokioFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::validation::{validate_url, verify_checksum};

const DOWNLOAD_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str =
    "moo statusline installer (Rust; +https://github.com/moogento/moo-statusline)";

/// Downloads `artifact` into the cache directory and verifies its checksum.
///
/// A cached archive with a matching checksum is returned without touching the
/// network; a cached archive that does not match is discarded first.
pub async fn fetch_and_verify(artifact: &Artifact, config: &Config) -> Result<PathBuf> {
    artifact.validate_checksum_format()?;
    validate_url(&artifact.url)?;

    let cache_dir = config.cache_dir();
    let cache_path = cache_dir.join(artifact.cache_file_name());

    debug!(
        "Preparing to fetch '{}' {} from URL: {}",
        artifact.name, artifact.version, artifact.url
    );
    debug!("Target cache path: {}", cache_path.display());
    debug!("Expected SHA256: {}", artifact.sha256);

    if cache_path.is_file() {
        debug!("File exists in cache: {}", cache_path.display());
        match verify_checksum(&cache_path, &artifact.sha256) {
            Ok(()) => {
                debug!("Using valid cached file: {}", cache_path.display());
                return Ok(cache_path);
            }
            Err(e) => {
                debug!(
                    "Cached file checksum mismatch ({}): {}. Redownloading.",
                    cache_path.display(),
                    e
                );
                if let Err(remove_err) = fs::remove_file(&cache_path) {
                    debug!(
                        "Failed to remove corrupted cached file {}: {}",
                        cache_path.display(),
                        remove_err
                    );
                }
            }
        }
    } else {
        debug!("File not found in cache.");
    }

    fs::create_dir_all(&cache_dir)
        .map_err(|e| MooError::fs("Failed to create cache directory", &cache_dir, e))?;

    let client = build_http_client()?;
    download_and_verify(
        &client,
        &artifact.name,
        &artifact.url,
        &cache_path,
        &artifact.sha256,
    )
    .await
    .inspect_err(|e| error!("Download failed from {}: {}", artifact.url, e))
}

pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(MooError::from)
}

/// Streams `url` into a temporary sibling of `final_path`, verifies it and
/// renames it into place. Nothing is left at either path on failure.
pub async fn download_and_verify(
    client: &Client,
    name: &str,
    url: &str,
    final_path: &Path,
    sha256_expected: &str,
) -> Result<PathBuf> {
    let temp_filename = format!(
        ".{}.download",
        final_path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = final_path.with_file_name(temp_filename);
    debug!("Downloading to temporary path: {}", temp_path.display());
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(
                "Could not remove existing temporary file {}: {}",
                temp_path.display(),
                e
            );
        }
    }

    let mut response = client.get(url).send().await.map_err(|e| {
        debug!("HTTP request failed for {url}: {e}");
        MooError::NetworkError(format!("HTTP request failed for {url}: {e}"))
    })?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, url);

    if !status.is_success() {
        let reason = match status {
            StatusCode::NOT_FOUND => "Resource not found (404)".to_string(),
            StatusCode::FORBIDDEN => "Access forbidden (403)".to_string(),
            other => format!("HTTP error {other}"),
        };
        error!("HTTP error {} for URL {}", status, url);
        return Err(MooError::DownloadError(
            name.to_string(),
            url.to_string(),
            reason,
        ));
    }

    let partial = PartialDownload::new(&temp_path);
    let mut temp_file = TokioFile::create(&temp_path)
        .await
        .map_err(|e| MooError::fs("Failed to create temp file", &temp_path, e))?;
    let mut bytes_written: u64 = 0;
    while let Some(chunk) = response.chunk().await.map_err(|e| {
        MooError::NetworkError(format!("Failed to read response body from {url}: {e}"))
    })? {
        temp_file
            .write_all(&chunk)
            .await
            .map_err(|e| MooError::fs("Failed to write download stream to", &temp_path, e))?;
        bytes_written += chunk.len() as u64;
    }
    temp_file
        .flush()
        .await
        .map_err(|e| MooError::fs("Failed to flush", &temp_path, e))?;
    drop(temp_file);
    debug!("Finished writing {} bytes to temp file.", bytes_written);

    verify_checksum(&temp_path, sha256_expected)?;
    debug!(
        "Checksum verified for temporary file: {}",
        temp_path.display()
    );

    fs::rename(&temp_path, final_path).map_err(|e| {
        MooError::FilesystemError(format!(
            "Failed to move temp file {} to {}: {}",
            temp_path.display(),
            final_path.display(),
            e
        ))
    })?;
    partial.keep();
    debug!(
        "Moved verified file to final location: {}",
        final_path.display()
    );
    Ok(final_path.to_path_buf())
}

/// Removes an in-progress download when dropped, unless it was kept.
struct PartialDownload<'a> {
    path: &'a Path,
    keep: bool,
}

impl<'a> PartialDownload<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, keep: false }
    }

    fn keep(mut self) {
        self.keep = true;
    }
}

impl Drop for PartialDownload<'_> {
    fn drop(&mut self) {
        if self.keep || !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(self.path) {
            tracing::warn!(
                "Failed to remove partial download {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
