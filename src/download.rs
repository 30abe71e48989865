//! Archive download over HTTP.
//!
//! Streams the release archive to disk with a blocking client. Failures
//! are classified into the typed variants of [`InstallError`]: send
//! failures and broken body reads are `Network`, non-2xx responses are
//! `HttpStatus`, and create/write failures are `Filesystem`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{InstallError, Result};
use crate::ui::download_bar;

/// Buffer size for the streaming copy.
const CHUNK_SIZE: usize = 64 * 1024;

/// Downloads release archives over HTTP/HTTPS.
pub struct ArchiveDownloader {
    client: Client,
    timeout: Option<Duration>,
}

impl ArchiveDownloader {
    /// Create a downloader. `None` disables the request timeout, so a
    /// stalled connection blocks until the peer gives up.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("flutterup")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Stream `url` to `destination`, overwriting any existing file.
    ///
    /// Returns the number of bytes written. A failed transfer may leave a
    /// truncated file at `destination`; cleanup is the caller's call.
    pub fn fetch(&self, url: &str, destination: &Path, show_progress: bool) -> Result<u64> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| InstallError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut file = File::create(destination).map_err(|e| InstallError::Filesystem {
            path: destination.to_path_buf(),
            source: e,
        })?;

        let bar = download_bar(response.content_length(), show_progress);
        let mut reader = response;
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;

        loop {
            let n = reader.read(&mut buf).map_err(|e| InstallError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])
                .map_err(|e| InstallError::Filesystem {
                    path: destination.to_path_buf(),
                    source: e,
                })?;
            written += n as u64;
            bar.inc(n as u64);
        }

        bar.finish_and_clear();
        tracing::debug!("Wrote {} bytes to {}", written, destination.display());
        Ok(written)
    }
}

impl Default for ArchiveDownloader {
    fn default() -> Self {
        Self::new(None)
    }
}
