//! Install configuration.
//!
//! The original installer hard-codes its release version, archive URL, and
//! destination. Those values live here as named constants, carried by
//! [`InstallConfig`] so tests can substitute a mock server and a temp
//! directory without touching control flow. The binary always runs
//! [`InstallConfig::default`]; there is deliberately no flag, env var, or
//! file that changes these values.

use std::path::PathBuf;
use std::time::Duration;

/// Flutter release pinned by this installer.
pub const FLUTTER_VERSION: &str = "3.19.0";

/// Release archive for the pinned version.
pub const ARCHIVE_URL: &str = "https://storage.googleapis.com/flutter_infra_release/releases/stable/windows/flutter_windows_3.19.0-stable.zip";

/// Where the archive is written. A Windows path, like the release archive
/// above; this tool does no cross-platform path handling.
pub const ARCHIVE_PATH: &str = r"C:\flutter.zip";

/// Command whose exit status decides whether the SDK is present.
pub const TOOL_COMMAND: &str = "flutter --version";

/// Configuration for one install run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Version-query command, e.g. `flutter --version`.
    pub tool_command: String,
    /// URL of the release archive.
    pub archive_url: String,
    /// Destination path for the downloaded archive.
    pub archive_path: PathBuf,
    /// Request timeout. `None` waits indefinitely, matching the original
    /// installer's behavior on a stalled connection.
    pub timeout: Option<Duration>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            tool_command: TOOL_COMMAND.to_string(),
            archive_url: ARCHIVE_URL.to_string(),
            archive_path: PathBuf::from(ARCHIVE_PATH),
            timeout: None,
        }
    }
}

impl InstallConfig {
    /// Production configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_pinned_release() {
        let config = InstallConfig::default();
        assert!(config.archive_url.contains(FLUTTER_VERSION));
        assert_eq!(config.archive_path, PathBuf::from(ARCHIVE_PATH));
        assert_eq!(config.tool_command, "flutter --version");
    }

    #[test]
    fn default_config_has_no_timeout() {
        let config = InstallConfig::default();
        assert!(config.timeout.is_none());
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let config = InstallConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
