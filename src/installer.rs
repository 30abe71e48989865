//! Install flow orchestration.
//!
//! The whole program is one linear pass: opening banner, presence check,
//! conditional download, size report, closing banner. Nothing propagates
//! past this module; a failed download is printed and folded into the
//! [`InstallOutcome`], and the run still reaches the closing banner.

use std::path::Path;

use crate::config::InstallConfig;
use crate::detection::{CommandVersionChecker, ToolStatus, VersionChecker};
use crate::download::ArchiveDownloader;
use crate::error::InstallError;
use crate::ui::{should_use_colors, FlutterupTheme, Output, OutputMode};

const BANNER_WIDTH: usize = 50;

/// How a run ended.
///
/// The binary exits 0 regardless; this exists so tests and library callers
/// can discriminate outcomes without parsing console text.
#[derive(Debug)]
pub enum InstallOutcome {
    /// The tool answered its version query; nothing was downloaded.
    AlreadyInstalled {
        /// Version number extracted from the query output, if any.
        version: Option<String>,
    },
    /// The archive was fetched to the destination path.
    Downloaded {
        /// Bytes written during the transfer.
        bytes: u64,
    },
    /// The download failed. A partial file may remain at the destination.
    DownloadFailed {
        /// The typed cause of the failure.
        error: InstallError,
    },
}

/// Runs the install flow.
pub struct Installer {
    config: InstallConfig,
    checker: Box<dyn VersionChecker>,
    output: Output,
    theme: FlutterupTheme,
}

impl Installer {
    /// Production installer: command-based presence check.
    pub fn new(config: InstallConfig, mode: OutputMode) -> Self {
        let checker = Box::new(CommandVersionChecker::from_string(&config.tool_command));
        Self::with_checker(config, checker, mode)
    }

    /// Installer with a custom presence check (used by tests).
    pub fn with_checker(
        config: InstallConfig,
        checker: Box<dyn VersionChecker>,
        mode: OutputMode,
    ) -> Self {
        let theme = if should_use_colors() {
            FlutterupTheme::new()
        } else {
            FlutterupTheme::plain()
        };

        Self {
            config,
            checker,
            output: Output::new(mode),
            theme,
        }
    }

    /// Run the flow to completion.
    ///
    /// Never returns an error: download failures are printed and folded
    /// into the outcome, and the closing banner prints in every branch.
    pub fn run(&self) -> InstallOutcome {
        self.print_banner();

        let outcome = match self.checker.check() {
            ToolStatus::Installed { output, version } => {
                tracing::info!("Flutter already installed");
                self.output.println("");
                self.output
                    .println(&self.theme.format_success("Flutter is already installed!"));
                self.output.println(output.trim_end());
                InstallOutcome::AlreadyInstalled { version }
            }
            ToolStatus::NotInstalled => {
                tracing::info!("Flutter not found, installing");
                self.download()
            }
        };

        self.print_closing_banner();
        outcome
    }

    fn download(&self) -> InstallOutcome {
        let url = &self.config.archive_url;
        let dest = &self.config.archive_path;

        self.output.println("");
        self.output
            .println("Flutter not found, downloading the SDK...");
        self.output.println(&format!("URL: {}", url));
        self.output
            .println(&format!("Target: {}", dest.display()));
        self.output.println("");
        self.output
            .println("Downloading... (this can take a few minutes)");

        let downloader = ArchiveDownloader::new(self.config.timeout);
        match downloader.fetch(url, dest, self.output.mode().shows_progress()) {
            Ok(bytes) => {
                tracing::debug!("Transfer finished after {} bytes", bytes);
                self.output.println("");
                self.output
                    .println(&self.theme.format_success("Download complete!"));
                if dest.exists() {
                    self.report_size(dest);
                }
                InstallOutcome::Downloaded { bytes }
            }
            Err(error) => {
                tracing::warn!("Download failed: {}", error);
                self.output
                    .error(&self.theme.format_error(&format!("Download failed: {}", error)));
                InstallOutcome::DownloadFailed { error }
            }
        }
    }

    /// Print the downloaded file's size, read back from disk.
    fn report_size(&self, path: &Path) {
        match std::fs::metadata(path) {
            Ok(meta) => self
                .output
                .println(&format!("File size: {}", format_size_mb(meta.len()))),
            Err(e) => tracing::warn!("Could not stat {}: {}", path.display(), e),
        }
    }

    fn print_banner(&self) {
        self.output.println(&self.theme.rule(BANNER_WIDTH));
        self.output
            .println(&self.theme.format_header("Flutter SDK installer"));
        self.output.println(&self.theme.rule(BANNER_WIDTH));
    }

    fn print_closing_banner(&self) {
        self.output.println("");
        self.output.println(&self.theme.rule(BANNER_WIDTH));
    }
}

/// Format a byte count in mebibytes with one decimal place.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}
