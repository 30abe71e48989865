//! Presence check via the SDK's own command-line tool.
//!
//! Whether Flutter is installed is decided by invoking its version-query
//! subcommand and inspecting the exit status. The check sits behind the
//! [`VersionChecker`] trait so tests can substitute a fake implementation
//! instead of depending on an actually-installed tool.

use std::process::Command;

/// Result of querying the tool for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// The version-query subcommand exited 0.
    Installed {
        /// Captured stdout of the version query, shown to the user.
        output: String,
        /// Best-effort version number extracted from the output.
        version: Option<String>,
    },
    /// Nonzero exit, spawn failure, or tool not on PATH. All three are the
    /// same answer: not installed.
    NotInstalled,
}

impl ToolStatus {
    /// Check whether the tool answered its version query.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

/// Capability interface for the presence check.
pub trait VersionChecker {
    /// Query the host environment for the tool.
    fn check(&self) -> ToolStatus;
}

/// Checks by invoking the tool's version-query subcommand.
pub struct CommandVersionChecker {
    command: String,
    args: Vec<String>,
}

impl CommandVersionChecker {
    /// Create from a full command string, e.g. `flutter --version`.
    pub fn from_string(cmd: &str) -> Self {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let (command, args) = if parts.is_empty() {
            (cmd.to_string(), Vec::new())
        } else {
            (
                parts[0].to_string(),
                parts[1..].iter().map(|s| s.to_string()).collect(),
            )
        };

        Self { command, args }
    }
}

impl VersionChecker for CommandVersionChecker {
    fn check(&self) -> ToolStatus {
        match Command::new(&self.command).args(&self.args).output() {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let version = extract_version(&stdout);
                ToolStatus::Installed {
                    output: stdout,
                    version,
                }
            }
            _ => ToolStatus::NotInstalled,
        }
    }
}

/// Extract a version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
