//! Flutterup - non-interactive Flutter SDK install helper.
//!
//! Checks whether the Flutter SDK is already on the machine by invoking
//! `flutter --version`; if not, downloads the pinned release archive to a
//! fixed path and reports its size. One linear pass, no prompts, and the
//! process exits 0 whether or not the download succeeds - the console
//! output is the only failure signal.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Install constants and injected configuration
//! - [`detection`] - Presence check via the tool's version query
//! - [`download`] - Archive download over HTTP
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Linear install flow orchestration
//! - [`ui`] - Theme, output modes, and progress display
//!
//! # Example
//!
//! ```no_run
//! use flutterup::config::InstallConfig;
//! use flutterup::installer::Installer;
//! use flutterup::ui::OutputMode;
//!
//! let installer = Installer::new(InstallConfig::default(), OutputMode::Normal);
//! let outcome = installer.run();
//! println!("{:?}", outcome);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod download;
pub mod error;
pub mod installer;
pub mod ui;

pub use error::{InstallError, Result};
