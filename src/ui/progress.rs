//! Download progress display.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for a transfer of `total` bytes.
///
/// Byte-styled bar when the server sent a Content-Length, spinner
/// otherwise. Hidden entirely when `visible` is false (quiet mode, tests).
pub fn download_bar(total: Option<u64>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:30.magenta} {bytes}/{total_bytes} ({eta})")
                    .unwrap()
                    .progress_chars("=> "),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner:.magenta} {bytes} downloaded")
                    .unwrap(),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        }
    }
}
