//! Terminal output components.
//!
//! This module provides:
//! - [`FlutterupTheme`] for console styling
//! - [`Output`] and [`OutputMode`] for verbosity-gated printing
//! - [`download_bar`] for the transfer progress display

pub mod output;
pub mod progress;
pub mod theme;

pub use output::{Output, OutputMode};
pub use progress::download_bar;
pub use theme::{should_use_colors, FlutterupTheme};
