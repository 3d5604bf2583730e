//! Progress reporting utilities for long-running operations
//!
//! This module provides standardized progress reporting functionality
//! for batch lookups, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a main progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total length for the progress bar
/// * `description` - Optional description to display as the initial message
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_MAIN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Create a progress bar, or a hidden one when progress display is off
#[must_use]
pub fn progress_bar(length: u64, description: Option<&str>, visible: bool) -> ProgressBar {
    if visible {
        create_main_progress_bar(length, description)
    } else {
        ProgressBar::hidden()
    }
}

/// Finish a progress bar and clear it from display
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish and clear
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
