//! Utility functions shared across the crate

pub mod logging;
pub mod test;

use crate::config::DossierConfig;

/// Parse a token list: one token per line, blank and `#` lines ignored
///
/// Surrounding whitespace is trimmed and duplicates are dropped, keeping the
/// first occurrence.
#[must_use]
pub fn parse_tokens(text: &str) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|token| seen.insert(token.to_string()))
        .map(ToString::to_string)
        .collect()
}

/// Default configuration with progress display turned off
#[must_use]
pub fn quiet_config() -> DossierConfig {
    DossierConfig {
        show_progress: false,
        ..Default::default()
    }
}
