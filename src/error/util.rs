//! Utility functions for error handling
//!
//! Helpers that attach context to file access failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DossierError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(DossierError::other(format!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(DossierError::other(format!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )));
    }

    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text"
                }
                _ => "Failed to read file content",
            };
            Err(DossierError::Io(io::Error::new(
                e.kind(),
                format!("{context}: {} ({purpose}): {e}", path.display()),
            )))
        }
    }
}
