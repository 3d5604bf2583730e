//! Domain models for directory lookups
//!
//! This module contains the records built from directory responses and the
//! rows produced by batch classification.

pub mod record;
pub mod row;
pub mod types;

// Re-export commonly used types
pub use record::{DirectoryRecord, RawLines, full_title};
pub use row::ClassificationRow;
pub use types::{Identity, SearchFilter, Strategy, escape_filter_value};
