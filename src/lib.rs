//! A Rust library for resolving directory identities and classifying people
//! into position and department categories.

pub mod batch;
pub mod classify;
pub mod config;
pub mod department;
pub mod directory;
pub mod error;
pub mod models;
pub mod output;
pub mod resolver;
pub mod sponsor;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AccountConfig, DirectoryConfig, DossierConfig};
pub use error::{DossierError, Result};
pub use models::{ClassificationRow, DirectoryRecord, Identity, RawLines, SearchFilter, Strategy};

// Classification
pub use classify::{ReductionLevel, UNKNOWN, position_from_lines, position_from_raw, reduce};
pub use department::{NOT_FOUND, dept_code, dept_code_with_office};

// Lookups
pub use directory::{
    AccountLookup, CommandAccountLookup, DirectoryService, InMemoryAccounts, InMemoryDirectory,
    LdapSearchDirectory, NoAccounts,
};
pub use resolver::{AliasResolver, Resolution, ResolutionOutcome};

// Batch processing and output
pub use batch::{BatchDriver, BatchReport};
pub use output::{OutputFormat, write_rows};
