//! Test utilities
//!
//! Canned directory entries and lookup services shared by unit and
//! integration tests.

pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{sample_accounts, sample_directory};
pub use helpers::classify_quietly;
