//! Test helper functions

use crate::batch::{BatchDriver, BatchReport};
use crate::classify::ReductionLevel;
use crate::directory::{AccountLookup, DirectoryService};
use crate::utils::quiet_config;

/// Classify tokens against the given services with progress display off
pub async fn classify_quietly<D, A>(
    directory: &D,
    accounts: &A,
    tokens: &[&str],
    level: ReductionLevel,
) -> BatchReport
where
    D: DirectoryService + ?Sized,
    A: AccountLookup + ?Sized,
{
    let config = quiet_config();
    BatchDriver::new(directory, accounts, &config)
        .classify(tokens, level)
        .await
}
