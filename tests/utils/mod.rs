use std::time::Instant;

use dossier::utils::quiet_config;
use dossier::{BatchDriver, BatchReport, DirectoryService, InMemoryDirectory, NoAccounts, ReductionLevel};

/// A directory holding a single person under `uid`
#[must_use]
pub fn single_person(uid: &str, lines: &[&str]) -> InMemoryDirectory {
    InMemoryDirectory::new().with_person(uid, lines)
}

/// Classify tokens without office or sponsor lookups
pub async fn classify_without_accounts<D: DirectoryService>(
    directory: &D,
    tokens: &[&str],
    level: ReductionLevel,
) -> BatchReport {
    let config = quiet_config();
    let start = Instant::now();
    let report = BatchDriver::new(directory, &NoAccounts, &config)
        .classify(tokens, level)
        .await;
    println!("Classified {} tokens in {:?}", tokens.len(), start.elapsed());
    report
}
