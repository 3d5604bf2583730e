//! Configuration for directory lookups and batch classification.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::classify::ReductionLevel;
use crate::error::{DossierError, Result};
use crate::error::util::safe_read_to_string;

/// Settings for the command-backed directory service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Program used to query the directory
    pub program: String,
    /// Arguments passed before the search filter
    pub base_args: Vec<String>,
    /// Domain appended to a token when falling back to an email search
    pub email_domain: String,
    /// Time limit for a single query, in seconds
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            program: "ldapsearch".to_string(),
            base_args: vec!["-x".to_string()],
            email_domain: "princeton.edu".to_string(),
            timeout_secs: 10,
        }
    }
}

impl DirectoryConfig {
    /// Query time limit as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for the office and sponsor lookups
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Program that reports a user's office
    pub office_program: String,
    /// Program that reports a user's account-database entry
    pub passwd_program: String,
    /// Time limit for a single lookup, in seconds
    pub timeout_secs: u64,
    /// Whether to look up offices at all
    pub lookup_office: bool,
    /// Whether to look up sponsors at all
    pub lookup_sponsor: bool,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            office_program: "finger".to_string(),
            passwd_program: "getent".to_string(),
            timeout_secs: 5,
            lookup_office: true,
            lookup_sponsor: true,
        }
    }
}

impl AccountConfig {
    /// Lookup time limit as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DossierConfig {
    /// Directory service settings
    pub directory: DirectoryConfig,
    /// Office and sponsor lookup settings
    pub accounts: AccountConfig,
    /// Position reduction level (0-3)
    pub reduction_level: u8,
    /// Show a progress bar while classifying
    pub show_progress: bool,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            accounts: AccountConfig::default(),
            reduction_level: 0,
            show_progress: true,
        }
    }
}

impl DossierConfig {
    /// Load a configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "dossier configuration")?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.directory.program.trim().is_empty() {
            return Err(DossierError::config("directory.program must not be empty"));
        }
        if self.directory.email_domain.trim().is_empty() {
            return Err(DossierError::config("directory.email_domain must not be empty"));
        }
        if self.directory.timeout_secs == 0 || self.accounts.timeout_secs == 0 {
            return Err(DossierError::config("timeouts must be at least one second"));
        }
        self.level()?;
        Ok(())
    }

    /// The configured reduction level
    pub fn level(&self) -> Result<ReductionLevel> {
        ReductionLevel::try_from(self.reduction_level)
    }
}
