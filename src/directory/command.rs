//! Lookups backed by external commands
//!
//! Each lookup spawns one process with the query as a separate argument (no
//! shell) and waits for it under a timeout. The process is killed if the
//! timeout fires.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::{AccountLookup, DirectoryService, LookupFuture};
use crate::config::{AccountConfig, DirectoryConfig};
use crate::error::{DossierError, Result};
use crate::models::{DirectoryRecord, RawLines, SearchFilter};

/// Field reported by the office lookup
const OFFICE_FIELD: &str = "Office";

/// Run `program args...` and return its standard output
pub async fn run_command(program: &str, args: &[String], timeout: Duration) -> Result<String> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    log::debug!("Running `{command_line}`");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(timeout, child).await {
        Ok(output) => output?,
        Err(_) => {
            return Err(DossierError::Timeout {
                command: command_line,
                seconds: timeout.as_secs(),
            });
        }
    };

    if !output.status.success() {
        return Err(DossierError::CommandFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Directory searches through an `ldapsearch`-style program
#[derive(Debug, Clone)]
pub struct LdapSearchDirectory {
    program: String,
    base_args: Vec<String>,
    timeout: Duration,
}

impl LdapSearchDirectory {
    /// Create a directory service from configuration
    #[must_use]
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            program: config.program.clone(),
            base_args: config.base_args.clone(),
            timeout: config.timeout(),
        }
    }

    /// Arguments for a search
    #[must_use]
    pub fn args_for(&self, filter: &SearchFilter) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.push(filter.to_string());
        args
    }
}

impl DirectoryService for LdapSearchDirectory {
    fn search<'a>(&'a self, filter: &'a SearchFilter) -> LookupFuture<'a, String> {
        Box::pin(async move {
            let args = self.args_for(filter);
            run_command(&self.program, &args, self.timeout).await
        })
    }
}

/// Office and account-entry lookups through `finger`- and `getent`-style programs
#[derive(Debug, Clone)]
pub struct CommandAccountLookup {
    office_program: String,
    passwd_program: String,
    timeout: Duration,
}

impl CommandAccountLookup {
    /// Create an account lookup from configuration
    #[must_use]
    pub fn new(config: &AccountConfig) -> Self {
        Self {
            office_program: config.office_program.clone(),
            passwd_program: config.passwd_program.clone(),
            timeout: config.timeout(),
        }
    }
}

/// The office value from an office-lookup response
#[must_use]
pub fn parse_office(response: &str) -> Option<String> {
    let record: DirectoryRecord = RawLines::from_text(response).to_record();
    record
        .first(OFFICE_FIELD)
        .map(str::trim)
        .filter(|office| !office.is_empty())
        .map(ToString::to_string)
}

impl AccountLookup for CommandAccountLookup {
    fn office<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async move {
            let response =
                run_command(&self.office_program, &[netid.to_string()], self.timeout).await?;
            Ok(parse_office(&response))
        })
    }

    fn passwd_entry<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async move {
            let args = ["passwd".to_string(), netid.to_string()];
            match run_command(&self.passwd_program, &args, self.timeout).await {
                Ok(response) => Ok(response
                    .lines()
                    .next()
                    .filter(|line| !line.trim().is_empty())
                    .map(ToString::to_string)),
                // getent exits non-zero when the key is unknown
                Err(DossierError::CommandFailed { stderr, .. }) if stderr.is_empty() => Ok(None),
                Err(e) => Err(e),
            }
        })
    }
}
