//! In-memory lookup services
//!
//! Canned responses keyed by search filter, formatted the way `ldapsearch`
//! prints them. Used for tests and dry runs.

use std::sync::{Mutex, PoisonError};

use rustc_hash::{FxHashMap, FxHashSet};

use super::{AccountLookup, DirectoryService, LookupFuture};
use crate::error::DossierError;
use crate::models::SearchFilter;

/// Render a search response with the given entries
///
/// The trailing count line reports one response per entry plus the search
/// result itself, so a single match reports `numResponses: 2`.
#[must_use]
pub fn ldif_response<S: AsRef<str>>(filter: &SearchFilter, entries: &[Vec<S>]) -> String {
    let mut out = String::new();
    out.push_str("# extended LDIF\n#\n# LDAPv3\n");
    out.push_str(&format!("# filter: {filter}\n# requesting: ALL\n#\n\n"));
    for entry in entries {
        for line in entry {
            out.push_str(line.as_ref());
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("# search result\nsearch: 2\nresult: 0 Success\n\n");
    out.push_str(&format!(
        "# numResponses: {}\n",
        entries.len() + 1
    ));
    if !entries.is_empty() {
        out.push_str(&format!("# numEntries: {}\n", entries.len()));
    }
    out
}

/// A directory answering from a fixed set of responses
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    responses: FxHashMap<SearchFilter, String>,
    failing: FxHashSet<SearchFilter>,
    queries: Mutex<Vec<SearchFilter>>,
}

impl InMemoryDirectory {
    /// An empty directory: every search returns zero matches
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person reachable by `uid=<uid>`
    #[must_use]
    pub fn with_person<S: AsRef<str>>(self, uid: &str, lines: &[S]) -> Self {
        let filter = SearchFilter::Uid(uid.to_string());
        let entry = entry_lines(uid, lines);
        let body = ldif_response(&filter, &[entry]);
        self.with_response(filter, body)
    }

    /// Register a person reachable only by `mail=<address>`
    #[must_use]
    pub fn with_mail<S: AsRef<str>>(self, address: &str, uid: &str, lines: &[S]) -> Self {
        let filter = SearchFilter::Mail(address.to_string());
        let entry = entry_lines(uid, lines);
        let body = ldif_response(&filter, &[entry]);
        self.with_response(filter, body)
    }

    /// Register a raw response body for a filter
    #[must_use]
    pub fn with_response(mut self, filter: SearchFilter, body: impl Into<String>) -> Self {
        self.responses.insert(filter, body.into());
        self
    }

    /// Make searches with `filter` fail as if the directory timed out
    #[must_use]
    pub fn with_failure(mut self, filter: SearchFilter) -> Self {
        self.failing.insert(filter);
        self
    }

    /// Filters searched so far, in order
    #[must_use]
    pub fn queries(&self) -> Vec<SearchFilter> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn entry_lines<S: AsRef<str>>(uid: &str, lines: &[S]) -> Vec<String> {
    let mut entry = vec![
        format!("# {uid}, people, directory"),
        format!("dn: uid={uid},o=directory"),
    ];
    if !lines.iter().any(|line| line.as_ref().starts_with("uid:")) {
        entry.push(format!("uid: {uid}"));
    }
    entry.extend(lines.iter().map(|line| line.as_ref().to_string()));
    entry
}

impl DirectoryService for InMemoryDirectory {
    fn search<'a>(&'a self, filter: &'a SearchFilter) -> LookupFuture<'a, String> {
        Box::pin(async move {
            self.queries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(filter.clone());

            if self.failing.contains(filter) {
                return Err(DossierError::Timeout {
                    command: format!("search {filter}"),
                    seconds: 0,
                });
            }
            Ok(self.responses.get(filter).cloned().unwrap_or_else(|| {
                let none: &[Vec<String>] = &[];
                ldif_response(filter, none)
            }))
        })
    }
}

/// Offices and account entries held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    offices: FxHashMap<String, String>,
    entries: FxHashMap<String, String>,
    failing: FxHashSet<String>,
}

impl InMemoryAccounts {
    /// No offices and no entries
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an office for a login identifier
    #[must_use]
    pub fn with_office(mut self, netid: &str, office: &str) -> Self {
        self.offices.insert(netid.to_string(), office.to_string());
        self
    }

    /// Record an account-database entry for a login identifier
    #[must_use]
    pub fn with_passwd(mut self, netid: &str, entry: &str) -> Self {
        self.entries.insert(netid.to_string(), entry.to_string());
        self
    }

    /// Make every lookup for `netid` fail
    #[must_use]
    pub fn with_failure(mut self, netid: &str) -> Self {
        self.failing.insert(netid.to_string());
        self
    }

    fn check(&self, netid: &str) -> crate::error::Result<()> {
        if self.failing.contains(netid) {
            Err(DossierError::Timeout {
                command: format!("lookup {netid}"),
                seconds: 0,
            })
        } else {
            Ok(())
        }
    }
}

impl AccountLookup for InMemoryAccounts {
    fn office<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async move {
            self.check(netid)?;
            Ok(self.offices.get(netid).cloned())
        })
    }

    fn passwd_entry<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async move {
            self.check(netid)?;
            Ok(self.entries.get(netid).cloned())
        })
    }
}
