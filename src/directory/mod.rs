//! Directory and account lookup services
//!
//! The resolver and batch driver only depend on the line-oriented response
//! format, so the transport is hidden behind [`DirectoryService`] and
//! [`AccountLookup`]. [`command`] runs the system lookup tools; [`memory`]
//! serves canned responses.

pub mod command;
pub mod memory;

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::models::SearchFilter;

pub use command::{CommandAccountLookup, LdapSearchDirectory};
pub use memory::{InMemoryAccounts, InMemoryDirectory};

/// Boxed future returned by the lookup traits
pub type LookupFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// A directory that answers equality searches with line-oriented text
pub trait DirectoryService: Send + Sync {
    /// Run a search and return the raw response body
    ///
    /// Implementations bound the call with a timeout; a timeout or transport
    /// fault is returned as an error, a search without matches is not.
    fn search<'a>(&'a self, filter: &'a SearchFilter) -> LookupFuture<'a, String>;
}

/// Per-account lookups used for display and department overrides
pub trait AccountLookup: Send + Sync {
    /// The office recorded for a login identifier
    fn office<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>>;

    /// The account-database entry for a login identifier
    fn passwd_entry<'a>(&'a self, netid: &'a str) -> LookupFuture<'a, Option<String>>;
}

/// An account lookup that knows nothing, for runs with lookups disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccounts;

impl AccountLookup for NoAccounts {
    fn office<'a>(&'a self, _netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async { Ok(None) })
    }

    fn passwd_entry<'a>(&'a self, _netid: &'a str) -> LookupFuture<'a, Option<String>> {
        Box::pin(async { Ok(None) })
    }
}
