//! Alias resolution
//!
//! A token is first searched as a login identifier. When that does not yield
//! exactly one entry, it is assumed to be an email local part and searched
//! again as `<token>@<domain>`. Each attempt is run once; a transport fault is
//! recorded against that attempt and never escapes the token.

use std::fmt;

use crate::directory::DirectoryService;
use crate::error::DossierError;
use crate::models::{DirectoryRecord, Identity, RawLines, SearchFilter, Strategy};

/// Response count reported for exactly one matching entry (entry + result)
pub const EXPECTED_RESPONSES: usize = 2;

/// Field holding the canonical login identifier
pub const LOGIN_FIELD: &str = "uid";

/// A directory response and the record built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Lines as received
    pub raw: RawLines,
    /// Structured record built from `raw`
    pub record: DirectoryRecord,
}

impl Lookup {
    /// Parse a response body
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let raw = RawLines::from_text(text);
        let record = raw.to_record();
        Self { raw, record }
    }
}

/// Result of a single search attempt
#[derive(Debug)]
pub enum AttemptOutcome {
    /// Exactly one entry matched
    Matched(Box<Lookup>),
    /// The search ran but did not match exactly one entry
    NoMatch {
        /// Reported response count, if the response carried one
        responses: Option<usize>,
    },
    /// The search could not be run
    Failed(DossierError),
}

impl AttemptOutcome {
    /// Whether the attempt raised a transport fault
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Final outcome of resolving one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// One of the strategies matched exactly one entry
    Resolved(Strategy),
    /// Neither strategy matched
    NotFound,
    /// Both strategies failed with transport faults
    Unreachable,
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(strategy) => write!(f, "resolved by {strategy}"),
            Self::NotFound => write!(f, "not found"),
            Self::Unreachable => write!(f, "directory unreachable"),
        }
    }
}

/// Everything learned while resolving one token
#[derive(Debug)]
pub struct Resolution {
    /// Input token and resolved identifier
    pub identity: Identity,
    /// How resolution ended
    pub outcome: ResolutionOutcome,
    /// The matching response when resolved
    pub lookup: Option<Lookup>,
    /// The primary search raised a transport fault
    pub primary_exception: bool,
    /// The fallback search raised a transport fault
    pub fallback_exception: bool,
}

impl Resolution {
    /// Whether the token resolved to an identifier
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.outcome, ResolutionOutcome::Resolved(_))
    }
}

/// Resolves tokens, which may be aliases, to canonical login identifiers
pub struct AliasResolver<'a, D: DirectoryService + ?Sized> {
    directory: &'a D,
    email_domain: String,
}

impl<'a, D: DirectoryService + ?Sized> AliasResolver<'a, D> {
    /// Create a resolver that falls back to `<token>@<email_domain>`
    pub fn new(directory: &'a D, email_domain: impl Into<String>) -> Self {
        Self {
            directory,
            email_domain: email_domain.into(),
        }
    }

    /// The filter for a strategy
    #[must_use]
    pub fn filter_for(&self, token: &str, strategy: Strategy) -> SearchFilter {
        match strategy {
            Strategy::Primary => SearchFilter::Uid(token.to_string()),
            Strategy::Fallback => SearchFilter::Mail(format!("{token}@{}", self.email_domain)),
        }
    }

    /// Run one search and classify its response
    pub async fn attempt(&self, filter: &SearchFilter) -> AttemptOutcome {
        match self.directory.search(filter).await {
            Ok(body) => {
                let lookup = Lookup::from_text(&body);
                let responses = lookup.record.num_responses();
                if responses == Some(EXPECTED_RESPONSES) {
                    AttemptOutcome::Matched(Box::new(lookup))
                } else {
                    AttemptOutcome::NoMatch { responses }
                }
            }
            Err(e) => {
                log::warn!("Search {filter} failed: {e}");
                AttemptOutcome::Failed(e)
            }
        }
    }

    /// Resolve a token with the primary strategy, then the fallback
    pub async fn resolve(&self, token: &str) -> Resolution {
        let mut resolution = Resolution {
            identity: Identity::unresolved(token),
            outcome: ResolutionOutcome::NotFound,
            lookup: None,
            primary_exception: false,
            fallback_exception: false,
        };
        if token.trim().is_empty() {
            log::debug!("Skipping empty token");
            return resolution;
        }

        for strategy in [Strategy::Primary, Strategy::Fallback] {
            let filter = self.filter_for(token, strategy);
            match self.attempt(&filter).await {
                AttemptOutcome::Matched(lookup) => {
                    let Some(true_id) = lookup.record.first(LOGIN_FIELD).map(str::to_string)
                    else {
                        log::warn!("Search {filter} matched an entry without a {LOGIN_FIELD} value");
                        continue;
                    };
                    if true_id != token {
                        log::debug!("Token {token} is an alias for {true_id}");
                    }
                    resolution.identity = Identity::resolved(token, true_id);
                    resolution.outcome = ResolutionOutcome::Resolved(strategy);
                    resolution.lookup = Some(*lookup);
                    return resolution;
                }
                AttemptOutcome::NoMatch { responses } => {
                    log::debug!("Search {filter} returned {responses:?} responses");
                }
                AttemptOutcome::Failed(_) => match strategy {
                    Strategy::Primary => resolution.primary_exception = true,
                    Strategy::Fallback => resolution.fallback_exception = true,
                },
            }
        }

        if resolution.primary_exception && resolution.fallback_exception {
            resolution.outcome = ResolutionOutcome::Unreachable;
        }
        log::info!("Token {token}: {}", resolution.outcome);
        resolution
    }
}
