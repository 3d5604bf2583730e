//! Common domain type definitions
//!
//! Small value types shared by the resolver, the directory services and the
//! batch driver.

use std::fmt;

/// A directory search filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchFilter {
    /// Equality on the login identifier attribute
    Uid(String),
    /// Equality on the email attribute
    Mail(String),
}

impl SearchFilter {
    /// Attribute name the filter matches on
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Uid(_) => "uid",
            Self::Mail(_) => "mail",
        }
    }

    /// Value the attribute must equal
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Uid(value) | Self::Mail(value) => value,
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attribute(), escape_filter_value(self.value()))
    }
}

/// Escape an assertion value for use in a search filter (RFC 4515)
#[must_use]
pub fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '*' => escaped.push_str("\\2a"),
            '(' => escaped.push_str("\\28"),
            ')' => escaped.push_str("\\29"),
            '\\' => escaped.push_str("\\5c"),
            '\0' => escaped.push_str("\\00"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Which lookup strategy resolved a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Search by login identifier
    Primary,
    /// Search by the email address derived from the token
    Fallback,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "uid"),
            Self::Fallback => write!(f, "mail"),
        }
    }
}

/// The input token and the canonical login identifier it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Token as supplied by the caller; may be an alias
    pub token: String,
    /// Canonical login identifier, absent when resolution failed
    pub true_id: Option<String>,
}

impl Identity {
    /// An identity that did not resolve
    #[must_use]
    pub fn unresolved(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            true_id: None,
        }
    }

    /// An identity that resolved to `true_id`
    #[must_use]
    pub fn resolved(token: impl Into<String>, true_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            true_id: Some(true_id.into()),
        }
    }

    /// Whether the token was an alias for a different identifier
    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.true_id.as_deref().is_some_and(|id| id != self.token)
    }
}
