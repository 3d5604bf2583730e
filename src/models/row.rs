//! The output row of batch classification

use serde::Serialize;

/// One classified person, or a token that could not be resolved
///
/// Every field except `netid` is `None` when the lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ClassificationRow {
    /// Display name
    pub name: Option<String>,
    /// Department code
    pub dept: Option<String>,
    /// Position label at the requested reduction level
    pub position: Option<String>,
    /// Reassembled job title
    pub title: Option<String>,
    /// All status values joined
    pub status: Option<String>,
    /// All affiliation values joined
    #[serde(rename = "AFFIL")]
    pub affiliation: Option<String>,
    /// All academic-level values joined
    pub acad_level: Option<String>,
    /// Token as supplied
    pub netid: String,
    /// Resolved login identifier
    pub netid_true: Option<String>,
    /// Office reported by the account lookup
    pub office: Option<String>,
    /// Formatted sponsor name
    pub sponsor: Option<String>,
}

impl ClassificationRow {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 11] = [
        "NAME",
        "DEPT",
        "POSITION",
        "TITLE",
        "STATUS",
        "AFFIL",
        "ACAD_LEVEL",
        "NETID",
        "NETID_TRUE",
        "OFFICE",
        "SPONSOR",
    ];

    /// A row for a token that did not resolve
    #[must_use]
    pub fn not_found(netid: impl Into<String>) -> Self {
        Self {
            netid: netid.into(),
            ..Default::default()
        }
    }

    /// Whether every resolved field is empty
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        self.netid_true.is_none()
    }

    /// Field values in column order
    #[must_use]
    pub fn values(&self) -> [Option<&str>; 11] {
        [
            self.name.as_deref(),
            self.dept.as_deref(),
            self.position.as_deref(),
            self.title.as_deref(),
            self.status.as_deref(),
            self.affiliation.as_deref(),
            self.acad_level.as_deref(),
            Some(self.netid.as_str()),
            self.netid_true.as_deref(),
            self.office.as_deref(),
            self.sponsor.as_deref(),
        ]
    }
}
