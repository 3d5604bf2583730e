//! Directory records built from line-oriented responses
//!
//! A directory response is a sequence of `field: value` lines, comment lines
//! prefixed with `#`, and continuation lines that start with a single space.
//! [`RawLines`] keeps the response as received; [`DirectoryRecord`] is the
//! multi-valued field map built from it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{DossierError, Result};

/// Marker that starts comment lines and is stripped from field names
pub const COMMENT_MARKER: char = '#';

/// Field carrying the job title, which may wrap onto continuation lines
pub const TITLE_FIELD: &str = "title";

/// Field carrying the trailing count of matching entries
pub const COUNT_FIELD: &str = "numResponses";

/// Name fields whose values may arrive base64 encoded (`field:: value`)
pub const ENCODED_NAME_FIELDS: [&str; 4] = ["displayName", "cn", "sn", "givenName"];

type Values = SmallVec<[String; 1]>;

/// Multi-valued mapping from field name to values, in order of occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRecord {
    fields: FxHashMap<String, Values>,
}

impl DirectoryRecord {
    /// Build a record from raw response lines
    ///
    /// Every line containing a colon contributes one value. Duplicate fields
    /// accumulate in order. The title is reassembled from its continuation
    /// lines and replaces whatever fragment the line scan captured.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut fields: FxHashMap<String, Values> = FxHashMap::default();

        for line in lines {
            let Some((field, value)) = split_field(line.as_ref()) else {
                continue;
            };
            let value = if ENCODED_NAME_FIELDS.contains(&field.as_str()) {
                decode_value(value)
            } else {
                value.to_string()
            };
            fields.entry(field).or_default().push(value);
        }

        if fields.contains_key(TITLE_FIELD) {
            let mut title = Values::new();
            title.push(full_title(lines));
            fields.insert(TITLE_FIELD.to_string(), title);
        }

        Self { fields }
    }

    /// All values of a field, empty when the field is absent
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .map(|values| values.as_slice())
            .unwrap_or_default()
    }

    /// First value of a field
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// All values of a field joined with `sep`, or `None` when absent
    #[must_use]
    pub fn joined(&self, field: &str, sep: &str) -> Option<String> {
        let values = self.get(field);
        if values.is_empty() {
            None
        } else {
            Some(itertools::join(values, sep))
        }
    }

    /// Whether the field occurs at all
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The reassembled title; empty when the record has none
    #[must_use]
    pub fn title(&self) -> &str {
        self.first(TITLE_FIELD).unwrap_or("")
    }

    /// The trailing count of matching entries reported by the directory
    #[must_use]
    pub fn num_responses(&self) -> Option<usize> {
        self.first(COUNT_FIELD)
            .and_then(|count| count.trim().parse().ok())
    }

    /// Number of distinct fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no line contributed a field
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `field: value` at the first colon, stripping the comment marker
fn split_field(line: &str) -> Option<(String, &str)> {
    let (field, value) = line.split_once(':')?;
    let field = field.replace(COMMENT_MARKER, "").trim().to_string();
    Some((field, value.trim()))
}

/// Decode an LDIF-style encoded value (`:: base64`), keeping it raw on failure
fn decode_value(value: &str) -> String {
    let Some(encoded) = value.strip_prefix(':') else {
        return value.to_string();
    };
    let encoded = encoded.trim();
    decode_base64(encoded).unwrap_or_else(|e| {
        log::debug!("Keeping undecodable value {encoded:?}: {e}");
        encoded.to_string()
    })
}

/// Decode a base64 value as UTF-8
pub fn decode_base64(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| DossierError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DossierError::Decode(e.to_string()))
}

/// Reassemble the title field from its first line and continuation lines
///
/// Continuation lines lose exactly one leading character and are appended
/// as they are, since the directory folds long values mid-word. The scan
/// stops at the first empty line or line containing a colon. Returns an
/// empty string when there is no title line.
pub fn full_title<S: AsRef<str>>(lines: &[S]) -> String {
    let mut iter = lines.iter().map(|line| line.as_ref());

    let first = iter.by_ref().find_map(|line| {
        let (field, value) = line.split_once(':')?;
        (field.replace(COMMENT_MARKER, "").trim() == TITLE_FIELD)
            .then(|| value.trim_start().to_string())
    });
    let Some(mut title) = first else {
        return String::new();
    };

    for line in iter {
        if line.is_empty() || line.contains(':') {
            break;
        }
        title.push_str(unfold(line));
    }

    title.trim_end().to_string()
}

/// A continuation line without its single leading fold character
fn unfold(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

/// The unparsed lines of a single directory response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLines {
    lines: Vec<String>,
}

impl RawLines {
    /// Wrap lines as received
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split a response body into lines, dropping carriage returns
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect(),
        }
    }

    /// The lines as received
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Build the structured record for these lines
    #[must_use]
    pub fn to_record(&self) -> DirectoryRecord {
        DirectoryRecord::from_lines(&self.lines)
    }

    /// Lower-cased lines for signal scanning
    ///
    /// Comment lines are skipped and continuation lines are folded into the
    /// field line they continue, so a wrapped title is scanned as one line.
    #[must_use]
    pub fn classification_lines(&self) -> Vec<String> {
        let mut folded: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let is_continuation = line.starts_with([' ', '\t']) && !line.contains(':');
            match folded.last_mut() {
                Some(previous) if is_continuation => {
                    previous.push_str(&unfold(line).to_lowercase());
                }
                _ => folded.push(line.to_lowercase()),
            }
        }
        folded
    }
}

impl<S: Into<String>> FromIterator<S> for RawLines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
