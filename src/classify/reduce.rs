//! Reduction of detailed position labels to coarser categories

use std::fmt;

use crate::error::DossierError;

/// Requested granularity for a position label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReductionLevel {
    /// Level 0: the label as classified
    #[default]
    Full = 0,
    /// Level 1: qualifiers removed
    Plain = 1,
    /// Level 2: graduate years and class years grouped
    Grouped = 2,
    /// Level 3: coarsest categories
    Coarse = 3,
}

impl TryFrom<u8> for ReductionLevel {
    type Error = DossierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Full),
            1 => Ok(Self::Plain),
            2 => Ok(Self::Grouped),
            3 => Ok(Self::Coarse),
            other => Err(DossierError::InvalidLevel(other)),
        }
    }
}

impl fmt::Display for ReductionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Labels folded into `Staff` at the coarsest level
const STAFF_LIKE: [&str; 6] = ["XStaff", "Casual", "Scholar", "Lecturer", "Collaborator", "Fellow"];

/// Labels folded into `DCU/RCU/RU` at the coarsest level
const SPONSORED: [&str; 4] = ["DCU", "RCU", "RU", "XDCU"];

/// Collapse `label` to the requested level
#[must_use]
pub fn reduce(label: &str, level: ReductionLevel) -> String {
    match level {
        ReductionLevel::Full => label.to_string(),
        ReductionLevel::Plain => strip_qualifier(label).to_string(),
        ReductionLevel::Grouped => group(strip_qualifier(label)).to_string(),
        ReductionLevel::Coarse => coarsen(label),
    }
}

/// Everything before the first ` (`
fn strip_qualifier(label: &str) -> &str {
    label.split_once(" (").map_or(label, |(head, _)| head)
}

/// `G1` through `G9`
fn is_graduate_year(label: &str) -> bool {
    let mut chars = label.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('G'), Some('1'..='9'), None)
    )
}

fn is_undergraduate(label: &str) -> bool {
    label.starts_with("U20") || label == "U"
}

fn group(label: &str) -> &str {
    if is_undergraduate(label) {
        "Undergrad"
    } else if is_graduate_year(label) {
        "Graduate"
    } else {
        label
    }
}

fn coarsen(label: &str) -> String {
    if let Some(rest) = label.strip_prefix("XFaculty") {
        return coarsen(&format!("Faculty{rest}"));
    }
    if label.starts_with("Alumni (G")
        || label.starts_with("Alumni (formerly G")
        || label.contains("XGraduate")
        || is_graduate_year(label)
    {
        return "Graduate".to_string();
    }
    if STAFF_LIKE.iter().any(|staff| label.contains(staff)) {
        return "Staff".to_string();
    }
    if SPONSORED.iter().any(|code| label.contains(code)) {
        return "DCU/RCU/RU".to_string();
    }
    if is_undergraduate(label) || label.contains("Alumni (U") {
        return "Undergrad".to_string();
    }
    strip_qualifier(label).to_string()
}
