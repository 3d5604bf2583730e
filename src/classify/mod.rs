//! Position classification
//!
//! Classification works on the raw response lines rather than the structured
//! record: signals are extracted from lower-cased lines into a [`Signals`]
//! bundle, and the ordered rules in [`rules::POSITION_RULES`] pick the label.
//! [`reduce`] then collapses the label to the requested level.

pub mod reduce;
pub mod rules;
pub mod signals;

pub use reduce::{ReductionLevel, reduce};
pub use rules::{POSITION_RULES, PositionRule, Template, UNKNOWN};
pub use signals::Signals;

use crate::models::RawLines;

/// Classify a response into a position label
#[must_use]
pub fn position_from_raw(raw: &RawLines) -> String {
    let signals = Signals::from_lines(&raw.classification_lines());
    rules::evaluate(&signals)
}

/// Classify response lines into a position label
#[must_use]
pub fn position_from_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let raw: RawLines = lines.iter().map(|line| line.as_ref().to_string()).collect();
    position_from_raw(&raw)
}
