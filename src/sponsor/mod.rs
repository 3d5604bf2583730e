//! Sponsor names from account-database entries
//!
//! The sponsor is recorded as the last comma segment of the comment (GECOS)
//! field of a `passwd`-style line. Only the sponsor's last name is kept for
//! display.

/// Index of the comment field in a colon-delimited account entry
const GECOS_FIELD: usize = 4;

/// Generational suffixes dropped before picking a last name
const SUFFIXES: [&str; 4] = ["Jr.", "II", "III", "IV"];

/// Extract and format the sponsor from an account entry
///
/// Returns `None` when the entry has no comment field or the sponsor segment
/// is blank.
#[must_use]
pub fn sponsor_from_passwd(entry: &str) -> Option<String> {
    let gecos = entry.lines().next()?.split(':').nth(GECOS_FIELD)?;
    let sponsor = gecos.rsplit(',').next()?.trim();
    if sponsor.is_empty() {
        None
    } else {
        Some(format_sponsor(sponsor))
    }
}

/// Reduce a full sponsor name to the part used for display
///
/// Generational suffixes are dropped. With two names the second is used
/// unless it is a single letter. With more names, leading initials are
/// skipped and everything after the first remaining initial is used, or the
/// final name when there is none.
#[must_use]
pub fn format_sponsor(sponsor: &str) -> String {
    let names: Vec<&str> = sponsor
        .split_whitespace()
        .filter(|name| !SUFFIXES.contains(name))
        .collect();

    match names.as_slice() {
        [] => sponsor.trim().to_string(),
        [only] => (*only).to_string(),
        [_, last] => {
            if last.chars().count() > 1 {
                (*last).to_string()
            } else {
                sponsor.to_string()
            }
        }
        _ => {
            let rest: Vec<&str> = names
                .iter()
                .copied()
                .skip_while(|name| name.ends_with('.'))
                .collect();
            match rest.iter().position(|name| name.ends_with('.')) {
                Some(idx) => rest[idx + 1..].join(" "),
                None => rest
                    .last()
                    .map_or_else(|| sponsor.trim().to_string(), |name| (*name).to_string()),
            }
        }
    }
}
