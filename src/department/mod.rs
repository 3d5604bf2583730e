//! Department name to code resolution
//!
//! Department names from the directory are mapped to short codes through a
//! static table. Unresolved names map to [`NOT_FOUND`] and are logged so the
//! table can be extended.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Sentinel returned for department names missing from the table
pub const NOT_FOUND: &str = "NOT_FOUND_IN_DOSSIER_DEPTS";

/// Department name used by the directory when none is recorded
pub const UNSPECIFIED: &str = "Unspecified Department";

/// Prefix of the class-year placeholder departments given to undergraduates
pub const CLASS_YEAR_PREFIX: &str = "Undergraduate Class of";

/// Primary affiliation that defers to the office for a department
pub const AFFILIATE: &str = "affiliate";

const DEPARTMENTS: &[(&str, &str)] = &[
    ("Advanced Projects, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Andlinger Center for Energy and the Environment", "ACEE"),
    ("Anthropology", "ANT"),
    ("Applied and Computational Mathematics", "PACM"),
    ("Architecture", "ARC"),
    ("Astrophysical Sciences", "ASTRO"),
    ("Astrophysical Sciences, Plasma Physics Laboratory", "ASTRO/PPPL"),
    ("Atmospheric and Oceanic Sciences", "AOS"),
    ("Bendheim Center for Finance", "BCF"),
    ("Center for Statistics and Machine Learning", "CSML"),
    ("Chemical and Biological Engineering", "CBE"),
    ("Chemistry", "CHEM"),
    ("Civil and Environmental Engineering", "CEE"),
    ("Computer Science", "COS"),
    ("Ecology and Evolutionary Biology", "EEB"),
    ("Economics", "ECON"),
    ("Electrical Engineering", "EE"),
    ("Electrical and Computer Engineering", "ECE"),
    ("Engineering and Technical Infrastructure, Princeton Plasma Physics Lab", "PPPL"),
    ("Enterprise Infrastructure Services, Office of Information Technology", "OIT"),
    ("Fusion Simulation Program, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Geosciences", "GEO"),
    ("High Meadows Environmental Institute", "HMEI"),
    ("ITER and Tokamaks, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Information Technology, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Lewis-Sigler Institute for Integrative Genomics", "LSI"),
    ("Library - Information Technology", "LIBRARY"),
    ("Mathematics", "MATH"),
    ("Mechanical and Aerospace Engineering", "MAE"),
    ("Molecular Biology", "MOLBIO"),
    ("Office of the Director, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Operations Research and Financial Engineering", "ORFE"),
    ("Physics", "PHYS"),
    ("Plasma Science and Technology, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Politics", "POLITICS"),
    ("Princeton Center for Theoretical Science", "PCTS"),
    ("Princeton Environmental Institute", "PEI"),
    ("Princeton Institute for Computational Science and Engineering", "PICSciE"),
    ("Princeton Institute for International and Regional Studies", "PIIRS"),
    ("Princeton Institute for the Science and Technology of Materials", "PRISM"),
    ("Princeton Materials Institute", "PRISM"),
    ("Princeton Neuroscience Institute", "PNI"),
    ("Princeton School of Public and International Affairs", "SPIA"),
    ("Psychology", "PSYCH"),
    ("Quantitative and Computational Biology", "QCB"),
    ("Research Computing, Office of Information Technology", "CSES"),
    ("Sociology", "SOC"),
    ("Special Student", "SPECIAL"),
    ("Theory Department, Princeton Plasma Physics Laboratory", "PPPL"),
    ("Undergraduate Class of 2019", "UDG2019"),
    ("Undergraduate Class of 2020", "UDG2020"),
    ("Undergraduate Class of 2021", "UDG2021"),
    ("Undergraduate Class of 2022", "UDG2022"),
    ("Undergraduate Class of 2023", "UDG2023"),
    ("Undergraduate Class of 2024", "UDG2024"),
    ("Undergraduate Class of 2025", "UDG2025"),
    ("Undergraduate Class of 2026", "UDG2026"),
    ("Undergraduate Class of 2027", "UDG2027"),
    ("Undergraduate Class of 2028", "UDG2028"),
    ("Undergraduate Class of 2029", "UDG2029"),
    ("Unspecified Department", "UNSPECIFIED"),
    ("Woodrow Wilson School", "WWS"),
];

/// Office names that do not upper-case to their department code
const OFFICE_SYNONYMS: &[(&str, &str)] = &[
    ("ASTROPHYSICAL SCIENCES", "ASTRO"),
    ("CHEMICAL AND BIOLOGICAL ENGINEERING", "CBE"),
    ("CHEMISTRY", "CHEM"),
    ("COMPUTER SCIENCE", "COS"),
    ("ECONOMICS", "ECON"),
    ("ELECTRICAL ENGINEERING", "EE"),
    ("ELECTRICAL AND COMPUTER ENGINEERING", "ECE"),
    ("GEOSCIENCES", "GEO"),
    ("MATHEMATICS", "MATH"),
    ("MECHANICAL AND AEROSPACE ENGINEERING", "MAE"),
    ("MOLECULAR BIOLOGY", "MOLBIO"),
    ("NEUROSCIENCE", "PNI"),
    ("PHYSICS", "PHYS"),
    ("PLASMA PHYSICS LAB", "PPPL"),
    ("PSYCHOLOGY", "PSYCH"),
];

lazy_static! {
    static ref DEPARTMENT_CODES: FxHashMap<&'static str, &'static str> =
        DEPARTMENTS.iter().copied().collect();
    static ref OFFICE_CODES: FxHashMap<&'static str, &'static str> =
        OFFICE_SYNONYMS.iter().copied().collect();
}

/// Look up a department name in the static table
#[must_use]
pub fn lookup(dept: &str) -> Option<&'static str> {
    DEPARTMENT_CODES.get(dept).copied()
}

/// Resolve a department to its code
///
/// When `dept` is the unspecified placeholder and `alt_dept` is known, the
/// alternate department wins. A name missing from the table resolves to
/// [`NOT_FOUND`] and is logged with `subject` for the operator.
#[must_use]
pub fn dept_code(dept: &str, alt_dept: &str, subject: &str) -> String {
    if dept == UNSPECIFIED {
        if let Some(code) = lookup(alt_dept) {
            return code.to_string();
        }
    }
    match lookup(dept) {
        Some(code) => code.to_string(),
        None => {
            log::warn!("Department {dept:?} (alternate {alt_dept:?}) for {subject:?} is not in the department table");
            NOT_FOUND.to_string()
        }
    }
}

/// Whether the department should be taken from the office instead of the table
#[must_use]
pub fn defers_to_office(dept: &str, primary_affiliation: &str) -> bool {
    dept == UNSPECIFIED
        || dept.starts_with(CLASS_YEAR_PREFIX)
        || primary_affiliation.eq_ignore_ascii_case(AFFILIATE)
}

/// Derive a department code from an office string
///
/// The first comma-separated segment is upper-cased and passed through the
/// office synonym table. Returns `None` for a blank office.
#[must_use]
pub fn office_code(office: &str) -> Option<String> {
    let segment = office.split(',').next().unwrap_or("").trim();
    if segment.is_empty() {
        return None;
    }
    let upper = segment.to_uppercase();
    Some(
        OFFICE_CODES
            .get(upper.as_str())
            .map_or(upper, |code| (*code).to_string()),
    )
}

/// Resolve a department, letting the office override placeholder departments and affiliates
#[must_use]
pub fn dept_code_with_office(
    dept: &str,
    alt_dept: &str,
    primary_affiliation: &str,
    office: Option<&str>,
    subject: &str,
) -> String {
    if defers_to_office(dept, primary_affiliation) {
        if let Some(code) = office.and_then(office_code) {
            return code;
        }
    }
    dept_code(dept, alt_dept, subject)
}
