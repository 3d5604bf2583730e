use dossier::classify::{POSITION_RULES, Signals, position_from_lines};
use dossier::{RawLines, UNKNOWN, position_from_raw};

#[test]
fn test_scenario_faculty() {
    assert_eq!(position_from_lines(&["pustatus: fac", "title: Professor of"]), "Faculty");
}

#[test]
fn test_scenario_graduate_alumni() {
    assert_eq!(
        position_from_lines(&["puacademiclevel: G5", "pustatus: alumg"]),
        "Alumni (formerly G5)"
    );
}

#[test]
fn test_faculty_professor_variants() {
    let titles = [
        "title: Professor of Chemistry",
        "title: Assistant Professor",
        "title: PROFESSOR OF PHYSICS",
        "title: Associate Professor of Computer Science",
    ];
    for title in titles {
        assert_eq!(position_from_lines(&["pustatus: fac", title]), "Faculty", "{title}");
    }
}

#[test]
fn test_emeritus_overrides_other_branches() {
    let cases: [&[&str]; 4] = [
        &["pustatus: fac", "title: Professor of", "pustatus: eme"],
        &["pustatus: fac", "title: Visiting Professor", "pustatus: eme"],
        &["pustatus: fac", "title: Lecturer", "pustatus: eme"],
        &["puaffiliation: fac", "title: Professor Emeritus"],
    ];
    for lines in cases {
        assert_eq!(position_from_lines(lines), "Faculty (emeritus)", "{lines:?}");
    }
}

#[test]
fn test_visiting_faculty() {
    assert_eq!(
        position_from_lines(&["pustatus: fac", "title: Visiting Professor of Mathematics"]),
        "Faculty (visiting)"
    );
}

#[test]
fn test_comment_lines_ignored() {
    assert_eq!(
        position_from_lines(&["# pustatus: fac", "# title: Professor", "pustatus: stf"]),
        "Staff"
    );
}

#[test]
fn test_professor_on_title_continuation() {
    let raw = RawLines::from_text(
        "pustatus: fac\ntitle: Senior Lecturer and Associate\n  Professor of Music\n",
    );
    assert_eq!(position_from_raw(&raw), "Faculty");
}

#[test]
fn test_professor_split_across_fold() {
    let raw = RawLines::from_text(
        "pustatus: fac\ntitle: Senior Lecturer and Associate Profes\n sor of Music\n",
    );
    assert_eq!(position_from_raw(&raw), "Faculty");
}

#[test]
fn test_graduate_and_undergraduate_labels() {
    assert_eq!(
        position_from_lines(&["pustatus: graduate", "puacademiclevel: G3"]),
        "G3"
    );
    assert_eq!(
        position_from_lines(&["pustatus: undergraduate", "puclassyear: 2026"]),
        "U2026"
    );
    assert_eq!(
        position_from_lines(&["pustatus: undergraduate", "puclassyear: 2019", "pustatus: alum"]),
        "Alumni (U2019)"
    );
}

#[test]
fn test_affiliate_codes_carry_former_year() {
    assert_eq!(
        position_from_lines(&["pustatus: dcu", "puacademiclevel: G5"]),
        "DCU (formerly G5)"
    );
    assert_eq!(position_from_lines(&["pustatus: researchuser"]), "RU");
    assert_eq!(position_from_lines(&["pustatus: exceptiondcu"]), "XDCU");
}

#[test]
fn test_no_signals_is_unknown() {
    assert_eq!(position_from_lines(&["cn: Bigfoot", "ou: Forest"]), UNKNOWN);
    let empty: [&str; 0] = [];
    assert_eq!(position_from_lines(&empty), UNKNOWN);
}

#[test]
fn test_every_rule_reachable_in_table() {
    assert_eq!(POSITION_RULES.len(), 34);
    let signals = Signals::from_lines(&["pustatus: gradaccept"]);
    assert!(signals.gradaccept);
    assert_eq!(POSITION_RULES.last().map(|rule| rule.name), Some("gradaccept"));
}
