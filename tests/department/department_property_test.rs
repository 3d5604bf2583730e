//! Property tests: department resolution always yields a code or the not-found sentinel.

use dossier::department::{UNSPECIFIED, dept_code, lookup};
use dossier::NOT_FOUND;
use proptest::prelude::*;

/// Department names mixing table entries and arbitrary text
fn arb_department() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Chemistry".to_string()),
        Just("Computer Science".to_string()),
        Just(UNSPECIFIED.to_string()),
        Just("Undergraduate Class of 2024".to_string()),
        Just(String::new()),
        "[A-Za-z ,]{0,40}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn resolution_is_total(dept in arb_department(), alt in arb_department()) {
        let code = dept_code(&dept, &alt, "proptest");
        prop_assert!(!code.is_empty());
        let expected = if dept == UNSPECIFIED {
            lookup(&alt).or_else(|| lookup(&dept))
        } else {
            lookup(&dept)
        };
        prop_assert_eq!(expected.unwrap_or(NOT_FOUND), code.as_str());
    }

    #[test]
    fn known_department_ignores_alternate(alt in arb_department()) {
        prop_assert_eq!(dept_code("Physics", &alt, "proptest"), "PHYS");
    }
}

#[test]
fn test_scenario_unspecified_uses_alternate() {
    assert_eq!(dept_code(UNSPECIFIED, "Computer Science", "aturing"), "COS");
}
