//! Property tests: coarse reduction is idempotent over the position vocabulary.

use dossier::{ReductionLevel, reduce};
use proptest::prelude::*;

/// Base labels produced by the position rules
fn arb_base_label() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Dean",
        "Dean (and Faculty)",
        "Faculty",
        "XFaculty",
        "Faculty (emeritus)",
        "Postdoc",
        "Lecturer",
        "Scholar",
        "Collaborator",
        "Fellow",
        "Staff",
        "XGraduate",
        "Graduate",
        "Alumni",
        "RCU",
        "DCU",
        "RU",
        "XDCU",
        "SPS",
        "XStaff",
        "Casual",
        "Short-Term Professional",
        "Short-Term Affiliate",
        "Retired",
        "XMiscAffil",
        "G0",
        "UNKNOWN",
    ])
    .prop_map(|label| label.to_string())
}

/// Labels with the qualifiers the rules can append
fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_base_label(),
        (arb_base_label(), any::<bool>(), prop::option::of(1u8..10)).prop_map(
            |(base, visiting, year)| {
                let mut label = base;
                if visiting {
                    label.push_str(" (visiting)");
                }
                if let Some(year) = year {
                    label.push_str(&format!(" (formerly G{year})"));
                }
                label
            }
        ),
        (1u8..10).prop_map(|year| format!("G{year}")),
        (1u8..10).prop_map(|year| format!("Alumni (formerly G{year})")),
        Just("U".to_string()),
        (2019u16..2030).prop_map(|year| format!("U{year}")),
        (2019u16..2030).prop_map(|year| format!("Alumni (U{year})")),
    ]
}

proptest! {
    #[test]
    fn coarse_reduction_is_idempotent(label in arb_label()) {
        let once = reduce(&label, ReductionLevel::Coarse);
        let twice = reduce(&once, ReductionLevel::Coarse);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn coarse_reduction_drops_qualifiers(label in arb_label()) {
        let reduced = reduce(&label, ReductionLevel::Coarse);
        prop_assert!(!reduced.contains(" ("), "{} -> {}", label, reduced);
    }

    #[test]
    fn plain_reduction_is_a_prefix(label in arb_label()) {
        let reduced = reduce(&label, ReductionLevel::Plain);
        prop_assert!(label.starts_with(&reduced));
    }
}

#[test]
fn test_scenario_sponsored_graduate() {
    assert_eq!(reduce("DCU (formerly G5)", ReductionLevel::Coarse), "DCU/RCU/RU");
}
