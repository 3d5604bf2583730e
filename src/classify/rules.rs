//! Ordered position rules
//!
//! The first rule whose predicate holds decides the label. Reordering the
//! table changes classification results.

use super::signals::Signals;

/// Label returned when no rule applies
pub const UNKNOWN: &str = "UNKNOWN";

/// How a rule builds its label from the signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// The label as written
    Fixed(&'static str),
    /// The label plus ` (visiting)` for visitors
    Visiting(&'static str),
    /// The label plus ` (formerly G<n>)` when a graduate year was captured
    Formerly(&'static str),
    /// The label plus both qualifiers
    Qualified(&'static str),
    /// The captured graduate year, e.g. `G3`
    GraduateYear,
    /// `U` followed by the class year
    Undergraduate,
    /// `Alumni (U<class year>)`
    UndergraduateAlumni,
}

impl Template {
    /// Render the label for `signals`
    #[must_use]
    pub fn render(self, signals: &Signals) -> String {
        let class_year = signals.ux.as_deref().unwrap_or("");
        match self {
            Self::Fixed(label) => label.to_string(),
            Self::Visiting(label) => format!("{label}{}", signals.visiting_suffix()),
            Self::Formerly(label) => format!("{label}{}", signals.formerly_suffix()),
            Self::Qualified(label) => format!(
                "{label}{}{}",
                signals.visiting_suffix(),
                signals.formerly_suffix()
            ),
            Self::GraduateYear => signals.gx.clone().unwrap_or_default(),
            Self::Undergraduate => format!("U{class_year}"),
            Self::UndergraduateAlumni => format!("Alumni (U{class_year})"),
        }
    }
}

/// One entry of the precedence table
#[derive(Debug, Clone, Copy)]
pub struct PositionRule {
    /// Short name used in diagnostics
    pub name: &'static str,
    /// Predicate over the signal bundle
    pub applies: fn(&Signals) -> bool,
    /// Label produced when the predicate holds
    pub template: Template,
}

/// The position rules in precedence order
pub static POSITION_RULES: &[PositionRule] = &[
    PositionRule {
        name: "dean-faculty",
        applies: |s| s.dean && s.prof_in_title,
        template: Template::Fixed("Dean (and Faculty)"),
    },
    PositionRule {
        name: "dean",
        applies: |s| s.dean,
        template: Template::Fixed("Dean"),
    },
    PositionRule {
        name: "faculty",
        applies: |s| (s.faculty || s.faculty_edu) && s.prof_in_title && !s.emeritus,
        template: Template::Visiting("Faculty"),
    },
    PositionRule {
        name: "xfaculty",
        applies: |s| s.xfaculty && s.prof_in_title && !s.emeritus,
        template: Template::Fixed("XFaculty"),
    },
    PositionRule {
        name: "emeritus",
        applies: |s| s.emeritus,
        template: Template::Fixed("Faculty (emeritus)"),
    },
    PositionRule {
        name: "lecturer-postdoc",
        applies: |s| s.lecturer && s.postdoc_in_title,
        template: Template::Qualified("Postdoc"),
    },
    PositionRule {
        name: "lecturer",
        applies: |s| s.lecturer && !s.scholar,
        template: Template::Qualified("Lecturer"),
    },
    PositionRule {
        name: "scholar",
        applies: |s| s.scholar,
        template: Template::Qualified("Scholar"),
    },
    PositionRule {
        name: "collaborator",
        applies: |s| s.collaborator,
        template: Template::Qualified("Collaborator"),
    },
    PositionRule {
        name: "fellow",
        applies: |s| s.fellow && !s.postdoc_in_title,
        template: Template::Qualified("Fellow"),
    },
    PositionRule {
        name: "staff",
        applies: |s| s.staff && !s.postdoc_in_title,
        template: Template::Qualified("Staff"),
    },
    PositionRule {
        name: "staff-postdoc",
        applies: |s| s.staff && s.postdoc_in_title,
        template: Template::Qualified("Postdoc"),
    },
    PositionRule {
        name: "xgraduate",
        applies: |s| s.xgraduate,
        template: Template::Formerly("XGraduate"),
    },
    PositionRule {
        name: "graduate-year",
        applies: |s| s.graduate && s.gx.is_some() && !s.alumni_grad,
        template: Template::GraduateYear,
    },
    PositionRule {
        name: "graduate-alumni",
        applies: |s| s.graduate && s.gx.is_some() && s.alumni_grad,
        template: Template::Formerly("Alumni"),
    },
    PositionRule {
        name: "year-alumni",
        applies: |s| s.gx.is_some() && s.alumni_grad && !s.affiliate_status(),
        template: Template::Formerly("Alumni"),
    },
    PositionRule {
        name: "year",
        applies: |s| s.gx.is_some() && !s.alumni_grad && !s.affiliate_status(),
        template: Template::GraduateYear,
    },
    PositionRule {
        name: "graduate",
        applies: |s| s.graduate,
        template: Template::Formerly("Graduate"),
    },
    PositionRule {
        name: "undergraduate-class",
        applies: |s| s.undergraduate && s.ux.is_some() && !s.alumni,
        template: Template::Undergraduate,
    },
    PositionRule {
        name: "undergraduate-alumni",
        applies: |s| s.undergraduate && s.ux.is_some() && s.alumni,
        template: Template::UndergraduateAlumni,
    },
    PositionRule {
        name: "undergraduate",
        applies: |s| s.undergraduate || s.ux.is_some(),
        template: Template::Undergraduate,
    },
    PositionRule {
        name: "rcu",
        applies: |s| s.rcu,
        template: Template::Qualified("RCU"),
    },
    PositionRule {
        name: "dcu",
        applies: |s| s.dcu,
        template: Template::Qualified("DCU"),
    },
    PositionRule {
        name: "ru",
        applies: |s| s.ru,
        template: Template::Qualified("RU"),
    },
    PositionRule {
        name: "xdcu",
        applies: |s| s.xdcu,
        template: Template::Qualified("XDCU"),
    },
    PositionRule {
        name: "sps",
        applies: |s| s.sps,
        template: Template::Qualified("SPS"),
    },
    PositionRule {
        name: "xstaff",
        applies: |s| s.xstf,
        template: Template::Qualified("XStaff"),
    },
    PositionRule {
        name: "casual",
        applies: |s| s.cas,
        template: Template::Formerly("Casual"),
    },
    PositionRule {
        name: "short-term-professional",
        applies: |s| s.stp,
        template: Template::Formerly("Short-Term Professional"),
    },
    PositionRule {
        name: "short-term-affiliate",
        applies: |s| s.sta,
        template: Template::Formerly("Short-Term Affiliate"),
    },
    PositionRule {
        name: "retired",
        applies: |s| s.retired,
        template: Template::Fixed("Retired"),
    },
    PositionRule {
        name: "alumni",
        applies: |s| s.alumni_grad,
        template: Template::Formerly("Alumni"),
    },
    PositionRule {
        name: "xmiscaffil",
        applies: |s| s.xmiscaffil,
        template: Template::Qualified("XMiscAffil"),
    },
    PositionRule {
        name: "gradaccept",
        applies: |s| s.gradaccept,
        template: Template::Fixed("G0"),
    },
];

/// The first rule that applies to `signals`
#[must_use]
pub fn matching_rule(signals: &Signals) -> Option<&'static PositionRule> {
    POSITION_RULES.iter().find(|rule| (rule.applies)(signals))
}

/// Evaluate the rule table, falling back to [`UNKNOWN`]
#[must_use]
pub fn evaluate(signals: &Signals) -> String {
    match matching_rule(signals) {
        Some(rule) => {
            log::trace!("Position rule {} applies", rule.name);
            rule.template.render(signals)
        }
        None => UNKNOWN.to_string(),
    }
}
