//! Signal extraction from directory response lines
//!
//! Each signal is set when any line matches its predicate; directory fields
//! are multi-valued so a later line never clears an earlier match. The two
//! captured strings (graduate year and class year) keep the last match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GRADUATE_YEAR: Regex = Regex::new(r" g[1-9]").unwrap();
}

/// The fixed-shape bundle of signals the position rules evaluate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    pub dean: bool,
    pub faculty: bool,
    pub faculty_edu: bool,
    pub xfaculty: bool,
    pub prof_in_title: bool,
    pub emeritus: bool,
    pub visitor: bool,
    pub lecturer: bool,
    pub scholar: bool,
    pub collaborator: bool,
    pub fellow: bool,
    pub staff: bool,
    pub postdoc_in_title: bool,
    pub xgraduate: bool,
    pub graduate: bool,
    /// Graduate year such as `G5`
    pub gx: Option<String>,
    /// Set by the `alumg` status
    pub alumni_grad: bool,
    pub undergraduate: bool,
    /// Undergraduate class year such as `2026`
    pub ux: Option<String>,
    pub alumni: bool,
    pub rcu: bool,
    pub dcu: bool,
    pub ru: bool,
    pub xdcu: bool,
    pub sps: bool,
    pub xstf: bool,
    pub cas: bool,
    pub stp: bool,
    pub sta: bool,
    pub retired: bool,
    pub xmiscaffil: bool,
    pub gradaccept: bool,
}

impl Signals {
    /// Scan lower-cased lines and apply the cleaning pass
    ///
    /// Lines starting with `#` are ignored.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut signals = Self::default();
        for line in lines {
            let line = line.as_ref();
            if line.starts_with('#') {
                continue;
            }
            signals.scan(&line.to_lowercase());
        }
        signals.clean();
        signals
    }

    fn scan(&mut self, line: &str) {
        let status = |code: &str| line.contains(&format!("pustatus: {code}"));
        let in_title = |word: &str| line.contains("title:") && line.contains(word);

        self.dean |= in_title("dean");
        self.faculty |= status("fac") || line.contains("puaffiliation: fac");
        self.faculty_edu |= line.contains("edupersonprimaryaffiliation: faculty");
        self.xfaculty |= status("xfac");
        self.prof_in_title |= in_title("professor");
        self.emeritus |= status("eme") || in_title("emerit");
        self.visitor |= in_title("visiting") || status("vis");
        self.lecturer |= in_title("lecturer");
        self.scholar |= in_title("scholar");
        self.collaborator |= in_title("collaborator");
        self.fellow |= in_title("fellow");
        self.staff |= status("stf") || line.contains("puaffiliation: stf");
        self.postdoc_in_title |= in_title("postdoc");
        self.xgraduate |= status("xgrad");
        self.graduate |= status("graduate");
        self.alumni_grad |= status("alumg");
        self.undergraduate |= status("undergraduate");
        self.alumni |= status("alum") && !status("alumg");
        self.rcu |= status("rcu");
        self.dcu |= status("dcu");
        self.ru |= status("researchuser") || status("ru");
        self.xdcu |= status("exceptiondcu") || status("xdcu");
        self.sps |= status("sps");
        self.xstf |= status("xstf");
        self.cas |= status("cas");
        self.stp |= status("stp");
        self.sta |= status("sta");
        self.retired |= status("ret");
        self.xmiscaffil |= status("xmiscaffil");
        self.gradaccept |= status("gradaccept");

        if line.contains("puacademiclevel") && GRADUATE_YEAR.is_match(line) {
            if let Some(token) = line.split_whitespace().last() {
                self.gx = Some(token.to_uppercase());
            }
        }
        if line.contains("puclassyear:") {
            if let Some(token) = line.split_whitespace().last() {
                if token != "puclassyear:" {
                    self.ux = Some(token.to_string());
                }
            }
        }
    }

    /// Title-based disambiguation of bare faculty status flags
    fn clean(&mut self) {
        let other_title = self.postdoc_in_title || self.lecturer || self.scholar;
        if other_title && !self.prof_in_title {
            self.faculty = false;
            self.xfaculty = false;
        }
    }

    /// Whether any of the affiliate-style statuses that suppress graduate-year labels is set
    #[must_use]
    pub const fn affiliate_status(&self) -> bool {
        self.rcu
            || self.dcu
            || self.ru
            || self.xdcu
            || self.sps
            || self.xstf
            || self.cas
            || self.stp
            || self.sta
    }

    /// ` (visiting)` when the person is a visitor
    #[must_use]
    pub fn visiting_suffix(&self) -> &'static str {
        if self.visitor { " (visiting)" } else { "" }
    }

    /// ` (formerly G<n>)` when a graduate year was captured
    #[must_use]
    pub fn formerly_suffix(&self) -> String {
        self.gx
            .as_deref()
            .map(|gx| format!(" (formerly {gx})"))
            .unwrap_or_default()
    }
}
