//! Batch classification
//!
//! Tokens are processed one at a time, in input order. Each token is
//! resolved, its record is turned into a [`ClassificationRow`], and any
//! failure is folded into the row and the report counters instead of being
//! returned.

use std::collections::BTreeSet;
use std::time::Instant;

use futures::stream::{self, StreamExt};

use crate::classify::{ReductionLevel, UNKNOWN, position_from_raw, reduce};
use crate::config::DossierConfig;
use crate::department::{NOT_FOUND, dept_code_with_office};
use crate::directory::{AccountLookup, DirectoryService};
use crate::models::ClassificationRow;
use crate::resolver::{AliasResolver, Lookup, ResolutionOutcome};
use crate::sponsor::sponsor_from_passwd;
use crate::utils::logging::progress::progress_bar;
use crate::utils::logging::{
    finish_and_clear, log_operation_complete, log_operation_start, log_warning,
};

/// Separator used when joining multi-valued fields
pub const VALUE_SEPARATOR: &str = ", ";

/// Record fields read by the driver
mod field {
    pub const DISPLAY_NAME: &str = "displayName";
    pub const COMMON_NAME: &str = "cn";
    pub const UNIT: &str = "ou";
    pub const DEPARTMENT: &str = "department";
    pub const PRIMARY_AFFILIATION: &str = "eduPersonPrimaryAffiliation";
    pub const STATUS: &str = "pustatus";
    pub const AFFILIATION: &str = "puaffiliation";
    pub const ACADEMIC_LEVEL: &str = "puacademiclevel";
}

/// Rows produced by a batch and the tallies collected along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// One row per input token, in input order
    pub rows: Vec<ClassificationRow>,
    /// Tokens that did not resolve, including unreachable ones
    pub not_found: usize,
    /// Tokens whose both searches failed with transport faults
    pub unreachable: usize,
    /// Department names that are missing from the department table
    pub missing_departments: BTreeSet<String>,
}

impl BatchReport {
    /// Number of tokens that resolved
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.rows.len() - self.not_found
    }

    fn record(&mut self, outcome: TokenOutcome) {
        match outcome.resolution {
            ResolutionOutcome::Resolved(_) => {}
            ResolutionOutcome::NotFound => self.not_found += 1,
            ResolutionOutcome::Unreachable => {
                self.not_found += 1;
                self.unreachable += 1;
            }
        }
        if let Some(dept) = outcome.missing_department {
            self.missing_departments.insert(dept);
        }
        self.rows.push(outcome.row);
    }
}

/// Result of classifying a single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutcome {
    /// The output row
    pub row: ClassificationRow,
    /// How the token resolved
    pub resolution: ResolutionOutcome,
    /// The department name, when it is missing from the table
    pub missing_department: Option<String>,
}

/// Classifies tokens against a directory and an account lookup
pub struct BatchDriver<'a, D, A>
where
    D: DirectoryService + ?Sized,
    A: AccountLookup + ?Sized,
{
    resolver: AliasResolver<'a, D>,
    accounts: &'a A,
    lookup_office: bool,
    lookup_sponsor: bool,
    show_progress: bool,
}

impl<'a, D, A> BatchDriver<'a, D, A>
where
    D: DirectoryService + ?Sized,
    A: AccountLookup + ?Sized,
{
    /// Create a driver using the lookup settings from `config`
    pub fn new(directory: &'a D, accounts: &'a A, config: &DossierConfig) -> Self {
        Self {
            resolver: AliasResolver::new(directory, config.directory.email_domain.clone()),
            accounts,
            lookup_office: config.accounts.lookup_office,
            lookup_sponsor: config.accounts.lookup_sponsor,
            show_progress: config.show_progress,
        }
    }

    /// Classify every token, sequentially and in order
    pub async fn classify<T: AsRef<str>>(&self, tokens: &[T], level: ReductionLevel) -> BatchReport {
        let start = Instant::now();
        log_operation_start("Classifying", &format!("{} tokens at level {level}", tokens.len()));

        let pb = progress_bar(tokens.len() as u64, Some("Classifying"), self.show_progress);
        let outcomes: Vec<TokenOutcome> = stream::iter(tokens)
            .then(|token| {
                let pb = &pb;
                async move {
                    let outcome = self.classify_token(token.as_ref(), level).await;
                    pb.inc(1);
                    outcome
                }
            })
            .collect()
            .await;
        finish_and_clear(&pb);

        let mut report = BatchReport::default();
        for outcome in outcomes {
            report.record(outcome);
        }

        log_operation_complete("classified", "tokens", report.rows.len(), Some(start.elapsed()));
        log::info!(
            "{} resolved, {} not found ({} unreachable), {} unknown departments",
            report.resolved(),
            report.not_found,
            report.unreachable,
            report.missing_departments.len()
        );
        report
    }

    /// Resolve and classify a single token
    pub async fn classify_token(&self, token: &str, level: ReductionLevel) -> TokenOutcome {
        let resolution = self.resolver.resolve(token).await;
        let outcome = resolution.outcome;
        let (Some(lookup), Some(true_id)) = (resolution.lookup, resolution.identity.true_id)
        else {
            return TokenOutcome {
                row: ClassificationRow::not_found(token),
                resolution: outcome,
                missing_department: None,
            };
        };

        let office = if self.lookup_office {
            self.office(&true_id).await
        } else {
            None
        };
        let sponsor = if self.lookup_sponsor {
            self.sponsor(&true_id).await
        } else {
            None
        };

        let (row, missing_department) =
            build_row(token, &true_id, &lookup, office, sponsor, level);
        TokenOutcome {
            row,
            resolution: outcome,
            missing_department,
        }
    }

    /// The unreduced position label for a token, or [`UNKNOWN`] when it does not resolve
    pub async fn position_of(&self, token: &str) -> String {
        self.resolver
            .resolve(token)
            .await
            .lookup
            .map_or_else(|| UNKNOWN.to_string(), |lookup| position_from_raw(&lookup.raw))
    }

    async fn office(&self, netid: &str) -> Option<String> {
        match self.accounts.office(netid).await {
            Ok(office) => office,
            Err(e) => {
                log_warning(&format!("Office lookup failed ({e})"), Some(netid));
                None
            }
        }
    }

    async fn sponsor(&self, netid: &str) -> Option<String> {
        match self.accounts.passwd_entry(netid).await {
            Ok(entry) => entry.as_deref().and_then(sponsor_from_passwd),
            Err(e) => {
                log_warning(&format!("Sponsor lookup failed ({e})"), Some(netid));
                None
            }
        }
    }
}

/// Build the row for a resolved token
///
/// Also returns the department name when it is missing from the table.
#[must_use]
pub fn build_row(
    token: &str,
    true_id: &str,
    lookup: &Lookup,
    office: Option<String>,
    sponsor: Option<String>,
    level: ReductionLevel,
) -> (ClassificationRow, Option<String>) {
    let record = &lookup.record;
    let units = record.get(field::UNIT);
    let dept = units.first().map_or("", String::as_str);
    let alt_dept = units
        .get(1)
        .map(String::as_str)
        .or_else(|| record.first(field::DEPARTMENT))
        .unwrap_or("");
    let primary_affiliation = record.first(field::PRIMARY_AFFILIATION).unwrap_or("");

    let code = dept_code_with_office(dept, alt_dept, primary_affiliation, office.as_deref(), true_id);
    let missing_department = (code == NOT_FOUND && !dept.is_empty()).then(|| dept.to_string());

    let name = record
        .first(field::DISPLAY_NAME)
        .or_else(|| record.first(field::COMMON_NAME))
        .map(ToString::to_string);

    let row = ClassificationRow {
        name,
        dept: Some(code),
        position: Some(reduce(&position_from_raw(&lookup.raw), level)),
        title: Some(record.title().to_string()),
        status: record.joined(field::STATUS, VALUE_SEPARATOR),
        affiliation: record.joined(field::AFFILIATION, VALUE_SEPARATOR),
        acad_level: record.joined(field::ACADEMIC_LEVEL, VALUE_SEPARATOR),
        netid: token.to_string(),
        netid_true: Some(true_id.to_string()),
        office,
        sponsor,
    };
    (row, missing_department)
}
