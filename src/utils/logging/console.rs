//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::batch::BatchReport;

/// Print summary information about a classification batch to standard error
pub fn print_batch_summary(report: &BatchReport, elapsed: std::time::Duration) {
    eprintln!("Classified {} tokens in {:?}", report.rows.len(), elapsed);
    eprintln!(
        "Not found: {} (directory unreachable: {})",
        report.not_found, report.unreachable
    );
    if !report.missing_departments.is_empty() {
        eprintln!("Departments missing from the table:");
        for dept in &report.missing_departments {
            eprintln!("  - {dept:?}");
        }
    }
}
