//! Batch linking of schedule rows to their TKB documents.
//!
//! Every row is processed independently; the batch report tallies found and
//! missing documents the way the schedule summary displays them.

pub mod rows;
pub mod session;

use rayon::prelude::*;
use std::path::Path;

use crate::services::config::{LinkerConfig, UnitLegend};
use crate::services::matcher::ListingCache;
use crate::types::report::{
    truncate_name, FoundEntry, LinkReport, MissReason, MissingEntry, MISSING_CODE_LABEL,
};
use crate::types::schedule::ScheduleRow;

pub use rows::{load_rows, parse_rows};
pub use session::{process_row, RowOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Share one directory listing across the batch.
    pub cache_listing: bool,
    /// Match rows on the rayon pool.
    pub parallel: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            cache_listing: true,
            parallel: false,
        }
    }
}

impl From<&LinkerConfig> for LinkOptions {
    fn from(config: &LinkerConfig) -> Self {
        Self {
            cache_listing: config.cache_listing,
            parallel: config.parallel,
        }
    }
}

/// Link every row against documents in `dir` and tally the outcome.
pub fn link_rows(
    rows: &[ScheduleRow],
    dir: &Path,
    legend: &UnitLegend,
    options: &LinkOptions,
) -> LinkReport {
    if options.parallel {
        return link_rows_parallel(rows, dir, legend, options);
    }

    log::info!("Linking {} row(s) against {}", rows.len(), dir.display());
    let cache = options.cache_listing.then(ListingCache::new);

    let outcomes: Vec<RowOutcome> = rows
        .iter()
        .map(|row| process_row(row, dir, legend, cache.as_ref()))
        .collect();

    build_report(outcomes)
}

/// [`link_rows`] on the rayon pool. Row order in the report is preserved.
pub fn link_rows_parallel(
    rows: &[ScheduleRow],
    dir: &Path,
    legend: &UnitLegend,
    options: &LinkOptions,
) -> LinkReport {
    log::info!(
        "Linking {} row(s) in parallel against {}",
        rows.len(),
        dir.display()
    );
    let cache = options.cache_listing.then(ListingCache::new);

    let outcomes: Vec<RowOutcome> = rows
        .par_iter()
        .map(|row| process_row(row, dir, legend, cache.as_ref()))
        .collect();

    build_report(outcomes)
}

/// Fold row outcomes into the found/missing report.
pub fn build_report(outcomes: Vec<RowOutcome>) -> LinkReport {
    let mut report = LinkReport::default();

    for outcome in outcomes {
        let session = match outcome {
            RowOutcome::SkippedNoDate => {
                report.skipped_no_date += 1;
                continue;
            }
            RowOutcome::SkippedNoInstructor => {
                report.total += 1;
                report.skipped_no_instructor += 1;
                continue;
            }
            RowOutcome::Linked(session) => *session,
        };

        report.total += 1;

        match &session.file {
            Some(file) => report.found.push(FoundEntry {
                class_code: session.class_code.clone(),
                class_name: truncate_name(&session.class_name),
                file: file.file_name.clone(),
            }),
            None => report.missing.push(MissingEntry {
                class_code: if session.class_code.is_empty() {
                    MISSING_CODE_LABEL.to_string()
                } else {
                    session.class_code.clone()
                },
                class_name: truncate_name(&session.class_name),
                instructor_name: session.instructor_name.clone(),
                date: session.date_label.clone(),
                reason: session.miss_reason.clone().unwrap_or(MissReason::NoMatch),
            }),
        }

        report.sessions.push(session);
    }

    log::info!(
        "Linked {} of {} session(s), {} missing",
        report.found.len(),
        report.total,
        report.missing.len()
    );

    report
}

#[cfg(test)]
#[path = "tests/linker_tests.rs"]
mod tests;
