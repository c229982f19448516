//! Per-row processing: validation, document lookup, calendar fields.

use chrono::NaiveDate;
use std::path::Path;

use crate::services::config::UnitLegend;
use crate::services::matcher::{self, ListingCache, MatchResult};
use crate::types::report::{LinkedSession, MissReason};
use crate::types::schedule::ScheduleRow;

/// What happened to one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// No parseable date; not part of the tally.
    SkippedNoDate,
    /// Dated but without instructor; counted, never matched.
    SkippedNoInstructor,
    Linked(Box<LinkedSession>),
}

/// Process one row against `dir`.
///
/// A directory failure stays scoped to this row and is recorded as its miss
/// reason.
pub fn process_row(
    row: &ScheduleRow,
    dir: &Path,
    legend: &UnitLegend,
    cache: Option<&ListingCache>,
) -> RowOutcome {
    let Some(date) = row.date() else {
        return RowOutcome::SkippedNoDate;
    };

    let Some(instructor) = row.instructor_name() else {
        return RowOutcome::SkippedNoInstructor;
    };

    let code = Some(row.class_code()).filter(|c| !c.is_empty());
    let name = Some(row.class_name());

    let lookup = match cache {
        Some(cache) => matcher::find_file_cached(code, name, dir, cache),
        None => matcher::find_file(code, name, dir),
    };

    let (file, miss_reason) = match lookup {
        Ok(MatchResult::Matched(file)) => (Some(file), None),
        Ok(MatchResult::NotFound) => (None, Some(MissReason::NoMatch)),
        Err(e) => {
            log::warn!("Row '{}' left unmatched: {e}", row.class_name());
            (None, Some(MissReason::DirectoryUnavailable(e.to_string())))
        }
    };

    RowOutcome::Linked(Box::new(build_session(
        row,
        date,
        instructor,
        legend,
        file,
        miss_reason,
    )))
}

fn build_session(
    row: &ScheduleRow,
    date: NaiveDate,
    instructor: &str,
    legend: &UnitLegend,
    file: Option<matcher::CandidateFile>,
    miss_reason: Option<MissReason>,
) -> LinkedSession {
    let unit = row.instructor_unit();
    let unit_short = legend.short_label(unit);
    let title = calendar_title(&unit_short, instructor);

    LinkedSession {
        title,
        start: date.format("%Y-%m-%d").to_string(),
        date_label: date.format("%d/%m/%Y").to_string(),
        background_color: legend.color(unit).to_string(),
        instructor_name: instructor.to_string(),
        class_name: row.class_name().to_string(),
        class_code: row.class_code().to_string(),
        topic_name: row.topic_name().to_string(),
        lesson_count: row.lesson_count(),
        instructor_unit: unit.to_string(),
        unit_short,
        assistant: row.assistant().to_string(),
        assistant_unit: row.assistant_unit().to_string(),
        file,
        miss_reason,
    }
}

/// `[SHORT] instructor`, or just the instructor without a short label.
pub fn calendar_title(unit_short: &str, instructor: &str) -> String {
    if unit_short.is_empty() {
        instructor.to_string()
    } else {
        format!("[{unit_short}] {instructor}")
    }
}
