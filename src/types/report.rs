use serde::Serialize;
use std::collections::HashSet;

use crate::services::matcher::CandidateFile;

/// Class names are cut to this many characters in report tables.
pub const REPORT_NAME_WIDTH: usize = 50;

/// Placeholder for a row without class code.
pub const MISSING_CODE_LABEL: &str = "N/A";

/// One schedule session ready for a calendar view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedSession {
    pub title: String,
    /// ISO date, calendar start and end.
    pub start: String,
    /// `dd/mm/YYYY` for display.
    pub date_label: String,
    pub background_color: String,
    pub instructor_name: String,
    pub class_name: String,
    pub class_code: String,
    pub topic_name: String,
    pub lesson_count: f64,
    pub instructor_unit: String,
    pub unit_short: String,
    pub assistant: String,
    pub assistant_unit: String,
    pub file: Option<CandidateFile>,
    pub miss_reason: Option<MissReason>,
}

/// Why a session has no linked document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "detail")]
pub enum MissReason {
    /// The directory was searched and nothing qualified.
    NoMatch,
    /// The directory could not be searched.
    DirectoryUnavailable(String),
}

impl MissReason {
    pub fn label(&self) -> &str {
        match self {
            MissReason::NoMatch => "no matching file",
            MissReason::DirectoryUnavailable(_) => "directory unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundEntry {
    pub class_code: String,
    pub class_name: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntry {
    pub class_code: String,
    pub class_name: String,
    pub instructor_name: String,
    pub date: String,
    pub reason: MissReason,
}

/// Found/missing tally over one batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    /// Rows with a parseable date.
    pub total: usize,
    pub found: Vec<FoundEntry>,
    pub missing: Vec<MissingEntry>,
    /// Rows dropped before counting: no parseable date.
    pub skipped_no_date: usize,
    /// Dated rows dropped before matching: no instructor.
    pub skipped_no_instructor: usize,
    pub sessions: Vec<LinkedSession>,
}

impl LinkReport {
    pub fn found_percent(&self) -> f64 {
        percent(self.found.len(), self.total)
    }

    pub fn missing_percent(&self) -> f64 {
        percent(self.missing.len(), self.total)
    }

    /// Found entries with each file listed once, first occurrence kept.
    pub fn distinct_found_files(&self) -> Vec<&FoundEntry> {
        let mut seen = HashSet::new();
        self.found
            .iter()
            .filter(|entry| seen.insert(entry.file.as_str()))
            .collect()
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// First `REPORT_NAME_WIDTH` characters of a class name.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(REPORT_NAME_WIDTH).collect()
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
