//! Commands behind the `tkb-link` CLI.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::services::config::LinkerConfig;
use crate::services::linker::{self, LinkOptions};
use crate::services::matcher::{self, walker, MatchResult};
use crate::types::errors::LinkResult;
use crate::types::report::LinkReport;

/// Match a single class against the documents in `dir`.
pub fn match_file_cmd(
    dir: &Path,
    class_code: Option<&str>,
    class_name: Option<&str>,
) -> LinkResult<MatchResult> {
    matcher::find_file(class_code, class_name, dir)
}

/// Keyword set the matcher would use for `class_name`.
pub fn keywords_cmd(class_name: &str) -> Vec<String> {
    matcher::extract_keywords(Some(class_name))
}

/// Link every row of a JSON export against `dir`.
pub fn link_rows_cmd(
    rows_path: &Path,
    dir: &Path,
    config: &LinkerConfig,
    force_parallel: bool,
) -> LinkResult<LinkReport> {
    let rows = linker::load_rows(rows_path)?;

    let mut options = LinkOptions::from(config);
    options.parallel |= force_parallel;

    if let Ok(Some(workbook)) = walker::find_latest_stats_workbook(dir) {
        log::info!("Latest statistics workbook: {}", workbook.display());
    }

    Ok(linker::link_rows(&rows, dir, &config.legend(), &options))
}

/// Documents directory: explicit argument, then config, then the folder that
/// holds the rows file.
pub fn resolve_schedule_dir(
    explicit: Option<&Path>,
    config: &LinkerConfig,
    rows_path: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.schedule_dir {
        return dir.clone();
    }
    rows_path
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Plain-text summary: totals, then the missing table.
pub fn format_summary(report: &LinkReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sessions:       {}", report.total);
    let _ = writeln!(
        out,
        "With document:  {} ({:.0}%)",
        report.found.len(),
        report.found_percent()
    );
    let _ = writeln!(
        out,
        "Missing:        {} ({:.0}%)",
        report.missing.len(),
        report.missing_percent()
    );
    if report.skipped_no_date > 0 || report.skipped_no_instructor > 0 {
        let _ = writeln!(
            out,
            "Skipped:        {} without date, {} without instructor",
            report.skipped_no_date, report.skipped_no_instructor
        );
    }

    if !report.missing.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Missing documents:");
        for entry in &report.missing {
            let _ = writeln!(
                out,
                "  {:<10} {:<50} {:<24} {}  [{}]",
                entry.class_code,
                entry.class_name,
                entry.instructor_name,
                entry.date,
                entry.reason.label()
            );
        }
    }

    out
}

#[cfg(test)]
#[path = "tests/link_cmds_tests.rs"]
mod tests;
