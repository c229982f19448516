//! Flat directory listing of candidate schedule documents.
//! Uses `walkdir` with depth 1 and a name-sorted listing so that first-match
//! and tie-break policies do not depend on filesystem order.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

use crate::types::errors::{LinkError, LinkResult};

/// Extensions accepted as original schedule documents (compared lowercase).
pub const CANDIDATE_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Base-name marker of the exported statistics workbook. Case-sensitive.
pub const STATS_REPORT_MARKER: &str = "ThongKeTKB";

/// A schedule document that may be linked to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Base name as listed by the filesystem.
    pub file_name: String,
}

impl CandidateFile {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, file_name }
    }
}

/// Whether a base name qualifies as a candidate document.
///
/// Hidden files and the statistics workbook never qualify.
pub fn is_candidate_name(file_name: &str) -> bool {
    if file_name.starts_with('.') || file_name.contains(STATS_REPORT_MARKER) {
        return false;
    }

    let extension = match Path::new(file_name).extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return false,
    };

    CANDIDATE_EXTENSIONS.contains(&extension.as_str())
}

/// List candidate documents directly under `dir`, sorted by file name.
///
/// Fails with [`LinkError::DirectoryUnavailable`] when `dir` is missing, is
/// not a directory, or cannot be read. Unreadable individual entries are
/// skipped with a warning.
pub fn scan_candidate_files(dir: &Path) -> LinkResult<Vec<CandidateFile>> {
    let mut candidates = Vec::new();

    for entry in list_dir_files(dir)? {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !is_candidate_name(&file_name) {
            continue;
        }

        candidates.push(CandidateFile {
            path: entry.into_path(),
            file_name,
        });
    }

    log::debug!(
        "Listed {} candidate document(s) in {}",
        candidates.len(),
        dir.display()
    );

    Ok(candidates)
}

/// Locate the most recently modified `ThongKeTKB*.xlsx` workbook in `dir`.
///
/// Returns `Ok(None)` when no workbook is present.
pub fn find_latest_stats_workbook(dir: &Path) -> LinkResult<Option<PathBuf>> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in list_dir_files(dir)? {
        if !is_stats_workbook_name(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let modified = match entry.metadata().map(|m| m.modified()) {
            Ok(Ok(time)) => time,
            Ok(Err(e)) => {
                log::warn!("No modification time for {}: {e}", entry.path().display());
                SystemTime::UNIX_EPOCH
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        // Sorted listing: on equal mtimes the later name wins
        if latest.as_ref().is_none_or(|(best, _)| modified >= *best) {
            latest = Some((modified, entry.into_path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}

fn is_stats_workbook_name(file_name: &str) -> bool {
    file_name.starts_with(STATS_REPORT_MARKER)
        && Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("xlsx"))
}

/// Regular files directly under `dir`, sorted by file name.
///
/// Entries that cannot be read are logged and skipped; only a failure on
/// `dir` itself is an error.
fn list_dir_files(dir: &Path) -> LinkResult<Vec<DirEntry>> {
    ensure_listable(dir)?;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(LinkError::directory_unavailable(dir, e.to_string()));
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry);
        }
    }

    Ok(files)
}

fn ensure_listable(dir: &Path) -> LinkResult<()> {
    if !dir.exists() {
        return Err(LinkError::directory_unavailable(dir, "path does not exist"));
    }
    if !dir.is_dir() {
        return Err(LinkError::directory_unavailable(dir, "not a directory"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
