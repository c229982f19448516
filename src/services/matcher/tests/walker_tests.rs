use super::*;
use crate::test_utils::schedule_dir;
use filetime::{set_file_mtime, FileTime};
use std::fs;
use tempfile::TempDir;

fn listed_names(dir: &Path) -> Vec<String> {
    scan_candidate_files(dir)
        .unwrap()
        .into_iter()
        .map(|c| c.file_name)
        .collect()
}

#[test]
fn test_scan_candidate_files_filters_extensions() {
    let dir = schedule_dir(&[
        "TKB_175_QLBVRK.pdf",
        "TKB_XPVPHC_2025.DOCX",
        "notes.txt",
        "scan.Pdf",
        "old.doc",
        "no_extension",
    ]);

    assert_eq!(
        listed_names(dir.path()),
        vec!["TKB_175_QLBVRK.pdf", "TKB_XPVPHC_2025.DOCX", "scan.Pdf"]
    );
}

#[test]
fn test_scan_candidate_files_excludes_stats_report() {
    let dir = schedule_dir(&[
        "ThongKeTKB_2025.pdf",
        "Ban_ThongKeTKB.docx",
        "thongketkb_lowercase.pdf",
    ]);

    // The marker is case-sensitive
    assert_eq!(listed_names(dir.path()), vec!["thongketkb_lowercase.pdf"]);
}

#[test]
fn test_scan_candidate_files_sorted_by_name() {
    let dir = schedule_dir(&["c.pdf", "a.docx", "b.pdf", "B.pdf"]);
    assert_eq!(
        listed_names(dir.path()),
        vec!["B.pdf", "a.docx", "b.pdf", "c.pdf"]
    );
}

#[test]
fn test_scan_candidate_files_is_flat() {
    let dir = schedule_dir(&["top.pdf"]);
    let nested = dir.path().join("archive");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("deep.pdf"), "test").unwrap();
    fs::create_dir(dir.path().join("folder.pdf")).unwrap();

    assert_eq!(listed_names(dir.path()), vec!["top.pdf"]);
}

#[test]
fn test_scan_candidate_files_skips_hidden() {
    let dir = schedule_dir(&[".~lock.TKB_41.docx", "TKB_41.docx"]);
    assert_eq!(listed_names(dir.path()), vec!["TKB_41.docx"]);
}

#[test]
fn test_scan_candidate_files_empty_dir() {
    let dir = TempDir::new().unwrap();
    assert!(scan_candidate_files(dir.path()).unwrap().is_empty());
}

#[test]
fn test_scan_candidate_files_nonexistent() {
    let result = scan_candidate_files(Path::new("/nonexistent/tkb/path"));
    assert!(matches!(
        result,
        Err(LinkError::DirectoryUnavailable { .. })
    ));
}

#[test]
fn test_scan_candidate_files_not_a_directory() {
    let dir = schedule_dir(&["file.pdf"]);
    let result = scan_candidate_files(&dir.path().join("file.pdf"));
    assert!(result.unwrap_err().is_directory_unavailable());
}

#[test]
fn test_candidate_paths_point_into_dir() {
    let dir = schedule_dir(&["TKB_41.pdf"]);
    let candidates = scan_candidate_files(dir.path()).unwrap();
    assert_eq!(candidates[0].path, dir.path().join("TKB_41.pdf"));
    assert_eq!(CandidateFile::new(candidates[0].path.clone()), candidates[0]);
}

#[test]
fn test_is_candidate_name() {
    assert!(is_candidate_name("TKB.pdf"));
    assert!(is_candidate_name("TKB.DocX"));
    assert!(!is_candidate_name("TKB.xlsx"));
    assert!(!is_candidate_name("ThongKeTKB.pdf"));
    assert!(!is_candidate_name(".pdf"));
}

#[test]
fn test_find_latest_stats_workbook_picks_newest() {
    let dir = schedule_dir(&[
        "ThongKeTKB_old.xlsx",
        "ThongKeTKB_new.xlsx",
        "ThongKeTKB_newest.csv",
        "Other.xlsx",
    ]);
    set_file_mtime(
        dir.path().join("ThongKeTKB_old.xlsx"),
        FileTime::from_unix_time(1_700_000_000, 0),
    )
    .unwrap();
    set_file_mtime(
        dir.path().join("ThongKeTKB_new.xlsx"),
        FileTime::from_unix_time(1_700_100_000, 0),
    )
    .unwrap();

    let latest = find_latest_stats_workbook(dir.path()).unwrap();
    assert_eq!(latest, Some(dir.path().join("ThongKeTKB_new.xlsx")));
}

#[test]
fn test_find_latest_stats_workbook_none() {
    let dir = schedule_dir(&["TKB_41.pdf"]);
    assert_eq!(find_latest_stats_workbook(dir.path()).unwrap(), None);
}

#[test]
fn test_find_latest_stats_workbook_skips_directories() {
    let dir = schedule_dir(&["ThongKeTKB_march.XLSX"]);
    set_file_mtime(
        dir.path().join("ThongKeTKB_march.XLSX"),
        FileTime::from_unix_time(1_700_000_000, 0),
    )
    .unwrap();
    // Created after the file, so it is newer, but it is not a workbook
    fs::create_dir(dir.path().join("ThongKeTKB_backup.xlsx")).unwrap();

    let latest = find_latest_stats_workbook(dir.path()).unwrap();
    assert_eq!(latest, Some(dir.path().join("ThongKeTKB_march.XLSX")));
}

#[test]
fn test_find_latest_stats_workbook_missing_dir() {
    let tmp = TempDir::new().unwrap();
    let err = find_latest_stats_workbook(&tmp.path().join("gone")).unwrap_err();
    assert!(err.is_directory_unavailable());
}
