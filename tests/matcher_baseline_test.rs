//! Baseline matcher suite.
//!
//! Pins the observable matching behaviour on a realistic schedule folder:
//! 1. Code match (Tier 1) beats keyword scoring
//! 2. Keyword match (Tier 2) on Vietnamese class names
//! 3. Threshold: one shared token is not a match
//! 4. Statistics workbook and non-documents are never candidates

mod common;

use std::path::Path;

use tkb_link_lib::services::matcher::{
    extract_keywords, find_file, normalize, scan_candidate_files, MatchResult,
};

const FOLDER: &[&str] = &[
    "TKB_175_QLBVRK.pdf",
    "TKB_NGH41_2025.pdf",
    "TKB_XPVPHC_2025.docx",
    "other_41xyz.pdf",
    "ThongKeTKB_20250314.xlsx",
    "ThongKeTKB_NGH41_kien_thuc.pdf",
    "ghi_chu.txt",
];

fn matched(result: MatchResult) -> Option<String> {
    result.into_file().map(|f| f.file_name)
}

#[test]
fn candidate_listing_is_sorted_and_filtered() {
    let dir = common::schedule_dir(FOLDER);
    let names: Vec<String> = scan_candidate_files(dir.path())
        .unwrap()
        .into_iter()
        .map(|c| c.file_name)
        .collect();

    assert_eq!(
        names,
        vec![
            "TKB_175_QLBVRK.pdf",
            "TKB_NGH41_2025.pdf",
            "TKB_XPVPHC_2025.docx",
            "other_41xyz.pdf",
        ]
    );
}

#[test]
fn code_match_first_listed() {
    let dir = common::schedule_dir(FOLDER);
    // "41" appears in TKB_NGH41_2025.pdf and other_41xyz.pdf
    let result = find_file(Some("41"), None, dir.path()).unwrap();
    assert_eq!(matched(result).as_deref(), Some("TKB_NGH41_2025.pdf"));
}

#[test]
fn code_match_ignores_keyword_scores() {
    let dir = common::schedule_dir(FOLDER);
    let result = find_file(
        Some("XPVPHC"),
        Some("LỚP TẬP HUẤN KIẾN THỨC KỸ NĂNG NGH'41"),
        dir.path(),
    )
    .unwrap();
    assert_eq!(matched(result).as_deref(), Some("TKB_XPVPHC_2025.docx"));
}

#[test]
fn keyword_match_vietnamese_name() {
    let dir = common::schedule_dir(FOLDER);
    let name = "LỚP TẬP HUẤN KIẾN THỨC KỸ NĂNG NGH'41";

    let keywords = extract_keywords(Some(name));
    assert!(keywords.contains(&"41".to_string()));
    assert!(keywords.contains(&"ngh".to_string()));

    let result = find_file(None, Some(name), dir.path()).unwrap();
    assert_eq!(matched(result).as_deref(), Some("TKB_NGH41_2025.pdf"));
}

#[test]
fn keyword_match_abbreviation_and_number() {
    let dir = common::schedule_dir(FOLDER);
    let result = find_file(
        Some("nan"),
        Some("Lớp bồi dưỡng QLBVRK khóa 175"),
        dir.path(),
    )
    .unwrap();
    assert_eq!(matched(result).as_deref(), Some("TKB_175_QLBVRK.pdf"));
}

#[test]
fn single_token_overlap_is_not_found() {
    let dir = common::schedule_dir(FOLDER);
    // only "other" appears in a file name
    let result = find_file(None, Some("Chuyên đề khác other"), dir.path()).unwrap();
    assert_eq!(result, MatchResult::NotFound);
}

#[test]
fn repeated_year_counts_twice() {
    let dir = common::schedule_dir(&["TKB_175_QLBVRK.pdf", "TKB_XPVPHC_2025.docx"]);
    let result = find_file(None, Some("Xử phạt vi phạm hành chính 2025"), dir.path()).unwrap();
    assert_eq!(matched(result).as_deref(), Some("TKB_XPVPHC_2025.docx"));
}

#[test]
fn degenerate_inputs_are_not_found() {
    let dir = common::schedule_dir(FOLDER);
    assert_eq!(
        find_file(Some(""), None, dir.path()).unwrap(),
        MatchResult::NotFound
    );
    assert_eq!(
        find_file(Some(""), None, Path::new("/nonexistent/tkb")).unwrap(),
        MatchResult::NotFound
    );

    let empty = common::schedule_dir(&[]);
    assert_eq!(
        find_file(Some("41"), Some("Kiến thức 41"), empty.path()).unwrap(),
        MatchResult::NotFound
    );
}

#[test]
fn missing_directory_is_distinct_from_not_found() {
    let err = find_file(Some("41"), None, Path::new("/nonexistent/tkb")).unwrap_err();
    assert!(err.is_directory_unavailable());
}

#[test]
fn normalization_properties() {
    let samples = [
        "LỚP TẬP HUẤN KIẾN THỨC KỸ NĂNG NGH'41",
        "Trung tâm Đào tạo nông dân",
        "  TKB_175 - QLBVRK .pdf ",
        "",
    ];
    for sample in samples {
        let once = normalize(Some(sample));
        assert_eq!(normalize(Some(once.as_str())), once);
        assert!(!once.contains(' '));
    }
    assert_eq!(normalize(Some("Đào Tạo")), normalize(Some("dao tao")));
    assert_eq!(normalize(None), "");
}
