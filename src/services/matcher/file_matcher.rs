//! Two-tier association of a schedule row with one candidate document.
//!
//! **Algorithm:**
//! 1. Tier 1: the class code (lowercase or folded) is a substring of the file
//!    name (lowercase or folded). First listed file wins.
//! 2. Tier 2: count class-name keywords contained in the folded file name.
//!    Highest count wins, earliest listed on ties, and only when the count
//!    reaches `MIN_KEYWORD_SCORE`.

use serde::Serialize;
use std::path::Path;

#[cfg(feature = "debug_matcher")]
use log::debug;

use super::keywords;
use super::listing_cache::ListingCache;
use super::normalizer;
use super::walker::{self, CandidateFile};
use crate::types::errors::LinkResult;

/// Minimum keyword overlap for a Tier 2 match. A single shared token (often a
/// short number) is not enough. Uncalibrated; see `MAX_SIGNIFICANT_WORDS`.
pub const MIN_KEYWORD_SCORE: usize = 2;

/// Spreadsheet exports write missing cells as this literal.
const MISSING_CELL: &str = "nan";

/// Outcome of matching one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "file")]
pub enum MatchResult {
    Matched(CandidateFile),
    NotFound,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn file(&self) -> Option<&CandidateFile> {
        match self {
            MatchResult::Matched(file) => Some(file),
            MatchResult::NotFound => None,
        }
    }

    pub fn into_file(self) -> Option<CandidateFile> {
        match self {
            MatchResult::Matched(file) => Some(file),
            MatchResult::NotFound => None,
        }
    }
}

/// Find the document for a row by listing `dir` fresh.
///
/// Returns `NotFound` without touching the filesystem when neither the code
/// nor the name can drive a tier.
pub fn find_file(
    class_code: Option<&str>,
    class_name: Option<&str>,
    dir: &Path,
) -> LinkResult<MatchResult> {
    if !has_usable_input(class_code, class_name) {
        return Ok(MatchResult::NotFound);
    }

    let candidates = walker::scan_candidate_files(dir)?;
    Ok(match_candidates(class_code, class_name, &candidates))
}

/// [`find_file`] backed by a shared listing cache.
pub fn find_file_cached(
    class_code: Option<&str>,
    class_name: Option<&str>,
    dir: &Path,
    cache: &ListingCache,
) -> LinkResult<MatchResult> {
    if !has_usable_input(class_code, class_name) {
        return Ok(MatchResult::NotFound);
    }

    let candidates = cache.candidates(dir)?;
    Ok(match_candidates(class_code, class_name, &candidates))
}

/// Run both tiers over an already-listed, ordered candidate slice.
pub fn match_candidates(
    class_code: Option<&str>,
    class_name: Option<&str>,
    candidates: &[CandidateFile],
) -> MatchResult {
    if candidates.is_empty() {
        return MatchResult::NotFound;
    }

    if let Some(code) = usable_code(class_code) {
        if let Some(file) = match_by_code(code, candidates) {
            log::debug!("Code '{code}' matched {}", file.file_name);
            return MatchResult::Matched(file.clone());
        }
    }

    if let Some(name) = usable_name(class_name) {
        if let Some(file) = match_by_keywords(name, candidates) {
            log::debug!("Keywords of '{name}' matched {}", file.file_name);
            return MatchResult::Matched(file.clone());
        }
    }

    MatchResult::NotFound
}

/// Tier 1: first candidate whose name contains the code.
pub fn match_by_code<'a>(code: &str, candidates: &'a [CandidateFile]) -> Option<&'a CandidateFile> {
    let code_lower = code.to_lowercase();
    let code_folded = normalizer::normalize_str(code);

    candidates.iter().find(|candidate| {
        candidate.file_name.to_lowercase().contains(&code_lower)
            || normalizer::normalize_str(&candidate.file_name).contains(&code_folded)
    })
}

/// Tier 2: best keyword overlap, earliest candidate on ties.
pub fn match_by_keywords<'a>(
    class_name: &str,
    candidates: &'a [CandidateFile],
) -> Option<&'a CandidateFile> {
    let keywords = keywords::extract_keywords(Some(class_name));
    if keywords.is_empty() {
        return None;
    }

    let mut best: Option<&CandidateFile> = None;
    let mut best_score = 0;

    for candidate in candidates {
        let folded_name = normalizer::normalize_str(&candidate.file_name);
        let score = score_file_name(&keywords, &folded_name);

        #[cfg(feature = "debug_matcher")]
        debug!(
            "[MATCHER_CALIBRATION] keywords={:?} file={} score={}",
            keywords, candidate.file_name, score
        );

        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    if best_score >= MIN_KEYWORD_SCORE {
        best
    } else {
        None
    }
}

/// Number of keyword entries contained in a folded file name.
///
/// Each entry of the keyword list counts once, however often it occurs in the
/// name. An entry listed twice (a number that is also a significant word)
/// counts twice.
pub fn score_file_name(keywords: &[String], folded_name: &str) -> usize {
    keywords
        .iter()
        .filter(|keyword| folded_name.contains(keyword.as_str()))
        .count()
}

fn usable_code(class_code: Option<&str>) -> Option<&str> {
    let code = class_code?.trim();
    if code.is_empty() || code.eq_ignore_ascii_case(MISSING_CELL) {
        return None;
    }
    Some(code)
}

fn usable_name(class_name: Option<&str>) -> Option<&str> {
    class_name.filter(|name| !name.is_empty())
}

fn has_usable_input(class_code: Option<&str>, class_name: Option<&str>) -> bool {
    usable_code(class_code).is_some() || usable_name(class_name).is_some()
}

#[cfg(test)]
#[path = "tests/file_matcher_tests.rs"]
mod tests;
