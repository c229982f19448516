//! Keyword extraction from free-text class names.
//!
//! A class name such as `LỚP TẬP HUẤN KIẾN THỨC KỸ NĂNG NGH'41` yields
//! `["41", "ngh", "kien", "thuc", "nang", "ngh41"]`: digit runs first, then
//! uppercase abbreviations, then the leading significant words.

use regex::Regex;
use std::sync::LazyLock;

use super::normalizer;

static RE_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex"));

/// Two or more uppercase ASCII letters delimited by word boundaries.
/// `\b` is Unicode-aware, so `LỚP` is one word and never yields `L`.
static RE_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("Invalid regex"));

/// Scheduling filler words that carry no identity (folded form).
pub const STOP_WORDS: &[&str] = &[
    "lop", "tap", "huan", "boi", "duong", "theo", "tieu", "chuan", "chu",
];

/// Words shorter than this are dropped.
pub const MIN_WORD_LEN: usize = 3;

/// Only the first N significant words are kept.
/// Uncalibrated; revisit together with `MIN_KEYWORD_SCORE`.
pub const MAX_SIGNIFICANT_WORDS: usize = 5;

/// Extract the ordered keyword set for a class name.
///
/// Order is numbers, abbreviations, words. Duplicates are kept as-is.
pub fn extract_keywords(class_name: Option<&str>) -> Vec<String> {
    let Some(raw) = class_name else {
        return Vec::new();
    };

    let numbers = RE_DIGIT_RUN.find_iter(raw).map(|m| m.as_str().to_string());

    let abbreviations = RE_ABBREVIATION
        .find_iter(raw)
        .map(|m| normalizer::normalize_str(m.as_str()));

    let words = significant_words(raw);

    numbers
        .chain(abbreviations)
        .chain(words)
        .filter(|keyword| is_usable_keyword(keyword))
        .collect()
}

/// Digit runs of any length, anything else at least [`MIN_WORD_LEN`] chars.
/// Two-letter abbreviations such as `XY` fall out here.
fn is_usable_keyword(keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    keyword.chars().all(|c| c.is_numeric()) || keyword.chars().count() >= MIN_WORD_LEN
}

/// Folded words of `raw`, minus stop words and short words, capped.
pub fn significant_words(raw: &str) -> Vec<String> {
    normalizer::fold_keep_spaces(raw)
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .take(MAX_SIGNIFICANT_WORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/keywords_tests.rs"]
mod tests;
