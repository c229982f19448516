//! Text folding for class codes, class names and schedule file names.
//!
//! Every comparison in the matcher runs on the folded form produced here:
//! lowercase, Vietnamese diacritics replaced by their base letter, punctuation
//! dropped and whitespace deleted. Folding is lossy and idempotent.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Lowercase Vietnamese letters and the base letter they fold to.
///
/// Uppercase input is lowercased before the table is consulted, so only the
/// lowercase forms are listed.
#[rustfmt::skip]
const VIETNAMESE_FOLD: &[(char, char)] = &[
    ('á', 'a'), ('à', 'a'), ('ả', 'a'), ('ã', 'a'), ('ạ', 'a'),
    ('ă', 'a'), ('ắ', 'a'), ('ằ', 'a'), ('ẳ', 'a'), ('ẵ', 'a'), ('ặ', 'a'),
    ('â', 'a'), ('ấ', 'a'), ('ầ', 'a'), ('ẩ', 'a'), ('ẫ', 'a'), ('ậ', 'a'),
    ('é', 'e'), ('è', 'e'), ('ẻ', 'e'), ('ẽ', 'e'), ('ẹ', 'e'),
    ('ê', 'e'), ('ế', 'e'), ('ề', 'e'), ('ể', 'e'), ('ễ', 'e'), ('ệ', 'e'),
    ('í', 'i'), ('ì', 'i'), ('ỉ', 'i'), ('ĩ', 'i'), ('ị', 'i'),
    ('ó', 'o'), ('ò', 'o'), ('ỏ', 'o'), ('õ', 'o'), ('ọ', 'o'),
    ('ô', 'o'), ('ố', 'o'), ('ồ', 'o'), ('ổ', 'o'), ('ỗ', 'o'), ('ộ', 'o'),
    ('ơ', 'o'), ('ớ', 'o'), ('ờ', 'o'), ('ở', 'o'), ('ỡ', 'o'), ('ợ', 'o'),
    ('ú', 'u'), ('ù', 'u'), ('ủ', 'u'), ('ũ', 'u'), ('ụ', 'u'),
    ('ư', 'u'), ('ứ', 'u'), ('ừ', 'u'), ('ử', 'u'), ('ữ', 'u'), ('ự', 'u'),
    ('ý', 'y'), ('ỳ', 'y'), ('ỷ', 'y'), ('ỹ', 'y'), ('ỵ', 'y'),
    ('đ', 'd'),
];

/// Map a single character through the Vietnamese fold table.
pub fn fold_char(c: char) -> char {
    VIETNAMESE_FOLD
        .iter()
        .find(|(accented, _)| *accented == c)
        .map(|(_, base)| *base)
        .unwrap_or(c)
}

/// Lowercase, trim, de-accent and strip punctuation, keeping inner whitespace.
///
/// This is the shared prefix of [`normalize`]; the keyword extractor needs the
/// word boundaries that the final whitespace deletion would destroy.
pub fn fold_keep_spaces(text: &str) -> String {
    let lower = text.to_lowercase();
    let folded: String = lower.trim().chars().map(fold_char).collect();
    RE_NON_WORD.replace_all(&folded, "").into_owned()
}

/// Fold text into its comparison form.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Trim leading/trailing whitespace
/// 3. Replace Vietnamese accented letters via the fixed table
/// 4. Drop every character that is not a word character or whitespace
/// 5. Delete all whitespace
///
/// `None` folds to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(text) => normalize_str(text),
        None => String::new(),
    }
}

/// [`normalize`] for a value that is known to be present.
pub fn normalize_str(text: &str) -> String {
    let spaced = fold_keep_spaces(text);
    RE_WHITESPACE.replace_all(&spaced, "").into_owned()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
