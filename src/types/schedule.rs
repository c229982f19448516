//! One row of the teaching-schedule export, as handed over by the loader.
//!
//! Field names accept both the English keys and the Vietnamese column headers
//! of the `ThongKeTKB` workbook. Cells may arrive as strings, numbers or null.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// `D/M/YYYY` or `D-M-YYYY` anywhere in the cell.
static RE_DMY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})").expect("Invalid regex")
});

/// ISO `YYYY-MM-DD` prefix, as written by JSON exporters for datetime cells.
static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})").expect("Invalid regex"));

/// Lessons per session when the cell is empty.
pub const DEFAULT_LESSON_COUNT: f64 = 8.0;

/// Unit shown for instructors without one: guest lecturer.
pub const GUEST_LECTURER_UNIT: &str = "Giảng viên mời";

/// Literal written by spreadsheet exports for empty cells.
const MISSING_CELL: &str = "nan";

/// Columns every row source must provide, as (key, workbook header).
pub const REQUIRED_COLUMNS: &[(&str, &str)] = &[
    ("class_name", "Tên lớp"),
    ("schedule_date", "Thời gian"),
    ("topic_name", "Tên chuyên đề"),
    ("instructor_name", "Tên giảng viên"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(default, alias = "Tên lớp", deserialize_with = "cell_text")]
    pub class_name: Option<String>,
    #[serde(default, alias = "Mã lớp", deserialize_with = "cell_text")]
    pub class_code: Option<String>,
    #[serde(default, alias = "Thời gian", deserialize_with = "cell_text")]
    pub schedule_date: Option<String>,
    #[serde(default, alias = "Tên chuyên đề", deserialize_with = "cell_text")]
    pub topic_name: Option<String>,
    #[serde(default, alias = "Tên giảng viên", deserialize_with = "cell_text")]
    pub instructor_name: Option<String>,
    #[serde(default, alias = "Số tiết", deserialize_with = "cell_number")]
    pub lesson_count: Option<f64>,
    #[serde(default, alias = "Đơn vị (GV)", deserialize_with = "cell_text")]
    pub instructor_unit: Option<String>,
    #[serde(default, alias = "Trợ giảng", deserialize_with = "cell_text")]
    pub assistant: Option<String>,
    #[serde(default, alias = "vị (trợ giảng)", deserialize_with = "cell_text")]
    pub assistant_unit: Option<String>,
}

impl ScheduleRow {
    /// Trimmed class name; empty string when absent.
    pub fn class_name(&self) -> &str {
        trimmed(&self.class_name)
    }

    /// Trimmed class code; empty string when absent.
    pub fn class_code(&self) -> &str {
        trimmed(&self.class_code)
    }

    pub fn topic_name(&self) -> &str {
        trimmed(&self.topic_name)
    }

    /// Instructor name, or `None` when empty or the `nan` placeholder.
    pub fn instructor_name(&self) -> Option<&str> {
        present(&self.instructor_name)
    }

    pub fn lesson_count(&self) -> f64 {
        self.lesson_count.unwrap_or(DEFAULT_LESSON_COUNT)
    }

    /// Instructor unit, defaulting to the guest-lecturer unit.
    pub fn instructor_unit(&self) -> &str {
        present(&self.instructor_unit).unwrap_or(GUEST_LECTURER_UNIT)
    }

    pub fn assistant(&self) -> &str {
        present(&self.assistant).unwrap_or_default()
    }

    pub fn assistant_unit(&self) -> &str {
        present(&self.assistant_unit).unwrap_or_default()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.schedule_date.as_deref().and_then(parse_schedule_date)
    }
}

/// Parse a schedule date cell.
///
/// Uses the first `D/M/YYYY` / `D-M-YYYY` occurrence; if that is not a real
/// calendar date the cell is rejected rather than searched further. Falls back
/// to an ISO `YYYY-MM-DD` prefix.
pub fn parse_schedule_date(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = RE_DMY_DATE.captures(text) {
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = RE_ISO_DATE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

fn present(value: &Option<String>) -> Option<&str> {
    let value = trimmed(value);
    if value.is_empty() || value.eq_ignore_ascii_case(MISSING_CELL) {
        None
    } else {
        Some(value)
    }
}

/// Spreadsheet cell as text. Integral floats lose their `.0` so a class code
/// exported as `41.0` still reads `41`.
fn cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

fn cell_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
