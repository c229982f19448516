use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::types::schedule::GUEST_LECTURER_UNIT;

/// Colour for units without an entry in the legend.
pub const FALLBACK_COLOR: &str = "#808080";

/// Characters of the unit name used when it has no short label.
const SHORT_LABEL_FALLBACK_LEN: usize = 10;

/// Display style of one teaching unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitStyle {
    pub unit: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_label: Option<String>,
}

impl UnitStyle {
    fn new(unit: &str, color: &str, short_label: Option<&str>) -> Self {
        Self {
            unit: unit.to_string(),
            color: color.to_string(),
            short_label: short_label.map(str::to_string),
        }
    }
}

/// Immutable unit → colour / short-label mapping, in legend order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitLegend {
    styles: Vec<UnitStyle>,
}

impl Default for UnitLegend {
    fn default() -> Self {
        Self {
            styles: vec![
                UnitStyle::new("Khoa Chính sách công", "#4472C4", Some("CSC")),
                UnitStyle::new("Khoa Phát triển nông thôn", "#70AD47", Some("PTNT")),
                UnitStyle::new(
                    "Khoa Quản trị kinh doanh nông nghiệp",
                    "#ED7D31",
                    Some("QTKDNN"),
                ),
                UnitStyle::new("Trung tâm Kinh tế hợp tác", "#9E480E", Some("TT KTHT")),
                UnitStyle::new("Trung tâm Đào tạo nông dân", "#7030A0", Some("TT ĐTND")),
                UnitStyle::new(GUEST_LECTURER_UNIT, FALLBACK_COLOR, None),
            ],
        }
    }
}

impl UnitLegend {
    /// Built-in legend, constructed once per process.
    pub fn builtin() -> &'static UnitLegend {
        static BUILTIN: OnceLock<UnitLegend> = OnceLock::new();
        BUILTIN.get_or_init(UnitLegend::default)
    }

    /// Legend with `overrides` replacing same-unit entries and appending new ones.
    pub fn with_overrides(&self, overrides: &[UnitStyle]) -> Self {
        let mut styles = self.styles.clone();
        for style in overrides {
            match styles.iter_mut().find(|s| s.unit == style.unit) {
                Some(existing) => *existing = style.clone(),
                None => styles.push(style.clone()),
            }
        }
        Self { styles }
    }

    pub fn entries(&self) -> &[UnitStyle] {
        &self.styles
    }

    pub fn color(&self, unit: &str) -> &str {
        self.find(unit)
            .map(|s| s.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Short label, or the first 10 characters of the unit name.
    pub fn short_label(&self, unit: &str) -> String {
        match self.find(unit).and_then(|s| s.short_label.as_deref()) {
            Some(label) => label.to_string(),
            None => unit.chars().take(SHORT_LABEL_FALLBACK_LEN).collect(),
        }
    }

    fn find(&self, unit: &str) -> Option<&UnitStyle> {
        self.styles.iter().find(|s| s.unit == unit)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkerConfig {
    /// Directory holding the original TKB documents.
    pub schedule_dir: Option<PathBuf>,
    /// Share one directory listing across a batch.
    pub cache_listing: bool,
    /// Match rows on the rayon pool.
    pub parallel: bool,
    /// Entries merged over the built-in unit legend.
    pub unit_legend: Vec<UnitStyle>,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            schedule_dir: None,
            cache_listing: true,
            parallel: false,
            unit_legend: Vec::new(),
        }
    }
}

impl LinkerConfig {
    pub fn legend(&self) -> UnitLegend {
        UnitLegend::builtin().with_overrides(&self.unit_legend)
    }
}
