//! Loading schedule rows exported as a JSON array of records.

use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

use crate::types::errors::{LinkError, LinkResult};
use crate::types::schedule::{ScheduleRow, REQUIRED_COLUMNS};

/// Read rows from a JSON file holding an array of row objects.
pub fn load_rows(path: &Path) -> LinkResult<Vec<ScheduleRow>> {
    log::info!("Loading schedule rows from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_rows(&content)
}

/// Parse rows and reject the batch when a required column is absent from
/// every record.
pub fn parse_rows(json: &str) -> LinkResult<Vec<ScheduleRow>> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(json)?;

    if !records.is_empty() {
        let columns: HashSet<&str> = records
            .iter()
            .flat_map(|record| record.keys().map(String::as_str))
            .collect();

        for (key, header) in REQUIRED_COLUMNS {
            if !columns.contains(key) && !columns.contains(header) {
                return Err(LinkError::Parse(format!("Missing column '{header}' ({key})")));
            }
        }
    }

    let rows = records
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)))
        .collect::<Result<Vec<ScheduleRow>, _>>()?;

    log::debug!("Parsed {} schedule row(s)", rows.len());
    Ok(rows)
}

#[cfg(test)]
#[path = "tests/rows_tests.rs"]
mod tests;
