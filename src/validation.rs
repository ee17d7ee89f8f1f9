use chrono::NaiveDate;

use crate::error::{LeaderboardError, LeaderboardResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> LeaderboardResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(LeaderboardError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Parses a `YYYY-MM-DD` target date as entered in the manual-entry form.
pub fn parse_target_date(value: &str) -> LeaderboardResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LeaderboardError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Like `parse_target_date`, but a blank input means "no date".
pub fn optional_target_date(value: Option<&str>) -> LeaderboardResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_target_date(s).map(Some),
    }
}
