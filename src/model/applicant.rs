use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Source label for seeded demo applicants.
pub const SEED_SOURCE: &str = "LinkedIn";
/// Source label for placeholder applicants created by count adjustments.
pub const SYNTHETIC_SOURCE: &str = "Portal Sync";
/// Source label for applicants extracted from pasted text.
pub const IMPORT_SOURCE: &str = "AI Import";

/// One candidate attributed to a recruiter. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: Id<Applicant>,
    pub email: String,
    pub name: String,
    pub applied_date: DateTime<Utc>,
    pub source: String,
}

impl Applicant {
    pub fn create(
        id: Id<Applicant>,
        email: String,
        name: String,
        applied_date: DateTime<Utc>,
        source: &str,
    ) -> Self {
        Self {
            id,
            email,
            name,
            applied_date,
            source: source.to_string(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == SYNTHETIC_SOURCE
    }

    /// Calendar day of the application in local time.
    pub fn local_day(&self) -> NaiveDate {
        self.applied_date.with_timezone(&Local).date_naive()
    }
}

/// Pin a bare calendar date to 12:00 local time so that converting to UTC
/// and back never lands on a neighbouring day.
pub fn noon_local(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}
