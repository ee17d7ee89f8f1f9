use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::ai::ParsedApplicant;
use crate::db::{KeyValueStore, RosterRepo};
use crate::error::LeaderboardResult;
use crate::model::{noon_local, Applicant, Id, Recruiter, IMPORT_SOURCE};

#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub recruiter: Recruiter,
    pub added: usize,
    /// Entries dropped as duplicates (by email) or for having no name.
    pub skipped: usize,
}

/// Append applicants extracted from pasted text to a recruiter.
///
/// Emails act as the dedup key: an entry whose email the recruiter already
/// has, or that repeats earlier in the batch, is skipped. Returns `None` for
/// an unknown recruiter. Nothing is written when every entry is skipped.
pub fn import_parsed<S: KeyValueStore>(
    repo: &RosterRepo<S>,
    recruiter_id: &Id<Recruiter>,
    parsed: &[ParsedApplicant],
) -> LeaderboardResult<Option<ImportOutcome>> {
    let mut roster = repo.try_load()?;
    let Some(recruiter) = roster.find_by_id_mut(recruiter_id) else {
        return Ok(None);
    };

    let mut seen: HashSet<String> = recruiter
        .applicants
        .iter()
        .map(|a| a.email.to_lowercase())
        .collect();

    let now = Utc::now();
    let mut added = 0usize;
    let mut skipped = 0usize;

    for entry in parsed {
        let name = entry.name.trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        let email = match entry.email.trim() {
            "" => placeholder_email(name),
            given => given.to_string(),
        };
        if !seen.insert(email.to_lowercase()) {
            skipped += 1;
            continue;
        }

        let applied = entry
            .date
            .as_deref()
            .and_then(parse_applied_date)
            .unwrap_or(now);

        recruiter.applicants.push(Applicant::create(
            Id::generate("import"),
            email,
            name.to_string(),
            applied,
            IMPORT_SOURCE,
        ));
        added += 1;
    }

    let updated = recruiter.clone();
    if added > 0 {
        repo.save(&roster)?;
    }
    info!(id = %recruiter_id, added, skipped, "parsed applicants imported");

    Ok(Some(ImportOutcome {
        recruiter: updated,
        added,
        skipped,
    }))
}

/// Full RFC 3339 timestamps are kept as-is; bare dates are pinned to noon.
fn parse_applied_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok().map(noon_local)
}

fn placeholder_email(name: &str) -> String {
    let local: String = name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".");

    if local.is_empty() {
        format!("candidate.{}@imported.example.com", Utc::now().timestamp_millis())
    } else {
        format!("{}@imported.example.com", local)
    }
}
