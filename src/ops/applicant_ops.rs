use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::db::{KeyValueStore, RosterRepo};
use crate::error::{LeaderboardError, LeaderboardResult};
use crate::model::{noon_local, Applicant, Id, Recruiter, SYNTHETIC_SOURCE};

/// Upper bound on one recruiter's applicant list after a reconciliation.
pub const MAX_APPLICANTS: usize = 100_000;

/// Add or remove `delta` applicants for a recruiter.
///
/// Positive deltas append placeholder applicants dated `target_date` (at
/// noon local) or now. Negative deltas remove from the end of the list,
/// newest additions first, and never go below zero.
///
/// Returns `None` without writing when `delta` is zero or the recruiter is
/// unknown. Growing past [`MAX_APPLICANTS`] is rejected before anything is
/// written.
pub fn adjust_by_delta<S: KeyValueStore>(
    repo: &RosterRepo<S>,
    recruiter_id: &Id<Recruiter>,
    delta: i64,
    target_date: Option<NaiveDate>,
) -> LeaderboardResult<Option<Recruiter>> {
    if delta == 0 {
        return Ok(None);
    }

    let mut roster = repo.try_load()?;
    let Some(recruiter) = roster.find_by_id_mut(recruiter_id) else {
        debug!(id = %recruiter_id, "adjust skipped, recruiter not found");
        return Ok(None);
    };

    let before = recruiter.applicant_count();
    if delta > 0 {
        let count = to_count(delta);
        check_total(before.checked_add(count), delta.unsigned_abs())?;
        let added = synthesize_applicants(count, before, target_date);
        recruiter.applicants.extend(added);
    } else {
        let remove = to_count(delta);
        recruiter.applicants.truncate(before.saturating_sub(remove));
    }

    let updated = recruiter.clone();
    repo.save(&roster)?;
    info!(
        id = %recruiter_id,
        delta,
        before,
        after = updated.applicant_count(),
        "applicant count adjusted"
    );
    Ok(Some(updated))
}

/// Reconcile a recruiter's list against an authoritative total.
///
/// Growing appends placeholders like [`adjust_by_delta`]. Shrinking is a
/// trim to length: only the first `total_count` entries are kept. A matching
/// total returns the recruiter untouched and writes nothing. Totals above
/// [`MAX_APPLICANTS`] are rejected.
pub fn sync_to_absolute<S: KeyValueStore>(
    repo: &RosterRepo<S>,
    recruiter_id: &Id<Recruiter>,
    total_count: usize,
    target_date: Option<NaiveDate>,
) -> LeaderboardResult<Option<Recruiter>> {
    check_total(Some(total_count), total_count as u64)?;

    let mut roster = repo.try_load()?;
    let Some(recruiter) = roster.find_by_id_mut(recruiter_id) else {
        debug!(id = %recruiter_id, "sync skipped, recruiter not found");
        return Ok(None);
    };

    let current = recruiter.applicant_count();
    if total_count == current {
        return Ok(Some(recruiter.clone()));
    }

    if total_count > current {
        let added = synthesize_applicants(total_count - current, current, target_date);
        recruiter.applicants.extend(added);
    } else {
        recruiter.applicants.truncate(total_count);
    }

    let updated = recruiter.clone();
    repo.save(&roster)?;
    info!(
        id = %recruiter_id,
        before = current,
        after = total_count,
        "applicant count synced"
    );
    Ok(Some(updated))
}

fn check_total(total: Option<usize>, requested: u64) -> LeaderboardResult<()> {
    match total {
        Some(total) if total <= MAX_APPLICANTS => Ok(()),
        _ => Err(LeaderboardError::TooManyApplicants {
            requested,
            limit: MAX_APPLICANTS,
        }),
    }
}

fn to_count(delta: i64) -> usize {
    usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX)
}

/// Placeholder applicants numbered after the `existing` ones. Callers keep
/// `existing + count` within [`MAX_APPLICANTS`].
fn synthesize_applicants(
    count: usize,
    existing: usize,
    target_date: Option<NaiveDate>,
) -> Vec<Applicant> {
    let now = Utc::now();
    let applied = target_date.map(noon_local).unwrap_or(now);
    let stamp = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());

    (0..count)
        .map(|i| {
            let number = existing + i + 1;
            Applicant::create(
                Id::generate("sync"),
                format!("candidate.{}.{}@portal-sync.com", stamp, number),
                format!("Candidate {}", number),
                applied,
                SYNTHETIC_SOURCE,
            )
        })
        .collect()
}
