use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::{Applicant, Recruiter, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    /// e.g. "Dec 2025"
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStat {
    pub day: NaiveDate,
    pub count: usize,
}

/// Applicant counts per local calendar month, oldest month first.
pub fn monthly_totals<'a, I>(applicants: I) -> Vec<MonthlyStat>
where
    I: IntoIterator<Item = &'a Applicant>,
{
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for applicant in applicants {
        let day = applicant.local_day();
        *buckets.entry((day.year(), day.month())).or_default() += 1;
    }

    buckets
        .into_iter()
        .filter_map(|((year, month), count)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(MonthlyStat {
                month: first.format("%b %Y").to_string(),
                count,
            })
        })
        .collect()
}

pub fn recruiter_monthly_totals(recruiter: &Recruiter) -> Vec<MonthlyStat> {
    monthly_totals(&recruiter.applicants)
}

pub fn roster_monthly_totals(roster: &Roster) -> Vec<MonthlyStat> {
    monthly_totals(roster.iter().flat_map(|r| r.applicants.iter()))
}

/// Applicant counts per local calendar day, oldest first. Days with no
/// applicants are omitted.
pub fn daily_totals(recruiter: &Recruiter) -> Vec<DailyStat> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for applicant in &recruiter.applicants {
        *buckets.entry(applicant.local_day()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(day, count)| DailyStat { day, count })
        .collect()
}
