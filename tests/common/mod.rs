#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use leaderboard::db::*;
use leaderboard::model::*;

pub fn applicant(recruiter: usize, n: usize) -> Applicant {
    Applicant::create(
        Id::new(format!("app-r{}-{}", recruiter, n)),
        format!("candidate{}@example.com", n),
        format!("Candidate {}", n),
        Utc.with_ymd_and_hms(2025, 12, 1 + (n % 20) as u32, 12, 0, 0).unwrap(),
        SEED_SOURCE,
    )
}

pub fn recruiter(idx: usize, count: usize) -> Recruiter {
    let mut r = Recruiter::create(Id::new(format!("r{}", idx)), format!("Recruiter {}", idx));
    r.applicants = (0..count).map(|n| applicant(idx, n)).collect();
    r
}

pub fn empty_repo() -> RosterRepo<MemoryStore> {
    RosterRepo::new(MemoryStore::new())
        .with_seed(11)
        .with_window(CampaignWindow::december(2025))
}

/// A repo whose stored roster has one recruiter per entry in `counts`,
/// with ids `r0`, `r1`, ...
pub fn repo_with(counts: &[usize]) -> RosterRepo<MemoryStore> {
    let repo = empty_repo();
    let recruiters = counts
        .iter()
        .enumerate()
        .map(|(idx, &count)| recruiter(idx, count))
        .collect();
    repo.save(&Roster::new(recruiters)).unwrap();
    repo
}

pub fn stored_blob(repo: &RosterRepo<MemoryStore>) -> Option<String> {
    repo.store().get(repo.key()).unwrap()
}

pub fn ids(recruiter: &Recruiter) -> Vec<String> {
    recruiter
        .applicants
        .iter()
        .map(|a| a.id.as_str().to_string())
        .collect()
}
