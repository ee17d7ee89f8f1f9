use crate::db::{KeyValueStore, RosterRepo};
use crate::error::LeaderboardResult;
use crate::model::{Id, Recruiter};
use crate::validation;

pub fn add_recruiter<S: KeyValueStore>(
    repo: &RosterRepo<S>,
    name: &str,
) -> LeaderboardResult<Recruiter> {
    let valid_name = validation::non_blank(name, "name")?;
    repo.add_recruiter(valid_name)
}

/// `Ok(false)` means no recruiter has `id`; nothing was written.
pub fn rename_recruiter<S: KeyValueStore>(
    repo: &RosterRepo<S>,
    id: &Id<Recruiter>,
    new_name: &str,
) -> LeaderboardResult<bool> {
    let valid_name = validation::non_blank(new_name, "name")?;
    repo.rename_recruiter(id, valid_name)
}

/// Pick a recruiter from the roster to act as.
pub fn login<S: KeyValueStore>(repo: &RosterRepo<S>, id: &Id<Recruiter>) -> Option<Recruiter> {
    repo.find_by_id(id)
}
