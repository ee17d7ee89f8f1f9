use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::recruiter::Recruiter;

/// Every recruiter in the campaign. Persisted as a single JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub recruiters: Vec<Recruiter>,
}

impl Roster {
    pub fn new(recruiters: Vec<Recruiter>) -> Self {
        Self { recruiters }
    }

    pub fn find_by_id(&self, id: &Id<Recruiter>) -> Option<&Recruiter> {
        self.recruiters.iter().find(|r| &r.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &Id<Recruiter>) -> Option<&mut Recruiter> {
        self.recruiters.iter_mut().find(|r| &r.id == id)
    }

    /// Replace the recruiter with the same id, or append it.
    pub fn upsert(&mut self, recruiter: Recruiter) {
        match self.find_by_id_mut(&recruiter.id) {
            Some(existing) => *existing = recruiter,
            None => self.recruiters.push(recruiter),
        }
    }

    pub fn len(&self) -> usize {
        self.recruiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recruiters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recruiter> {
        self.recruiters.iter()
    }

    pub fn total_applicants(&self) -> usize {
        self.recruiters.iter().map(Recruiter::applicant_count).sum()
    }
}
