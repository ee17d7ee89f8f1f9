use crate::model::{Id, Recruiter, Roster};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing<'a> {
    /// 1-based position. Ties get consecutive positions in roster order.
    pub rank: usize,
    pub recruiter: &'a Recruiter,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSummary {
    pub total_recruiters: usize,
    /// Recruiters not flagged as bots.
    pub human_recruiters: usize,
    pub total_applicants: usize,
    /// Placeholders created by count adjustments rather than real entries.
    pub synthetic_applicants: usize,
    pub leader: Option<(String, usize)>,
}

/// Recruiters by applicant count, highest first.
pub fn ranking(roster: &Roster) -> Vec<Standing<'_>> {
    let mut ordered: Vec<&Recruiter> = roster.iter().collect();
    // sort_by is stable, so equal counts keep roster order.
    ordered.sort_by(|a, b| b.applicant_count().cmp(&a.applicant_count()));

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, recruiter)| Standing {
            rank: idx + 1,
            recruiter,
            count: recruiter.applicant_count(),
        })
        .collect()
}

pub fn leader(roster: &Roster) -> Option<&Recruiter> {
    ranking(roster).first().map(|s| s.recruiter)
}

pub fn rank_of(roster: &Roster, id: &Id<Recruiter>) -> Option<usize> {
    ranking(roster)
        .iter()
        .find(|s| &s.recruiter.id == id)
        .map(|s| s.rank)
}

/// Applicants the recruiter needs to draw level with the leader.
pub fn gap_to_leader(roster: &Roster, id: &Id<Recruiter>) -> Option<usize> {
    let recruiter = roster.find_by_id(id)?;
    let top = leader(roster)?;
    Some(top.applicant_count().saturating_sub(recruiter.applicant_count()))
}

pub fn campaign_summary(roster: &Roster) -> CampaignSummary {
    let synthetic_applicants = roster
        .iter()
        .flat_map(|r| r.applicants.iter())
        .filter(|a| a.is_synthetic())
        .count();

    CampaignSummary {
        total_recruiters: roster.len(),
        human_recruiters: roster.iter().filter(|r| !r.is_bot).count(),
        total_applicants: roster.total_applicants(),
        synthetic_applicants,
        leader: leader(roster).map(|r| (r.name.clone(), r.applicant_count())),
    }
}
