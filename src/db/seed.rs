use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use rand::Rng;
use tracing::debug;

use crate::model::{Applicant, Id, Recruiter, Roster, SEED_SOURCE};

/// The campaign's team, in display order.
pub const TEAM_ROSTER: [&str; 10] = [
    "Alice Chen",
    "Bob Smith",
    "Charlie Davis",
    "Diana Prince",
    "Evan Wright",
    "Fiona Gallagher",
    "George Miller",
    "Hannah Lee",
    "Ivan Petrov",
    "Jessica Wu",
];

const MIN_SEED_APPLICANTS: usize = 5;
const MAX_SEED_APPLICANTS: usize = 45;

/// Half-open interval `[start, end)` inside which applications are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CampaignWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Dec 1 through Dec 21 (exclusive), local time.
    pub fn december(year: i32) -> Self {
        Self::new(local_midnight(year, 12, 1), local_midnight(year, 12, 21))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    fn random_instant<R: Rng>(&self, rng: &mut R) -> DateTime<Utc> {
        let span = (self.end - self.start).num_milliseconds();
        if span <= 0 {
            return self.start;
        }
        self.start + Duration::milliseconds(rng.gen_range(0..span))
    }
}

fn local_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

/// Build the demo roster: one recruiter per team member, each with a random
/// number of applicants spread across the window.
pub fn seed_roster<R: Rng>(rng: &mut R, window: &CampaignWindow) -> Roster {
    let recruiters = TEAM_ROSTER
        .iter()
        .enumerate()
        .map(|(idx, name)| seed_recruiter(rng, window, name, Id::new(format!("recruiter-{}", idx))))
        .collect::<Vec<_>>();

    let roster = Roster::new(recruiters);
    debug!(
        recruiters = roster.len(),
        applicants = roster.total_applicants(),
        "seeded demo roster"
    );
    roster
}

fn seed_recruiter<R: Rng>(
    rng: &mut R,
    window: &CampaignWindow,
    name: &str,
    id: Id<Recruiter>,
) -> Recruiter {
    let count = rng.gen_range(MIN_SEED_APPLICANTS..MAX_SEED_APPLICANTS);
    let id_prefix = format!("app-{}", id);
    let mut recruiter = Recruiter::create(id, name.to_string());

    recruiter.applicants = (0..count)
        .map(|i| {
            Applicant::create(
                Id::new(format!("{}-{}", id_prefix, i)),
                format!("candidate{}@example.com", i),
                format!("Candidate {}", i),
                window.random_instant(rng),
                SEED_SOURCE,
            )
        })
        .collect();
    recruiter
}
