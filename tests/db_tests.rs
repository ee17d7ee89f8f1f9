mod common;

use std::cell::Cell;

use common::*;
use leaderboard::db::*;
use leaderboard::error::{LeaderboardError, LeaderboardResult};
use leaderboard::model::*;

/// Memory store whose reads can be switched off while writes keep working.
#[derive(Default)]
struct ReadFailingStore {
    inner: MemoryStore,
    fail_reads: Cell<bool>,
}

impl KeyValueStore for ReadFailingStore {
    fn get(&self, key: &str) -> LeaderboardResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(LeaderboardError::Storage("read failed".into()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> LeaderboardResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> LeaderboardResult<()> {
        self.inner.remove(key)
    }
}

fn read_failing_repo(counts: &[usize]) -> RosterRepo<ReadFailingStore> {
    let repo = RosterRepo::new(ReadFailingStore::default()).with_seed(11);
    let recruiters = counts
        .iter()
        .enumerate()
        .map(|(idx, &count)| recruiter(idx, count))
        .collect();
    repo.save(&Roster::new(recruiters)).unwrap();
    repo
}

// ==========================================================================
// LOAD / SEEDING TESTS
// ==========================================================================

#[test]
fn load_seeds_and_persists_when_empty() {
    let repo = empty_repo();
    assert!(stored_blob(&repo).is_none());

    let roster = repo.load();
    assert_eq!(roster.len(), TEAM_ROSTER.len());
    assert!(stored_blob(&repo).is_some());
}

#[test]
fn load_is_idempotent() {
    let repo = empty_repo();
    let first = repo.load();
    let second = repo.load();
    assert_eq!(first, second);
}

#[test]
fn seeding_is_reproducible_with_same_seed() {
    let a = RosterRepo::new(MemoryStore::new())
        .with_seed(99)
        .with_window(CampaignWindow::december(2025));
    let b = RosterRepo::new(MemoryStore::new())
        .with_seed(99)
        .with_window(CampaignWindow::december(2025));
    assert_eq!(a.load(), b.load());
}

#[test]
fn seeded_roster_matches_team_list() {
    let repo = empty_repo();
    let roster = repo.load();
    for (idx, (recruiter, name)) in roster.iter().zip(TEAM_ROSTER.iter()).enumerate() {
        assert_eq!(recruiter.id, Id::new(format!("recruiter-{}", idx)));
        assert_eq!(&recruiter.name, name);
        assert_eq!(recruiter.company, DEFAULT_COMPANY);
        assert!(!recruiter.is_bot);
        for applicant in &recruiter.applicants {
            assert!(repo.window().contains(applicant.applied_date));
            assert_eq!(applicant.source, "LinkedIn");
        }
    }
}

#[test]
fn load_degrades_to_seed_when_store_unavailable() {
    let repo = empty_repo();
    repo.store().set_available(false);
    let roster = repo.load();
    assert_eq!(roster.len(), TEAM_ROSTER.len());
}

#[test]
fn load_read_failure_keeps_stored_roster() {
    let repo = read_failing_repo(&[2]);

    repo.store().fail_reads.set(true);
    let degraded = repo.load();
    assert_eq!(degraded.len(), TEAM_ROSTER.len());

    repo.store().fail_reads.set(false);
    let roster = repo.load();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.recruiters[0].id, Id::new("r0"));
    assert_eq!(roster.recruiters[0].applicant_count(), 2);
}

#[test]
fn try_load_surfaces_read_failure() {
    let repo = read_failing_repo(&[2]);
    repo.store().fail_reads.set(true);
    assert!(matches!(repo.try_load(), Err(LeaderboardError::Storage(_))));
}

#[test]
fn mutations_fail_instead_of_overwriting_on_read_failure() {
    let repo = read_failing_repo(&[2]);
    repo.store().fail_reads.set(true);

    assert!(repo.upsert(recruiter(5, 1)).is_err());
    assert!(repo.add_recruiter("Kim Park".into()).is_err());
    assert!(repo.rename_recruiter(&Id::new("r0"), "Renamed".into()).is_err());

    repo.store().fail_reads.set(false);
    let roster = repo.load();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.recruiters[0].name, "Recruiter 0");
}

#[test]
fn load_reseeds_and_backs_up_malformed_blob() {
    let repo = empty_repo();
    repo.store().set(repo.key(), "{not json").unwrap();

    let roster = repo.load();
    assert_eq!(roster.len(), TEAM_ROSTER.len());

    let backup = repo.store().get(&format!("{}.corrupt", repo.key())).unwrap();
    assert_eq!(backup.as_deref(), Some("{not json"));
    assert!(serde_json::from_str::<Roster>(&stored_blob(&repo).unwrap()).is_ok());
}

#[test]
fn load_reads_original_stored_shape() {
    let repo = empty_repo();
    let blob = r#"[{"id":"recruiter-0","name":"Alice Chen",
        "avatar":"https://api.dicebear.com/7.x/avataaars/svg?seed=Alice Chen",
        "company":"Talent Team",
        "applicants":[{"id":"app-recruiter-0-0","email":"candidate0@example.com",
            "name":"Candidate 0","appliedDate":"2025-12-05T14:03:11.512Z","source":"LinkedIn"}]}]"#;
    repo.store().set(repo.key(), blob).unwrap();

    let roster = repo.load();
    assert_eq!(roster.len(), 1);
    let alice = &roster.recruiters[0];
    assert_eq!(alice.applicant_count(), 1);
    assert!(!alice.is_bot);
    assert_eq!(alice.applicants[0].email, "candidate0@example.com");
}

// ==========================================================================
// SAVE TESTS
// ==========================================================================

#[test]
fn save_writes_camel_case_array() {
    let repo = repo_with(&[1]);
    let json: serde_json::Value = serde_json::from_str(&stored_blob(&repo).unwrap()).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["id"], "r0");
    assert_eq!(json[0]["isBot"], false);
    assert!(json[0]["applicants"][0]["appliedDate"].is_string());
}

#[test]
fn save_surfaces_quota_errors() {
    let repo = RosterRepo::new(MemoryStore::with_quota(64)).with_seed(1);
    let result = repo.save(&Roster::new(vec![recruiter(0, 3)]));
    assert!(matches!(result, Err(LeaderboardError::Storage(_))));
}

#[test]
fn save_surfaces_disabled_store() {
    let repo = repo_with(&[1]);
    repo.store().set_available(false);
    let result = repo.save(&Roster::default());
    assert!(matches!(result, Err(LeaderboardError::Storage(_))));
}

#[test]
fn custom_key_is_used() {
    let repo = empty_repo().with_key("other_campaign");
    repo.load();
    assert!(repo.store().get("other_campaign").unwrap().is_some());
    assert!(repo.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

// ==========================================================================
// UPSERT / ADD / RENAME TESTS
// ==========================================================================

#[test]
fn upsert_replaces_existing_recruiter() {
    let repo = repo_with(&[2, 3]);
    let mut r1 = repo.find_by_id(&Id::new("r1")).unwrap();
    r1.is_bot = true;

    let roster = repo.upsert(r1).unwrap();
    assert_eq!(roster.len(), 2);
    assert!(repo.load().find_by_id(&Id::new("r1")).unwrap().is_bot);
}

#[test]
fn upsert_appends_new_recruiter() {
    let repo = repo_with(&[2]);
    repo.upsert(recruiter(7, 0)).unwrap();
    let roster = repo.load();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.recruiters[1].id, Id::new("r7"));
}

#[test]
fn add_recruiter_persists_empty_recruiter() {
    let repo = repo_with(&[2]);
    let added = repo.add_recruiter("Kim Park".into()).unwrap();

    assert!(added.applicants.is_empty());
    assert_eq!(added.avatar, avatar_url("Kim Park"));
    assert_eq!(repo.find_by_id(&added.id), Some(added.clone()));
}

#[test]
fn add_recruiter_twice_never_collides() {
    let repo = repo_with(&[]);
    let a = repo.add_recruiter("Same Name".into()).unwrap();
    let b = repo.add_recruiter("Same Name".into()).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(repo.load().len(), 2);
}

#[test]
fn rename_unknown_recruiter_changes_nothing() {
    let repo = repo_with(&[2]);
    let before = stored_blob(&repo);
    assert!(!repo.rename_recruiter(&Id::new("missing"), "Nobody".into()).unwrap());
    assert_eq!(stored_blob(&repo), before);
}

#[test]
fn rename_updates_name_and_avatar() {
    let repo = repo_with(&[2]);
    assert!(repo.rename_recruiter(&Id::new("r0"), "Zoë Adams".into()).unwrap());
    let r0 = repo.find_by_id(&Id::new("r0")).unwrap();
    assert_eq!(r0.name, "Zoë Adams");
    assert_eq!(r0.avatar, avatar_url("Zoë Adams"));
    assert_eq!(r0.applicant_count(), 2);
}

// ==========================================================================
// SQLITE STORE TESTS
// ==========================================================================

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("leaderboard.db");

    let first = {
        let repo = RosterRepo::new(SqliteStore::open(&path).unwrap()).with_seed(5);
        let roster = repo.load();
        repo.add_recruiter("Late Joiner".into()).unwrap();
        roster
    };

    let repo = RosterRepo::new(SqliteStore::open(&path).unwrap()).with_seed(6);
    let reloaded = repo.load();
    assert_eq!(reloaded.len(), first.len() + 1);
    assert_eq!(reloaded.recruiters[..first.len()], first.recruiters[..]);
}

#[test]
fn sqlite_in_memory_store_seeds() {
    let repo = RosterRepo::new(SqliteStore::open_in_memory().unwrap()).with_seed(5);
    assert_eq!(repo.load(), repo.load());
}

#[test]
fn from_config_uses_key_and_campaign_year() {
    let config = leaderboard::config::AppConfig::from_lookup(|name| match name {
        "LEADERBOARD_STORAGE_KEY" => Some("campaign_2024".to_string()),
        "LEADERBOARD_CAMPAIGN_YEAR" => Some("2024".to_string()),
        _ => None,
    })
    .unwrap();

    let repo = RosterRepo::from_config(MemoryStore::new(), &config.storage, &config.campaign)
        .with_seed(4);
    assert_eq!(repo.key(), "campaign_2024");
    assert_eq!(*repo.window(), CampaignWindow::december(2024));

    let roster = repo.load();
    assert!(roster
        .iter()
        .flat_map(|r| r.applicants.iter())
        .all(|a| repo.window().contains(a.applied_date)));
}
