use std::cell::RefCell;

use chrono::{Datelike, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{CampaignConfig, StorageConfig};
use crate::db::kv_store::KeyValueStore;
use crate::db::seed::{self, CampaignWindow};
use crate::error::LeaderboardResult;
use crate::model::{Id, Recruiter, Roster};

pub const DEFAULT_STORAGE_KEY: &str = "talentquest_campaign_dec_v1";

/// Reads and writes the whole roster as one JSON blob under one key.
///
/// There is no cache: every call does a full read-modify-write against the
/// store, so two repos over the same store always see each other's writes.
pub struct RosterRepo<S: KeyValueStore> {
    store: S,
    key: String,
    window: CampaignWindow,
    rng: RefCell<StdRng>,
}

impl<S: KeyValueStore> RosterRepo<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            window: CampaignWindow::december(Local::now().year()),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn from_config(store: S, storage: &StorageConfig, campaign: &CampaignConfig) -> Self {
        Self::new(store)
            .with_key(&storage.key)
            .with_window(campaign.window())
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn with_window(mut self, window: CampaignWindow) -> Self {
        self.window = window;
        self
    }

    /// Fix the seeding RNG so the demo roster is reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        self.rng.replace(StdRng::seed_from_u64(seed));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn window(&self) -> &CampaignWindow {
        &self.window
    }

    /// Return the stored roster, seeding and persisting a demo roster when
    /// nothing is stored. Never fails: if the store cannot be read, an
    /// unsaved demo roster is returned and the stored data is left alone.
    pub fn load(&self) -> Roster {
        match self.try_load() {
            Ok(roster) => roster,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read roster, using unsaved demo roster");
                self.seed()
            }
        }
    }

    /// Like [`load`](Self::load), but a read failure is returned instead of
    /// replaced by demo data. Every mutation loads through this.
    pub fn try_load(&self) -> LeaderboardResult<Roster> {
        match self.store.get(&self.key)? {
            Some(blob) => match serde_json::from_str::<Roster>(&blob) {
                Ok(roster) => return Ok(roster),
                Err(e) => {
                    warn!(key = %self.key, error = %e, "stored roster is malformed, re-seeding");
                    self.quarantine(&blob);
                }
            },
            None => debug!(key = %self.key, "no stored roster, seeding"),
        }

        let roster = self.seed();
        if let Err(e) = self.save(&roster) {
            warn!(key = %self.key, error = %e, "failed to persist seeded roster");
        }
        Ok(roster)
    }

    /// Replace the stored roster with `roster`.
    pub fn save(&self, roster: &Roster) -> LeaderboardResult<()> {
        let blob = serde_json::to_string(roster)?;
        self.store.set(&self.key, &blob)?;
        debug!(
            key = %self.key,
            recruiters = roster.len(),
            bytes = blob.len(),
            "roster saved"
        );
        Ok(())
    }

    pub fn find_by_id(&self, id: &Id<Recruiter>) -> Option<Recruiter> {
        self.load().find_by_id(id).cloned()
    }

    /// Replace the recruiter with the same id, or append it, then persist.
    pub fn upsert(&self, recruiter: Recruiter) -> LeaderboardResult<Roster> {
        let mut roster = self.try_load()?;
        roster.upsert(recruiter);
        self.save(&roster)?;
        Ok(roster)
    }

    pub fn add_recruiter(&self, name: String) -> LeaderboardResult<Recruiter> {
        let mut roster = self.try_load()?;
        let mut id = Id::generate("recruiter");
        while roster.find_by_id(&id).is_some() {
            id = Id::generate("recruiter");
        }

        let recruiter = Recruiter::create(id, name);
        roster.recruiters.push(recruiter.clone());
        self.save(&roster)?;
        info!(id = %recruiter.id, name = %recruiter.name, "recruiter added");
        Ok(recruiter)
    }

    /// Returns `false` without writing when `id` is unknown.
    pub fn rename_recruiter(&self, id: &Id<Recruiter>, new_name: String) -> LeaderboardResult<bool> {
        let mut roster = self.try_load()?;
        let Some(recruiter) = roster.find_by_id_mut(id) else {
            return Ok(false);
        };
        recruiter.rename(new_name);
        self.save(&roster)?;
        info!(id = %id, "recruiter renamed");
        Ok(true)
    }

    fn seed(&self) -> Roster {
        seed::seed_roster(&mut *self.rng.borrow_mut(), &self.window)
    }

    // Keep an unreadable blob around instead of silently overwriting it.
    fn quarantine(&self, blob: &str) {
        let backup_key = format!("{}.corrupt", self.key);
        if let Err(e) = self.store.set(&backup_key, blob) {
            warn!(key = %backup_key, error = %e, "failed to back up malformed roster");
        }
    }
}
