pub mod schema;
pub mod kv_store;
pub mod seed;
pub mod roster_repo;

pub use kv_store::{KeyValueStore, MemoryStore, SqliteStore};
pub use roster_repo::{RosterRepo, DEFAULT_STORAGE_KEY};
pub use seed::{seed_roster, CampaignWindow, TEAM_ROSTER};
