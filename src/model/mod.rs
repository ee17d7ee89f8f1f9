pub mod ids;
pub mod applicant;
pub mod recruiter;
pub mod roster;

// Re-exports for convenience
pub use ids::Id;
pub use applicant::{noon_local, Applicant, IMPORT_SOURCE, SEED_SOURCE, SYNTHETIC_SOURCE};
pub use recruiter::{avatar_url, Recruiter, DEFAULT_COMPANY};
pub use roster::Roster;
