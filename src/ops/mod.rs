pub mod applicant_ops;
pub mod import_ops;
pub mod recruiter_ops;

pub use applicant_ops::{adjust_by_delta, sync_to_absolute, MAX_APPLICANTS};
pub use import_ops::{import_parsed, ImportOutcome};
pub use recruiter_ops::{add_recruiter, login, rename_recruiter};
