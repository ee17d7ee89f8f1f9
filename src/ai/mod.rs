pub mod llm_service;
pub mod stub;

use serde::{Deserialize, Serialize};

use crate::model::Recruiter;

pub use llm_service::GeminiAssistant;
pub use stub::StubAssistant;

/// Tip returned when no credential is configured.
pub const NO_KEY_TIP: &str = "Keep pushing! You're doing great.";
/// Tip returned when the model call fails.
pub const FAILURE_TIP: &str = "Focus on your unique value proposition to attract more candidates!";
/// Tip returned when the model answers with nothing.
pub const EMPTY_REPLY_TIP: &str = "Compete to win!";

/// One applicant pulled out of pasted free text. Fields are passed through
/// as the model wrote them; `date` is usually an ISO string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedApplicant {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Text generation capabilities used by the leaderboard screens.
///
/// Implementations never fail: every error is absorbed into a fixed
/// fallback so callers do not depend on network reachability.
pub trait Assistant {
    /// One-sentence motivational line for `current`, measured against `leader`.
    fn coaching_tip(&self, current: &Recruiter, leader: &Recruiter) -> String;

    /// Best-effort extraction of applicants from arbitrary text. Empty on
    /// any failure.
    fn parse_unstructured(&self, text: &str) -> Vec<ParsedApplicant>;
}
