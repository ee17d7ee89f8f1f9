use super::{Assistant, ParsedApplicant};
use crate::model::Recruiter;

/// Offline assistant with fully predictable output.
#[derive(Debug, Clone, Default)]
pub struct StubAssistant {
    parsed: Vec<ParsedApplicant>,
}

impl StubAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `parse_unstructured` return `parsed` for any input.
    pub fn with_parsed(parsed: Vec<ParsedApplicant>) -> Self {
        Self { parsed }
    }
}

impl Assistant for StubAssistant {
    fn coaching_tip(&self, current: &Recruiter, leader: &Recruiter) -> String {
        let mine = current.applicant_count();
        let theirs = leader.applicant_count();
        if mine >= theirs {
            format!("You're in the lead with {} applicants. Keep it up!", mine)
        } else {
            format!(
                "Only {} applicants behind {}. Push harder!",
                theirs - mine,
                leader.name
            )
        }
    }

    fn parse_unstructured(&self, text: &str) -> Vec<ParsedApplicant> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.parsed.clone()
    }
}
