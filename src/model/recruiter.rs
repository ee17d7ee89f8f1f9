use serde::{Deserialize, Serialize};

use super::applicant::Applicant;
use super::ids::Id;

pub const DEFAULT_COMPANY: &str = "Talent Team";
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// A competitor on the leaderboard.
///
/// `applicants` is kept in insertion order. It is not sorted by applied
/// date, and the reconciliation operations rely on that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: Id<Recruiter>,
    pub name: String,
    pub avatar: String,
    pub company: String,
    #[serde(default)]
    pub applicants: Vec<Applicant>,
    #[serde(default)]
    pub is_bot: bool,
}

impl Recruiter {
    pub fn create(id: Id<Recruiter>, name: String) -> Self {
        let avatar = avatar_url(&name);
        Self {
            id,
            name,
            avatar,
            company: DEFAULT_COMPANY.to_string(),
            applicants: Vec::new(),
            is_bot: false,
        }
    }

    pub fn applicant_count(&self) -> usize {
        self.applicants.len()
    }

    /// Change the display name; the avatar follows the name.
    pub fn rename(&mut self, name: String) {
        self.avatar = avatar_url(&name);
        self.name = name;
    }
}

/// Deterministic avatar URL for a display name.
pub fn avatar_url(name: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, encode_component(name))
}

// Matches JavaScript's encodeURIComponent: RFC 3986 unreserved characters
// (`A-Z a-z 0-9 - _ . ~`) plus `! * ' ( )` pass through; every other UTF-8
// byte becomes `%XX`, uppercase hex.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
