use std::time::Duration;

use tracing::warn;

use super::{Assistant, ParsedApplicant, EMPTY_REPLY_TIP, FAILURE_TIP, NO_KEY_TIP};
use crate::config::AiConfig;
use crate::model::Recruiter;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assistant backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiAssistant {
    config: AiConfig,
    timeout: Duration,
}

impl GeminiAssistant {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn generate(&self, api_key: &str, prompt: &str, json_output: bool) -> Result<String, String> {
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if json_output {
            body["generationConfig"] = serde_json::json!({ "responseMimeType": "application/json" });
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        // Header, not query string: transport errors echo the URL.
        let response = ureq::post(&url)
            .set("x-goog-api-key", api_key)
            .set("Content-Type", "application/json")
            .timeout(self.timeout)
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    format!("Gemini request failed (HTTP {}): {}", code, truncate(&body, 200))
                }
                ureq::Error::Transport(t) => format!("Could not reach Gemini: {}", t),
            })?;

        let json: serde_json::Value = response
            .into_json()
            .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

        Ok(reply_text(&json))
    }
}

impl Assistant for GeminiAssistant {
    fn coaching_tip(&self, current: &Recruiter, leader: &Recruiter) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return NO_KEY_TIP.to_string();
        };

        match self.generate(api_key, &coaching_prompt(current, leader), false) {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY_TIP.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "coaching tip unavailable");
                FAILURE_TIP.to_string()
            }
        }
    }

    fn parse_unstructured(&self, text: &str) -> Vec<ParsedApplicant> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Vec::new();
        };

        let parsed = self
            .generate(api_key, &extraction_prompt(text), true)
            .and_then(|content| parse_llm_json(&content));

        match parsed {
            Ok(applicants) => applicants,
            Err(e) => {
                warn!(error = %e, "applicant extraction failed");
                Vec::new()
            }
        }
    }
}

fn coaching_prompt(current: &Recruiter, leader: &Recruiter) -> String {
    let user_count = current.applicant_count();
    let leader_count = leader.applicant_count();
    let diff = leader_count as i64 - user_count as i64;

    format!(
        r#"Context: A sales/recruiter leaderboard competition.
User: {user} has {user_count} applicants.
Leader: {leader} has {leader_count} applicants.
Difference: {diff}.

Task: Provide a short, high-energy, 1-sentence motivational coaching tip for {user}.
If they are winning, congratulate them. If losing, tell them how close they are or to push harder.
Be spicy and competitive."#,
        user = current.name,
        leader = leader.name,
    )
}

fn extraction_prompt(text: &str) -> String {
    format!(
        r#"Extract applicant data from this unstructured text.
Return ONLY a JSON array of objects with keys: "name", "email", "date" (ISO string).
If date is missing, use today. Generate fake email if missing based on name.

Text:
{text}"#
    )
}

// Concatenated text parts of the first candidate, or empty.
fn reply_text(json: &serde_json::Value) -> String {
    json.pointer("/candidates/0/content/parts")
        .and_then(|v| v.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Lenient reading of the model's JSON: tolerates code fences, a wrapping
/// object, and entries with missing fields. Entries without a name are
/// dropped.
pub(crate) fn parse_llm_json(content: &str) -> Result<Vec<ParsedApplicant>, String> {
    let cleaned = strip_code_fence(content);
    let json: serde_json::Value =
        serde_json::from_str(cleaned).map_err(|e| format!("Failed to parse LLM response: {}", e))?;

    let items = match &json {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(map) => map
            .values()
            .find_map(|v| v.as_array())
            .ok_or("LLM response object holds no array")?,
        _ => return Err("LLM response is not a JSON array".into()),
    };

    let field = |item: &serde_json::Value, key: &str| {
        item.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let name = field(item, "name")?;
            Some(ParsedApplicant {
                name,
                email: field(item, "email").unwrap_or_default(),
                date: field(item, "date"),
            })
        })
        .collect())
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
