use std::env;
use std::path::PathBuf;

use chrono::{Datelike, Local};

use crate::db::{CampaignWindow, DEFAULT_STORAGE_KEY};
use crate::error::{LeaderboardError, LeaderboardResult};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_DB_PATH: &str = ".data/leaderboard.db";

/// Top-level configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub campaign: CampaignConfig,
    pub ai: AiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> LeaderboardResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; `load` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> LeaderboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let year = match var("LEADERBOARD_CAMPAIGN_YEAR") {
            Some(raw) => raw.parse::<i32>().map_err(|_| {
                LeaderboardError::Config(format!("LEADERBOARD_CAMPAIGN_YEAR is not a year: {}", raw))
            })?,
            None => Local::now().year(),
        };

        Ok(Self {
            storage: StorageConfig {
                key: var("LEADERBOARD_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
                db_path: var("LEADERBOARD_DB")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            },
            campaign: CampaignConfig { year },
            ai: AiConfig {
                api_key: var("API_KEY").or_else(|| var("GEMINI_API_KEY")),
                model: var("LEADERBOARD_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string()),
            },
            telemetry: TelemetryConfig {
                log_level: var("LEADERBOARD_LOG").unwrap_or_else(|| "info".to_string()),
            },
        })
    }
}

/// Where the roster lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub key: String,
    pub db_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct CampaignConfig {
    pub year: i32,
}

impl CampaignConfig {
    pub fn window(&self) -> CampaignWindow {
        CampaignWindow::december(self.year)
    }
}

/// Credentials and endpoint for the hosted language model. A missing key
/// puts the assistant in fallback mode.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}
