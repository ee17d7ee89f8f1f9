use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },

    #[error("Too many applicants: {requested} requested, at most {limit} allowed")]
    TooManyApplicants { requested: u64, limit: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
