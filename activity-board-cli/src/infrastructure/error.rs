use activity_board_core::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to load activities: {reason}")]
    LoadFailed { reason: String },

    #[error("{kind} rejected: {detail}")]
    Rejected { kind: String, detail: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn rejected(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        CliError::Rejected {
            kind: kind.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
