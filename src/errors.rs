use thiserror::Error;

/// Error type for tracker persistence and field edits.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid value `{value}` for field `{field}`")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
