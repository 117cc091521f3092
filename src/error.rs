use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Smoke test `{command}` failed ({status})")]
    SmokeTestFailed { command: String, status: String },

    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
