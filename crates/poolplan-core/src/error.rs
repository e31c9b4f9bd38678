use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("saved plan not found: {0}")]
    PlanNotFound(String),

    #[error("invalid share link: {0}")]
    InvalidShareLink(String),

    #[error("storage backend unavailable: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
