use crate::domain::MountainId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("climb record requires a climb date")]
    MissingClimbDate,

    #[error("mountain not in catalog: {0}")]
    UnknownMountain(MountainId),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage is disabled")]
    StorageDisabled,
}

pub type Result<T> = std::result::Result<T, Error>;
