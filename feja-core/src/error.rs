use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FejaError {
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Path inaccessible: {0}")]
    PathInaccessible(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FejaError>;
