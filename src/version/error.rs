use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid runtime version: {0}")]
    InvalidVersion(String),
}

#[derive(Debug, Error)]
pub enum PrebuildError {
    #[error("Failed to read prebuild list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid prebuild list: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}
