use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewStateError {
    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error("malformed JSON under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected value shape under '{key}'")]
    InvalidShape { key: String },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ViewStateError>;
