use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpillError {
    #[error("journal entry is empty")]
    EmptyEntry,

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SpillError {
    fn from(e: serde_json::Error) -> Self {
        SpillError::Serialization(e.to_string())
    }
}
