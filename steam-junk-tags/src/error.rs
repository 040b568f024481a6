/// Errors that can occur while loading or persisting a tag dictionary snapshot.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid tag snapshot: {0}")]
    InvalidSnapshot(String),
}

impl TagError {
    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        Self::InvalidSnapshot(msg.into())
    }
}
