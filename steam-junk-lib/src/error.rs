use steam_junk_catalog::ParseError;
use steam_junk_tags::TagError;
use thiserror::Error;

/// Errors that can occur while running a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Parse error in {path}: {source}")]
    Parse { path: String, source: ParseError },

    #[error("Tag snapshot error: {0}")]
    Tags(#[from] TagError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Directory not found: {0}")]
    DirNotFound(String),

    #[error("Cannot take a year from file name: {0}")]
    MissingYear(String),
}

impl BatchError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
