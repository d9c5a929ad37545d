//! Error type shared by the screening crates

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ScreenError>;

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("job description is empty")]
    EmptyQuery,

    #[error("no candidate resumes were supplied")]
    NoCandidates,

    #[error("match threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("skill vocabulary is empty")]
    EmptyVocabulary,

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScreenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScreenError::Io {
            path: path.into(),
            source,
        }
    }
}
