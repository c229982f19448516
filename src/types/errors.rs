use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    /// The schedule directory is missing or cannot be listed.
    #[error("Directory unavailable: {} ({reason})", path.display())]
    DirectoryUnavailable { path: PathBuf, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LinkError {
    pub fn directory_unavailable(path: &Path, reason: impl Into<String>) -> Self {
        LinkError::DirectoryUnavailable {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_directory_unavailable(&self) -> bool {
        matches!(self, LinkError::DirectoryUnavailable { .. })
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(error: serde_json::Error) -> Self {
        LinkError::Parse(error.to_string())
    }
}

// Reports embed errors as their display string
impl Serialize for LinkError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type LinkResult<T> = Result<T, LinkError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
