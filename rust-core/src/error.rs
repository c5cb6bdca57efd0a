//! Error types for the frequency data pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrequencyDataError {
    #[error("Failed to decode audio from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode frequency data as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Spectral transform failed: {0}")]
    Transform(String),
}

impl FrequencyDataError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FrequencyDataError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrequencyDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = FrequencyDataError::write(
            "/nowhere/out.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/out.json"));
        assert!(msg.contains("denied"));
    }
}
