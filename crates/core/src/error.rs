use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path {} exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("embedded payload is not valid base64")]
    Decode(#[from] base64::DecodeError),
}

impl GeneratorError {
    /// Path the failure happened on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GeneratorError::CreateDir { path, .. }
            | GeneratorError::NotADirectory { path }
            | GeneratorError::Write { path, .. } => Some(path),
            GeneratorError::Decode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
