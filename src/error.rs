use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that stop the check before any file is examined.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{} not found", .path.display())]
    ManifestNotFound { path: PathBuf },
    #[error("failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },
}

/// Underlying cause of a manifest that exists but cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),
    #[error("invalid {0} byte sequence")]
    Malformed(&'static str),
}

impl CheckError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::ManifestNotFound { .. } | CheckError::ManifestParse { .. } => 1,
        }
    }
}
