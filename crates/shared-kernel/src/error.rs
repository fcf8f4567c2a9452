// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ManifestError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl ManifestError {
    /// Walks through `Context` wrappers to the underlying domain error, if any.
    #[must_use]
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.domain(),
            Self::Domain(err) => Some(err),
            Self::Infrastructure(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;

/// Anticipated precondition failures. Each aborts the run before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("directory to scan not found: '{}'", path.display())]
    RootNotFound { path: PathBuf },

    #[error("copy source directory not found: '{}'", path.display())]
    SourceNotFound { path: PathBuf },

    #[error(
        "copy destination '{}' is the source '{}' or lies inside it",
        destination.display(),
        origin.display()
    )]
    OverlappingCopy { origin: PathBuf, destination: PathBuf },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to list directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata of '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ManifestError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ManifestError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ManifestError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
