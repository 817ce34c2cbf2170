//! Error types for assetdb-path

use std::fmt;
use std::path::PathBuf;

/// Result type for assetdb-path operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Empty or whitespace-only input
    Empty,
    /// Neither `Assets`/`Packages/` relative nor located under the project root
    NotAProjectPath,
    /// A file name fragment contained `/` or `\`
    ContainsSeparator,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Empty => "must not be empty or whitespace",
            Self::NotAProjectPath => "not a project path",
            Self::ContainsSeparator => "must not contain path separators",
        };
        f.write_str(text)
    }
}

/// Errors that can occur in assetdb-path operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Argument '{name}' is required")]
    NullArgument { name: &'static str },

    #[error("Invalid argument '{name}' ({value:?}): {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: InvalidReason,
    },

    #[error("Invalid operation on '{path}': {reason}")]
    InvalidOperation { path: String, reason: String },

    #[error("Project roots are not configured; cannot resolve absolute path {path:?}")]
    RootsNotConfigured { path: String },

    #[error("Project roots are already configured")]
    RootsAlreadyConfigured,

    #[error("No project with an Assets folder found above {start}")]
    ProjectNotFound { start: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config at {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(name: &'static str, value: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidArgument {
            name,
            value: value.into(),
            reason,
        }
    }

    /// True for [`Error::NullArgument`].
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// True for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// True for [`Error::InvalidOperation`].
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}
