//! Error types for REPL sessions and interpreter commands.

use thiserror::Error;

/// Errors that can occur when launching or querying the interpreter.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The document has never been saved, so there is nothing to load.
    #[error("buffer is not associated with a file; save it first")]
    NoFileAssociated,

    /// The operating system could not start the interpreter.
    #[error("failed to start `{program}`: {source}")]
    SubprocessSpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend listing could not be obtained.
    #[error("failed to query backends from `{program}`: {source}")]
    BackendQueryFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A compile was requested for a backend the interpreter does not list.
    #[error("unknown compiler backend: {0}")]
    UnknownBackend(String),
}

impl SessionError {
    /// Create a spawn failure error.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::SubprocessSpawnFailure {
            program: program.into(),
            source,
        }
    }

    /// Create a backend query error.
    pub fn backend_query(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::BackendQueryFailed {
            program: program.into(),
            source,
        }
    }

    /// Whether the user can fix this without changing configuration.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NoFileAssociated | Self::UnknownBackend(_))
    }
}

/// Result alias for session operations.
pub type Result<T, E = SessionError> = std::result::Result<T, E>;
