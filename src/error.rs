//! Error types: configuration and remote I/O.

/// Invalid or incomplete card configuration. Fatal to setup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No backing list entity was given.
    #[error("please define an entity (e.g. todo.shopping_list)")]
    MissingEntity,

    /// The configuration object could not be decoded.
    #[error("invalid card configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// A failed call to a remote collaborator (list store, categorizer, host service).
///
/// These are always recovered from: the caller logs and keeps the last good view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Network or service failure. The next natural refresh may succeed.
    #[error("{operation} failed: {message}")]
    Transient {
        operation: &'static str,
        message: String,
    },
}

impl RemoteError {
    /// Shorthand for a transient failure of `operation`.
    pub fn transient(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transient {
            operation,
            message: message.into(),
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Transient { operation, .. } => operation,
        }
    }
}
