//! Typed errors for the listing engine.
//!
//! Uses `thiserror` for library errors (the demo binary wraps them in
//! `anyhow`). A missing id is the only domain error; storage failures
//! surface separately so callers can tell the two apart.

use thiserror::Error;

/// Errors that can occur in engine or storage operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No property with the given id
    #[error("property not found: {id}")]
    PropertyNotFound { id: u32 },

    /// No saved record with the given id
    #[error("saved record not found: {id}")]
    SavedRecordNotFound { id: u32 },

    /// The storage collaborator failed (network, decode, backend down)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Startup configuration is invalid
    #[error("config error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// True for the domain miss variants, false for transport/config failures
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PropertyNotFound { .. } | Self::SavedRecordNotFound { .. }
        )
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
