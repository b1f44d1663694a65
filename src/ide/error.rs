//! Error types for the host-facing annotation API.
//!
//! Building annotations never fails; these only surface when the host asks
//! about something that is not there or hands in an unusable config.

use thiserror::Error;

use crate::base::Position;

/// Errors returned by [`InlineNoteProvider`](super::InlineNoteProvider) and
/// [`SourceInfoConfig`](super::SourceInfoConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceInfoError {
    /// The host asked to size or paint a position that holds no annotation.
    #[error("No annotation at {}:{}", .0.line, .0.column)]
    NoAnnotation(Position),

    /// Config rejected by validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl SourceInfoError {
    /// Create a missing annotation error.
    pub fn no_annotation(position: Position) -> Self {
        Self::NoAnnotation(position)
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result alias for the annotation API.
pub type SourceInfoResult<T> = Result<T, SourceInfoError>;
