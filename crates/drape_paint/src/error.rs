//! Paint error types

use thiserror::Error;

/// Errors reported by a graphics context while drawing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// The adapter cannot draw this kind of outline
    #[error("unsupported outline: {0}")]
    UnsupportedShape(String),

    /// A host-defined stroke name the adapter does not know
    #[error("unknown stroke `{0}`")]
    UnknownStroke(String),

    /// The underlying surface rejected the draw call
    #[error("draw failed: {0}")]
    DrawFailed(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
