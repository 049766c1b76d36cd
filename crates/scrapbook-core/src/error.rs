//! Error types for the canvas editor.
//!
//! Pointer handling never fails; these errors come from configuration,
//! parsing host-supplied names, and board bookkeeping.

use thiserror::Error;

use crate::photo::PhotoId;

/// Errors reported by the canvas editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The canvas configuration is degenerate.
    #[error("Invalid canvas configuration: {0}")]
    InvalidConfig(String),

    /// A handle name did not match any known handle.
    #[error("Unknown handle: {0}")]
    UnknownHandle(String),

    /// The board holds no photo with this id.
    #[error("Unknown photo: {0}")]
    UnknownPhoto(PhotoId),

    /// The board already holds a photo with this id.
    #[error("Photo already on the board: {0}")]
    DuplicatePhoto(PhotoId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EditorError::InvalidConfig("minSize exceeds maxSize".into());
        assert_eq!(
            err.to_string(),
            "Invalid canvas configuration: minSize exceeds maxSize"
        );

        let err = EditorError::UnknownHandle("xx".into());
        assert_eq!(err.to_string(), "Unknown handle: xx");

        let err = EditorError::UnknownPhoto(PhotoId::from("p1"));
        assert_eq!(err.to_string(), "Unknown photo: p1");
    }
}
