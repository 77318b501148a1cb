//! Error types for the texture tools.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Invocation-level problems surface as [`ValidationError`]; everything that can go
//! wrong while handling a single file is an [`AssetError`] and stays with that file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for run configuration and policies.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Malformed or contradictory resize mode
    #[error("Invalid resize policy: {0}")]
    Policy(String),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Directory path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// Path does not exist
    #[error("Folder not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
}

/// Main error type for the texture tools.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Run configuration or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Image processing failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Decoding or encoding failed inside the codec
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

// Helper methods for error creation
impl AssetError {
    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotDirectory(path.into()))
    }

    pub fn policy(msg: impl Into<String>) -> Self {
        Self::Policy(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to AssetError
impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
