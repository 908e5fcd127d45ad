//! Error types for Quillpress Core

use thiserror::Error;

/// Result type alias using QuillpressError
pub type Result<T> = std::result::Result<T, QuillpressError>;

/// Top-level error type for all Quillpress operations
///
/// The front end shows the `Display` output of this type as the single
/// user-facing message for a failed export.
#[derive(Debug, Error)]
pub enum QuillpressError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Error generating EPUB: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Error generating EPUB: {0}")]
    Serialize(#[from] SerializeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input problems detected before assembly begins
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide both title and author name: missing title")]
    MissingTitle,

    #[error("Please provide both title and author name: missing author")]
    MissingAuthor,

    #[error("Please add some content to at least one chapter")]
    NoContent,
}

/// Failures while building the in-memory package
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Failed to encode cover image: {0}")]
    CoverEncoding(#[from] image::ImageError),
}

/// Failures while writing the container byte stream
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write archive: {0}")]
    Io(#[from] std::io::Error),
}
