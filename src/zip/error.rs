use thiserror::Error;

/// Errors produced while building or assembling an archive.
#[derive(Error, Debug)]
pub enum ZipError {
    /// The entry is malformed at add time (empty name).
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    /// A name, size, offset, or count would overflow the fixed-width
    /// fields of the standard (non-Zip64) format.
    #[error("size limit exceeded: {0}")]
    SizeLimitExceeded(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenient result type for archive operations.
pub type Result<T> = std::result::Result<T, ZipError>;
