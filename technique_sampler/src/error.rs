//! Error types for the technique sampler
//!
//! Per-frame math is total and never fails; every error here comes from
//! the collaborators behind the backend traits (asset loading, device,
//! presentation).

use std::fmt;

/// Result type for technique sampler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Technique sampler errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (draw submission, presentation, ...)
    BackendError(String),

    /// Invalid resource handle or descriptor
    InvalidResource(String),

    /// Initialization failed (scene setup, device recreation)
    InitializationFailed(String),

    /// A mesh, texture or font could not be loaded
    ResourceLoadFailed(String),

    /// The graphics device was invalidated; every device-dependent
    /// resource must be rebuilt before rendering resumes
    DeviceLost,
}

impl Error {
    /// Whether the error can be recovered from by rebuilding device state
    pub fn is_device_lost(&self) -> bool {
        matches!(self, Error::DeviceLost)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ResourceLoadFailed(msg) => write!(f, "Resource load failed: {}", msg),
            Error::DeviceLost => write!(f, "Graphics device lost"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
