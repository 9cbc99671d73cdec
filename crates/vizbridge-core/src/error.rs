//! Error types for vizbridge.

use thiserror::Error;

/// The main error type for vizbridge operations.
#[derive(Error, Debug)]
pub enum VizError {
    /// vizbridge has not been initialized.
    #[error("vizbridge not initialized - call vizbridge::init() first")]
    NotInitialized,

    /// vizbridge has already been initialized.
    #[error("vizbridge already initialized")]
    AlreadyInitialized,

    /// A structure with the given name was not found.
    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    /// A quantity with the given name was not found.
    #[error("quantity '{0}' not found on structure '{1}'")]
    QuantityNotFound(String, String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An external interrupt request was pending at an event dispatch
    /// checkpoint. The registered handler was not invoked.
    #[error("interrupted by host environment")]
    Interrupted,

    /// A user-supplied event handler reported a failure.
    #[error("event handler failed: {0}")]
    Handler(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for vizbridge operations.
pub type Result<T> = std::result::Result<T, VizError>;
