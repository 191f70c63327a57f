//! Error types for precondition and configuration failures
//!
//! Runtime contingencies (short placement, opposite keys) are not errors;
//! everything here indicates a caller or config bug and is rejected up front.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rectangles must have a positive area
    #[error("rectangle dimensions must be positive, got {width}x{height}")]
    InvalidRect { width: i32, height: i32 },

    #[error("unknown maze variant: {0}")]
    UnknownVariant(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
