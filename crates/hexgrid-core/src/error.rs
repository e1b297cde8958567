//! Error type shared by every fallible operation in the engine.

use thiserror::Error;

/// Precondition failures raised synchronously at the offending call.
///
/// None of these are transient: the engine performs no I/O, so retrying a
/// failed call with the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexGridError {
    #[error("Invalid layout: radius must be positive and finite, got {radius}")]
    InvalidLayout { radius: f64 },

    #[error("Invalid grid: extent must be positive, got {columns}x{rows}")]
    InvalidGrid { columns: i32, rows: i32 },

    #[error("Pointer event carries no page coordinates")]
    OffscreenPointer,

    #[error("Invalid JSON: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for HexGridError {
    fn from(err: serde_json::Error) -> Self {
        HexGridError::Decode(err.to_string())
    }
}
