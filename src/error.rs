//! Error types for simulation setup
//!
//! Ticks never fail; errors only come from precondition checks when the
//! simulation is created, resized, or given a tuning file.

use thiserror::Error;

/// Top-level error for the simulation crate
#[derive(Debug, Error)]
pub enum SimError {
    /// Viewport must be finite and strictly positive in both axes
    #[error("invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    /// A tuning value is outside its usable range
    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: String,
    },

    /// Tuning JSON could not be parsed
    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    /// Tuning file could not be read
    #[error("failed to read tuning file: {0}")]
    TuningIo(#[from] std::io::Error),
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;
