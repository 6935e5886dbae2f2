use thiserror::Error;

/// Canonical result for sequence construction and eager consumption.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("range step must not be zero")]
    ZeroStep,

    #[error("range step {step} does not lead from {start} to {end}")]
    StepDirection {
        start: String,
        end: String,
        step: String,
    },

    #[error("chunk size must be positive")]
    ChunkSize,

    #[error("yield step must be greater than zero")]
    YieldStep,

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: i64 },

    // Raised by `join` when the element at `position` is consumed.
    #[error("value at position {position} has no string representation")]
    NotStringable { position: usize },
}
