/// Crate-level error type for recurrence line analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Input matrix has incorrect shape for the operation.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A required dimension is zero or too small.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// A numeric recurrence matrix holds something other than 0 or 1.
    #[error("recurrence matrix is not binary: entry ({row}, {col}) is {value}")]
    NonBinary { row: usize, col: usize, value: f32 },

    /// Diagonal offset lies outside `-(n-1)..=n-1`.
    #[error("diagonal offset {offset} out of range for a {size}x{size} recurrence plot")]
    InvalidOffset { offset: isize, size: usize },

    /// A tangential corrector was invoked without one of its parameters.
    #[error("`{corrector}` requires parameter `{name}` to be set")]
    MissingParameter {
        corrector: &'static str,
        name: &'static str,
    },

    /// Trajectory contains NaN or infinite coordinates.
    #[error("trajectory contains non-finite values")]
    NonFiniteTrajectory,
}

/// Convenience Result type for rqa-border operations.
pub type Result<T> = std::result::Result<T, Error>;
