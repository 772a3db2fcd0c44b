//! Design studio errors.

/// Result type for design operations.
pub type DesignResult<T> = Result<T, DesignError>;

/// Design studio errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    /// Prompt was empty or whitespace.
    #[error("design prompt is empty")]
    EmptyPrompt,

    /// A generation is already in flight.
    #[error("a design is already being generated")]
    Busy,

    /// A result was delivered with no generation in flight.
    #[error("no design generation in progress")]
    NotGenerating,

    /// Accept was pressed with no design on screen.
    #[error("no design to accept")]
    NothingToAccept,

    /// The generator failed.
    #[error("design generation failed: {0}")]
    Generation(String),
}
