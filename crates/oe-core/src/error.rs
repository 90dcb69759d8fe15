/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when parsing core identifiers and commands from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No room carries the given name.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// No puzzle carries the given id.
    #[error("unknown puzzle: \"{0}\"")]
    UnknownPuzzle(String),

    /// The text is not a direction.
    #[error("unknown direction: \"{0}\"")]
    UnknownDirection(String),

    /// The text is not a `verb:target` view update.
    #[error("malformed view update: \"{0}\"")]
    MalformedViewUpdate(String),
}
