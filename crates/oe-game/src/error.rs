//! Error types for the game engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game.
///
/// Player input never produces one of these; it is answered with a message.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading or writing the save file failed.
    #[error("save file {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The save file exists but cannot be used.
    #[error("corrupt save: {0}")]
    CorruptSave(String),

    /// A room id that the graph does not contain.
    #[error("room not in graph: {0}")]
    RoomNotInGraph(String),

    /// Core data error.
    #[error(transparent)]
    Core(#[from] oe_core::CoreError),
}
