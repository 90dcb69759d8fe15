//! Game layer for Office Escape.
//!
//! Rooms and their hotspots, the room graph, cross-room entry rules,
//! persistence, and the [`GameController`] that routes front-end events
//! into puzzles and reports back through a [`Presenter`]. A text front end
//! ([`TextSession`]) sits on top for scripted and terminal play.

/// Game configuration.
pub mod config;
/// Event dispatch and game orchestration.
pub mod controller;
/// The looking-away cadence of the security guard.
pub mod driver;
/// Error types for the game layer.
pub mod error;
/// Entry rules between rooms.
pub mod gate;
/// The room graph and the office layout.
pub mod graph;
/// Text command parsing.
pub mod parser;
/// The presentation interface.
pub mod presenter;
/// Rooms and hotspots.
pub mod room;
/// Save files.
pub mod save;
/// Line-oriented text play.
pub mod session;
/// Scripted effects of item moves and solved puzzles.
pub mod triggers;

pub use config::GameConfig;
pub use controller::{GameController, MoveOutcome, UiEvent};
pub use driver::LookoutSchedule;
pub use error::{GameError, GameResult};
pub use gate::{EntryDecision, check_entry};
pub use graph::RoomGraph;
pub use parser::{Command, parse_command};
pub use presenter::{Presenter, PresenterEvent, RecordingPresenter};
pub use room::{HotspotAction, Interactable, InteractionType, Room};
pub use save::{FileSaveStore, MemorySaveStore, SaveData, SaveStore};
pub use session::TextSession;
