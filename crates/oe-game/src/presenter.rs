//! What the game tells its front end.

use oe_core::{Inventory, PuzzleId, RoomId, ViewUpdate};

use crate::room::Room;

/// A front end the controller drives.
///
/// The controller never reads anything back; every call is a one-way
/// instruction.
pub trait Presenter {
    /// Show a room and its enabled hotspots.
    fn show_room(&mut self, room: &Room);

    /// Apply declarative view updates.
    fn apply_view_updates(&mut self, updates: &[ViewUpdate]);

    /// Refresh both inventory panes.
    fn update_inventory(&mut self, player: &Inventory, room: &Inventory);

    /// Open a puzzle view.
    fn show_puzzle_overlay(&mut self, puzzle: PuzzleId);

    /// Close whatever puzzle view is open.
    fn hide_puzzle_overlay(&mut self);

    /// Show a line of text.
    fn show_transient_message(&mut self, text: &str);

    /// Signal that the game was saved.
    fn show_save_indicator(&mut self) {}
}

/// Everything a [`RecordingPresenter`] has been told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// A room was shown.
    RoomShown {
        /// Which room.
        room: RoomId,
        /// Its description.
        description: String,
        /// Ids of its enabled hotspots.
        hotspots: Vec<String>,
    },
    /// View updates arrived.
    ViewUpdates(Vec<ViewUpdate>),
    /// Inventories changed.
    Inventory {
        /// Player item names.
        player: Vec<String>,
        /// Room item names.
        room: Vec<String>,
    },
    /// A puzzle view opened.
    PuzzleOpened(PuzzleId),
    /// The puzzle view closed.
    PuzzleClosed,
    /// A message.
    Message(String),
    /// The game was saved.
    Saved,
}

/// A presenter that records every call, for text front ends and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events so far.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Just the messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn show_room(&mut self, room: &Room) {
        self.events.push(PresenterEvent::RoomShown {
            room: room.id(),
            description: room.description().to_string(),
            hotspots: room
                .interactables()
                .filter(|h| h.enabled)
                .map(|h| h.id.clone())
                .collect(),
        });
    }

    fn apply_view_updates(&mut self, updates: &[ViewUpdate]) {
        self.events.push(PresenterEvent::ViewUpdates(updates.to_vec()));
    }

    fn update_inventory(&mut self, player: &Inventory, room: &Inventory) {
        self.events.push(PresenterEvent::Inventory {
            player: player.names().map(str::to_string).collect(),
            room: room.names().map(str::to_string).collect(),
        });
    }

    fn show_puzzle_overlay(&mut self, puzzle: PuzzleId) {
        self.events.push(PresenterEvent::PuzzleOpened(puzzle));
    }

    fn hide_puzzle_overlay(&mut self) {
        self.events.push(PresenterEvent::PuzzleClosed);
    }

    fn show_transient_message(&mut self, text: &str) {
        self.events.push(PresenterEvent::Message(text.to_string()));
    }

    fn show_save_indicator(&mut self) {
        self.events.push(PresenterEvent::Saved);
    }
}
