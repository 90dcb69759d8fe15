//! Rooms and their hotspots.

use std::collections::{BTreeMap, HashMap};

use oe_core::{Direction, InteractionResult, Inventory, PuzzleId, RoomId, ViewUpdate};
use oe_puzzle::Puzzle;
use tracing::debug;

/// What clicking a hotspot is meant to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionType {
    /// Use the ticket machine.
    TakeTicket,
    /// Talk to the queue guard.
    TalkToGuard,
    /// Walk up to the metal detector.
    SecurityCheck,
    /// Sit down for the interview.
    StartInterview,
}

impl InteractionType {
    /// The puzzle this interaction opens, by fixed convention.
    pub fn puzzle(&self) -> PuzzleId {
        match self {
            Self::TakeTicket => PuzzleId::Ticket,
            Self::TalkToGuard => PuzzleId::QueueGuard,
            Self::SecurityCheck => PuzzleId::Security,
            Self::StartInterview => PuzzleId::Interview,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TakeTicket => "take ticket",
            Self::TalkToGuard => "talk to guard",
            Self::SecurityCheck => "security check",
            Self::StartInterview => "start interview",
        }
    }
}

/// How the player touches a hotspot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HotspotAction {
    /// Use it.
    #[default]
    Click,
    /// Look at it closely.
    Examine,
}

/// A clickable thing in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interactable {
    /// Unique within its room.
    pub id: String,
    /// Routing key.
    pub kind: InteractionType,
    /// Disabled hotspots ignore clicks.
    pub enabled: bool,
    /// Shown on examine.
    pub description: Option<String>,
}

impl Interactable {
    /// An enabled hotspot without a description.
    pub fn new(id: impl Into<String>, kind: InteractionType) -> Self {
        Self {
            id: id.into(),
            kind,
            enabled: true,
            description: None,
        }
    }

    /// Set the examine text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A room: exits, hotspots, puzzles, and the items lying around.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    description: String,
    exits: HashMap<Direction, RoomId>,
    interactables: BTreeMap<String, Interactable>,
    puzzles: BTreeMap<PuzzleId, Puzzle>,
    /// Items on the floor.
    pub inventory: Inventory,
}

impl Room {
    /// An empty room.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            exits: HashMap::new(),
            interactables: BTreeMap::new(),
            puzzles: BTreeMap::new(),
            inventory: Inventory::new(),
        }
    }

    /// Room id.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Room name, as written to save files.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// What the player sees on entering.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_exit(&mut self, direction: Direction, to: RoomId) {
        self.exits.insert(direction, to);
    }

    /// Neighbour in a direction.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// All exits, in [`Direction::ALL`] order.
    pub fn exits(&self) -> Vec<(Direction, RoomId)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.exit(d).map(|to| (d, to)))
            .collect()
    }

    /// Add a hotspot, replacing one with the same id.
    pub fn add_interactable(&mut self, interactable: Interactable) {
        self.interactables.insert(interactable.id.clone(), interactable);
    }

    /// Look up a hotspot.
    pub fn interactable(&self, id: &str) -> Option<&Interactable> {
        self.interactables.get(id)
    }

    /// All hotspots, ordered by id.
    pub fn interactables(&self) -> impl Iterator<Item = &Interactable> {
        self.interactables.values()
    }

    /// Add a puzzle, replacing one with the same id.
    pub fn add_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzles.insert(puzzle.id(), puzzle);
    }

    /// Look up a puzzle.
    pub fn puzzle(&self, id: PuzzleId) -> Option<&Puzzle> {
        self.puzzles.get(&id)
    }

    /// Look up a puzzle mutably.
    pub fn puzzle_mut(&mut self, id: PuzzleId) -> Option<&mut Puzzle> {
        self.puzzles.get_mut(&id)
    }

    /// All puzzles in this room.
    pub fn puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.values()
    }

    /// Apply enable/disable updates aimed at this room's hotspots. Updates
    /// naming other hotspots, and animations, are left for the presenter.
    pub fn apply_view_updates(&mut self, updates: &[ViewUpdate]) {
        for update in updates {
            let (id, enabled) = match update {
                ViewUpdate::EnableHotspot(id) => (id, true),
                ViewUpdate::DisableHotspot(id) => (id, false),
                ViewUpdate::PlayAnimation(_) => continue,
            };
            if let Some(hotspot) = self.interactables.get_mut(id) {
                hotspot.enabled = enabled;
            }
        }
    }

    /// Route a hotspot action. The hotspot only picks a puzzle; the puzzle
    /// holds the logic.
    pub fn interact(&self, hotspot_id: &str, action: HotspotAction) -> InteractionResult {
        let Some(hotspot) = self.interactables.get(hotspot_id).filter(|h| h.enabled) else {
            return InteractionResult::message("You can't interact with that.");
        };

        if action == HotspotAction::Examine {
            return InteractionResult::message(
                hotspot
                    .description
                    .clone()
                    .unwrap_or_else(|| "You see nothing special.".to_string()),
            );
        }

        let puzzle = hotspot.kind.puzzle();
        debug!(room = %self.id, hotspot = hotspot_id, %puzzle, "hotspot clicked");
        if self.puzzles.contains_key(&puzzle) {
            InteractionResult::puzzle_triggered(puzzle)
        } else {
            InteractionResult::message("Nothing happens.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oe_core::Outcome;
    use oe_puzzle::preset;

    fn ticket_room() -> Room {
        let mut room = Room::new(RoomId::Ticket, "Ticket Machine Room");
        room.add_interactable(
            Interactable::new("ticketMachine", InteractionType::TakeTicket)
                .with_description("It hums ominously."),
        );
        room.add_puzzle(preset::ticket_quiz());
        room
    }

    #[test]
    fn click_routes_to_puzzle() {
        let room = ticket_room();
        let result = room.interact("ticketMachine", HotspotAction::Click);
        assert_eq!(
            result.outcome,
            Outcome::PuzzleTriggered {
                puzzle: PuzzleId::Ticket
            }
        );
    }

    #[test]
    fn unknown_hotspot() {
        let room = ticket_room();
        let result = room.interact("vendingMachine", HotspotAction::Click);
        assert_eq!(result.message_text(), Some("You can't interact with that."));
    }

    #[test]
    fn disabled_hotspot() {
        let mut room = ticket_room();
        room.apply_view_updates(&[ViewUpdate::DisableHotspot("ticketMachine".to_string())]);
        let result = room.interact("ticketMachine", HotspotAction::Click);
        assert_eq!(result.message_text(), Some("You can't interact with that."));

        room.apply_view_updates(&[ViewUpdate::EnableHotspot("ticketMachine".to_string())]);
        assert!(room.interact("ticketMachine", HotspotAction::Click).message_text().is_none());
    }

    #[test]
    fn missing_puzzle_falls_through() {
        let mut room = Room::new(RoomId::Queue, "Queue");
        room.add_interactable(Interactable::new("guard", InteractionType::TalkToGuard));
        let result = room.interact("guard", HotspotAction::Click);
        assert_eq!(result.message_text(), Some("Nothing happens."));
    }

    #[test]
    fn examine_shows_description() {
        let room = ticket_room();
        let result = room.interact("ticketMachine", HotspotAction::Examine);
        assert_eq!(result.message_text(), Some("It hums ominously."));

        let mut bare = Room::new(RoomId::Queue, "Queue");
        bare.add_interactable(Interactable::new("guard", InteractionType::TalkToGuard));
        let result = bare.interact("guard", HotspotAction::Examine);
        assert_eq!(result.message_text(), Some("You see nothing special."));
    }

    #[test]
    fn exits_listed_in_direction_order() {
        let mut room = Room::new(RoomId::Queue, "Queue");
        room.set_exit(Direction::Backward, RoomId::Ticket);
        room.set_exit(Direction::Forward, RoomId::Security);
        assert_eq!(
            room.exits(),
            vec![
                (Direction::Forward, RoomId::Security),
                (Direction::Backward, RoomId::Ticket)
            ]
        );
    }
}
