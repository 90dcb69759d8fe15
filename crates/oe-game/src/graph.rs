//! The room graph.

use std::collections::BTreeMap;

use oe_core::{Direction, PuzzleId, RoomId, catalog};
use oe_puzzle::{Puzzle, preset};

use crate::error::{GameError, GameResult};
use crate::room::{Interactable, InteractionType, Room};

/// Every room in the game, keyed by id, plus the start room.
///
/// Rooms are created first and linked afterwards; exits never change once
/// the graph is built.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: BTreeMap<RoomId, Room>,
    start: RoomId,
}

impl RoomGraph {
    /// A graph holding only the start room.
    pub fn new(start: Room) -> Self {
        let id = start.id();
        let mut rooms = BTreeMap::new();
        rooms.insert(id, start);
        Self { rooms, start: id }
    }

    /// The immigration office: eight rooms in a line, each linked forward to
    /// the next and backward to the previous.
    pub fn office() -> Self {
        let mut outside = Room::new(RoomId::Outside, "Outside the Irish Immigration Office");
        outside.inventory.add(catalog::item_from_name(catalog::BANANA_PEEL));

        let mut ticket = Room::new(RoomId::Ticket, "Ticket Machine Room - Take a number and cry");
        ticket.add_interactable(
            Interactable::new("ticketMachine", InteractionType::TakeTicket).with_description(
                "A ticket machine with a sticky touchscreen. It wants you to prove yourself.",
            ),
        );
        ticket.add_puzzle(preset::ticket_quiz());
        ticket.inventory.add(catalog::item_from_name(catalog::POPSICLE));

        let mut queue = Room::new(RoomId::Queue, "The Queue Room - A test of patience");
        queue.add_interactable(
            Interactable::new("guard", InteractionType::TalkToGuard)
                .with_description("A sweaty guard in a polyester uniform, eyeing the vending machine."),
        );
        queue.add_puzzle(preset::queue_guard());

        let mut security = Room::new(
            RoomId::Security,
            "Security Check - Metal detector and suspicious stares",
        );
        security.add_interactable(
            Interactable::new("metalDetector", InteractionType::SecurityCheck).with_description(
                "A metal detector. The guard beside it keeps glancing at the clock.",
            ),
        );
        security.add_puzzle(preset::security_check());

        let mut documents = Room::new(
            RoomId::Documents,
            "Document Verification Room - Missing photocopy simulator",
        );
        for name in [
            catalog::PASSPORT,
            catalog::VISA_APPLICATION,
            catalog::BIRTH_CERTIFICATE,
            catalog::EMPLOYMENT_LETTER,
        ] {
            documents.inventory.add(catalog::item_from_name(name));
        }

        let mut interview = Room::new(
            RoomId::Interview,
            "Interview Room - The final bureaucratic boss fight",
        );
        interview.add_interactable(
            Interactable::new("interviewer", InteractionType::StartInterview)
                .with_description("An interviewer with a stack of forms and no patience."),
        );
        interview.add_puzzle(preset::interview());

        let approval = Room::new(
            RoomId::Approval,
            "Approval Room - The land of the sacred green stamp",
        );
        let exit = Room::new(RoomId::Exit, "Exit - Freedom! You escaped the office.");

        let mut graph = Self::new(outside);
        for room in [ticket, queue, security, documents, interview, approval, exit] {
            graph.add_room(room);
        }
        for pair in RoomId::ALL.windows(2) {
            graph.link_both(pair[0], pair[1]);
        }
        graph
    }

    /// Add a room, replacing one with the same id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id(), room);
    }

    /// Link `from` forward to `to` and `to` backward to `from`. Ids that are
    /// not in the graph are skipped.
    pub fn link_both(&mut self, from: RoomId, to: RoomId) {
        if !(self.rooms.contains_key(&from) && self.rooms.contains_key(&to)) {
            return;
        }
        if let Some(room) = self.rooms.get_mut(&from) {
            room.set_exit(Direction::Forward, to);
        }
        if let Some(room) = self.rooms.get_mut(&to) {
            room.set_exit(Direction::Backward, from);
        }
    }

    /// Where new games begin.
    pub fn start_room(&self) -> RoomId {
        self.start
    }

    /// All rooms, ordered by id.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// All rooms, mutably.
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }

    /// Whether the graph contains a room.
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> GameResult<&Room> {
        self.rooms
            .get(&id)
            .ok_or_else(|| GameError::RoomNotInGraph(id.to_string()))
    }

    /// Look up a room mutably.
    pub fn room_mut(&mut self, id: RoomId) -> GameResult<&mut Room> {
        self.rooms
            .get_mut(&id)
            .ok_or_else(|| GameError::RoomNotInGraph(id.to_string()))
    }

    /// Find a room by its save-file name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        RoomId::from_name(name).and_then(|id| self.rooms.get(&id))
    }

    /// Find a puzzle wherever it lives.
    pub fn puzzle(&self, id: PuzzleId) -> Option<&Puzzle> {
        self.rooms.values().find_map(|room| room.puzzle(id))
    }

    /// Find a puzzle mutably wherever it lives.
    pub fn puzzle_mut(&mut self, id: PuzzleId) -> Option<&mut Puzzle> {
        self.rooms.values_mut().find_map(|room| room.puzzle_mut(id))
    }

    /// Whether a puzzle exists and is solved.
    pub fn is_solved(&self, id: PuzzleId) -> bool {
        self.puzzle(id).is_some_and(Puzzle::is_solved)
    }

    /// Rooms on the forward path from the start, up to and including
    /// `target`. Empty if `target` is not on that path.
    pub fn forward_path_to(&self, target: RoomId) -> Vec<RoomId> {
        let mut path = Vec::new();
        let mut current = Some(self.start);
        while let Some(id) = current {
            if path.contains(&id) {
                break;
            }
            path.push(id);
            if id == target {
                return path;
            }
            current = self
                .rooms
                .get(&id)
                .and_then(|room| room.exit(Direction::Forward));
        }
        Vec::new()
    }
}
