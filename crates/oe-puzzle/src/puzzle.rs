//! The puzzle sum type and its uniform contract.

use oe_core::{InteractionResult, Inventory, PuzzleId};

use crate::dialogue::{DialogueAction, DialoguePuzzle};
use crate::interview::{DocumentQuiz, InterviewAction};
use crate::quiz::{QuizAction, QuizPuzzle};
use crate::timing::{TimingAction, TimingChallenge};

/// What a puzzle may look at while handling an action.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleContext<'a> {
    /// The player's inventory.
    pub inventory: &'a Inventory,
}

impl<'a> PuzzleContext<'a> {
    /// Context over a player's inventory.
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }
}

/// An action addressed to one puzzle variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleAction {
    /// For a [`QuizPuzzle`].
    Quiz(QuizAction),
    /// For a [`DialoguePuzzle`].
    Dialogue(DialogueAction),
    /// For a [`TimingChallenge`].
    Timing(TimingAction),
    /// For a [`DocumentQuiz`].
    Interview(InterviewAction),
}

/// The result of one puzzle interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResponse {
    /// What to apply.
    pub result: InteractionResult,
    /// This interaction solved the puzzle.
    pub solved: bool,
    /// The puzzle view should close.
    pub closed: bool,
}

impl PuzzleResponse {
    /// A response that leaves the view open unless it solved the puzzle.
    pub fn open(result: InteractionResult) -> Self {
        let solved = result.is_solved();
        Self {
            result,
            solved,
            closed: solved,
        }
    }

    /// A response that closes the view.
    pub fn closing(result: InteractionResult) -> Self {
        Self {
            solved: result.is_solved(),
            result,
            closed: true,
        }
    }
}

/// One of the game's puzzle state machines.
#[derive(Debug, Clone)]
pub enum Puzzle {
    /// Sequential quiz.
    Quiz(QuizPuzzle),
    /// Dialogue tree.
    Dialogue(DialoguePuzzle),
    /// Timing challenge.
    Timing(TimingChallenge),
    /// Quiz with document checks.
    Interview(DocumentQuiz),
}

impl Puzzle {
    /// Stable id.
    pub fn id(&self) -> PuzzleId {
        match self {
            Puzzle::Quiz(p) => p.id(),
            Puzzle::Dialogue(p) => p.id(),
            Puzzle::Timing(p) => p.id(),
            Puzzle::Interview(p) => p.id(),
        }
    }

    /// Human-readable title.
    pub fn description(&self) -> &str {
        match self {
            Puzzle::Quiz(p) => p.description(),
            Puzzle::Dialogue(p) => p.description(),
            Puzzle::Timing(p) => p.description(),
            Puzzle::Interview(p) => p.description(),
        }
    }

    /// Whether the puzzle has been solved. Never goes back to false.
    pub fn is_solved(&self) -> bool {
        match self {
            Puzzle::Quiz(p) => p.is_solved(),
            Puzzle::Dialogue(p) => p.is_solved(),
            Puzzle::Timing(p) => p.is_solved(),
            Puzzle::Interview(p) => p.is_solved(),
        }
    }

    /// Force the solved flag, used when restoring progress.
    pub fn mark_solved(&mut self) {
        match self {
            Puzzle::Quiz(p) => p.mark_solved(),
            Puzzle::Dialogue(p) => p.mark_solved(),
            Puzzle::Timing(p) => p.mark_solved(),
            Puzzle::Interview(p) => p.mark_solved(),
        }
    }

    /// Checked before the puzzle view is opened.
    pub fn can_start(&self, inventory: &Inventory) -> bool {
        match self {
            Puzzle::Quiz(p) => p.can_start(inventory),
            Puzzle::Dialogue(_) | Puzzle::Timing(_) | Puzzle::Interview(_) => true,
        }
    }

    /// Prepare for the view opening: conversations start over and the
    /// watcher starts out looking.
    pub fn on_open(&mut self) {
        match self {
            Puzzle::Dialogue(p) => p.reset_position(),
            Puzzle::Timing(p) => p.set_looking_away(false),
            Puzzle::Quiz(_) | Puzzle::Interview(_) => {}
        }
    }

    /// Apply an action. An action meant for another variant is answered
    /// with a message and changes nothing.
    pub fn interact(&mut self, action: PuzzleAction, ctx: &PuzzleContext<'_>) -> PuzzleResponse {
        match (self, action) {
            (Puzzle::Quiz(p), PuzzleAction::Quiz(a)) => p.interact(a),
            (Puzzle::Dialogue(p), PuzzleAction::Dialogue(a)) => p.interact(a, ctx.inventory),
            (Puzzle::Timing(p), PuzzleAction::Timing(a)) => p.interact(a),
            (Puzzle::Interview(p), PuzzleAction::Interview(a)) => p.interact(a, ctx.inventory),
            _ => PuzzleResponse::open(InteractionResult::message("Invalid action.")),
        }
    }

    /// The timing challenge inside, if this is one.
    pub fn as_timing_mut(&mut self) -> Option<&mut TimingChallenge> {
        match self {
            Puzzle::Timing(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset;
    use oe_core::Item;

    #[test]
    fn mismatched_action_is_rejected() {
        let mut puzzle = preset::security_check();
        let inventory = Inventory::new();
        let response = puzzle.interact(
            PuzzleAction::Quiz(QuizAction::Complete),
            &PuzzleContext::new(&inventory),
        );
        assert_eq!(response.result.message_text(), Some("Invalid action."));
        assert!(!response.closed);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn ids_match_presets() {
        assert_eq!(preset::ticket_quiz().id(), PuzzleId::Ticket);
        assert_eq!(preset::queue_guard().id(), PuzzleId::QueueGuard);
        assert_eq!(preset::security_check().id(), PuzzleId::Security);
        assert_eq!(preset::interview().id(), PuzzleId::Interview);
    }

    #[test]
    fn only_ticket_quiz_has_a_start_gate() {
        let holding: Inventory = [Item::new("ticketItem", "")].into_iter().collect();
        assert!(!preset::ticket_quiz().can_start(&holding));
        assert!(preset::queue_guard().can_start(&holding));
        assert!(preset::security_check().can_start(&holding));
        assert!(preset::interview().can_start(&holding));
    }

    #[test]
    fn mark_solved_is_sticky() {
        let mut puzzle = preset::queue_guard();
        puzzle.mark_solved();
        puzzle.on_open();
        assert!(puzzle.is_solved());
    }

    #[test]
    fn on_open_resets_watcher() {
        let mut puzzle = preset::security_check();
        if let Some(timing) = puzzle.as_timing_mut() {
            timing.set_looking_away(true);
        }
        puzzle.on_open();
        assert_eq!(puzzle.as_timing_mut().map(|t| t.is_looking_away()), Some(false));
    }
}
