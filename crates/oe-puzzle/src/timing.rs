//! Reaction timing challenges.

use oe_core::{InteractionResult, PuzzleId};
use tracing::debug;

use crate::puzzle::PuzzleResponse;

/// Actions a timing challenge accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingAction {
    /// Try to get one item past the watcher.
    ThrowItem,
    /// Clear progress and the caught flag.
    Reset,
}

/// Succeed `threshold` times while the watcher looks away.
///
/// The looking-away signal is pushed in from outside; the challenge never
/// flips it itself. Getting caught is sticky until [`TimingAction::Reset`].
#[derive(Debug, Clone)]
pub struct TimingChallenge {
    id: PuzzleId,
    description: String,
    threshold: u32,
    looking_away: bool,
    successes: u32,
    caught: bool,
    solved: bool,
}

impl TimingChallenge {
    /// Create a challenge that needs `threshold` successes.
    pub fn new(id: PuzzleId, description: impl Into<String>, threshold: u32) -> Self {
        Self {
            id,
            description: description.into(),
            threshold: threshold.max(1),
            looking_away: false,
            successes: 0,
            caught: false,
            solved: false,
        }
    }

    /// Puzzle id.
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// Human-readable title.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the threshold has been reached.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Update the external signal.
    pub fn set_looking_away(&mut self, looking_away: bool) {
        self.looking_away = looking_away;
    }

    /// Current value of the external signal.
    pub fn is_looking_away(&self) -> bool {
        self.looking_away
    }

    /// Successful throws so far.
    pub fn successes(&self) -> u32 {
        self.successes
    }

    /// Throws needed.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether the player was seen.
    pub fn is_caught(&self) -> bool {
        self.caught
    }

    /// Apply an action.
    pub fn interact(&mut self, action: TimingAction) -> PuzzleResponse {
        let result = match action {
            TimingAction::ThrowItem => self.throw_item(),
            TimingAction::Reset => {
                self.reset();
                InteractionResult::message("Puzzle reset.")
            }
        };
        PuzzleResponse::open(result)
    }

    fn throw_item(&mut self) -> InteractionResult {
        if self.solved {
            return InteractionResult::message("Your items are already through.");
        }
        if self.caught {
            return InteractionResult::message("You've been caught! Try again.");
        }
        if !self.looking_away {
            debug!(puzzle = %self.id, "caught throwing");
            self.caught = true;
            return InteractionResult::message(
                "CAUGHT! The guard saw you. Try again when they look away.",
            );
        }

        self.successes += 1;
        debug!(puzzle = %self.id, successes = self.successes, "successful throw");
        if self.successes >= self.threshold {
            self.solved = true;
            InteractionResult::puzzle_solved(self.id).with_dialogue(
                "You successfully threw all your items through! The guard didn't notice.",
            )
        } else {
            InteractionResult::message(format!(
                "Success! {}/{} items thrown.",
                self.successes, self.threshold
            ))
        }
    }

    /// Clear successes, the caught flag and the signal.
    pub fn reset(&mut self) {
        self.successes = 0;
        self.caught = false;
        self.looking_away = false;
    }
}
