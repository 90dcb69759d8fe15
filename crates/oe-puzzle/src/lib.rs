//! Puzzle engine for Office Escape.
//!
//! Each puzzle is a small state machine with two entry points: a
//! [`can_start`](Puzzle::can_start) gate checked before its view opens, and
//! [`interact`](Puzzle::interact), which consumes a typed [`PuzzleAction`]
//! and always returns a complete [`PuzzleResponse`]. Puzzles never fail:
//! malformed or out-of-range input degrades to a message.

/// Conditions on dialogue options.
pub mod condition;
/// Branching dialogue trees (the queue guard).
pub mod dialogue;
/// Quiz variant that also checks shown documents (the interview).
pub mod interview;
/// The game's concrete puzzles: questions, dialogue, thresholds.
pub mod preset;
/// The puzzle sum type, actions, and responses.
pub mod puzzle;
/// Sequential multiple-choice quizzes (the ticket machine).
pub mod quiz;
/// Reaction timing challenges (the metal detector).
pub mod timing;

pub use condition::Condition;
pub use dialogue::{DialogueAction, DialogueNode, DialogueOption, DialoguePuzzle, OptionResult};
pub use interview::{AnswerSelection, DocumentQuiz, InterviewAction, InterviewQuestion};
pub use puzzle::{Puzzle, PuzzleAction, PuzzleContext, PuzzleResponse};
pub use quiz::{Question, QuizAction, QuizPuzzle};
pub use timing::{TimingAction, TimingChallenge};
