//! Branching dialogue trees.

use oe_core::{InteractionResult, Inventory, PuzzleId, ViewUpdate};
use tracing::debug;

use crate::condition::Condition;
use crate::puzzle::PuzzleResponse;

/// What selecting an option does beyond moving through the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionResult {
    /// Walk to the option's target node.
    #[default]
    Continue,
    /// Solve the puzzle.
    Success,
}

/// A line the player can say.
#[derive(Debug, Clone)]
pub struct DialogueOption {
    /// The text shown to the player.
    pub text: String,
    /// Must hold for the option to be offered.
    pub condition: Condition,
    /// Index of the node this option leads to.
    pub next: usize,
    /// Extra effect of choosing this option.
    pub result: OptionResult,
}

impl DialogueOption {
    /// An unconditional option leading to `next`.
    pub fn new(text: impl Into<String>, next: usize) -> Self {
        Self {
            text: text.into(),
            condition: Condition::Always,
            next,
            result: OptionResult::Continue,
        }
    }

    /// Offer the option only while `condition` holds.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Mark this option as the one that solves the puzzle.
    pub fn succeeds(mut self) -> Self {
        self.result = OptionResult::Success;
        self
    }
}

/// One exchange in the conversation.
#[derive(Debug, Clone)]
pub struct DialogueNode {
    /// What the NPC says.
    pub npc_text: String,
    /// Every option, before condition filtering.
    pub options: Vec<DialogueOption>,
    /// Reaching this node ends the conversation.
    pub terminal: bool,
}

impl DialogueNode {
    /// A node the conversation continues from.
    pub fn new(npc_text: impl Into<String>, options: Vec<DialogueOption>) -> Self {
        Self {
            npc_text: npc_text.into(),
            options,
            terminal: false,
        }
    }

    /// A node that ends the conversation.
    pub fn terminal(npc_text: impl Into<String>) -> Self {
        Self {
            npc_text: npc_text.into(),
            options: Vec::new(),
            terminal: true,
        }
    }
}

/// Actions a dialogue accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueAction {
    /// Pick a 0-based index into the currently available options.
    SelectOption(usize),
    /// Walk away.
    Close,
}

/// A conversation whose position resets on every opening while its solved
/// flag persists.
#[derive(Debug, Clone)]
pub struct DialoguePuzzle {
    id: PuzzleId,
    description: String,
    nodes: Vec<DialogueNode>,
    current: usize,
    success_line: String,
    success_updates: Vec<ViewUpdate>,
    repeat_message: String,
    solved: bool,
}

impl DialoguePuzzle {
    /// Create a dialogue starting at node 0.
    pub fn new(id: PuzzleId, description: impl Into<String>, nodes: Vec<DialogueNode>) -> Self {
        Self {
            id,
            description: description.into(),
            nodes,
            current: 0,
            success_line: String::new(),
            success_updates: Vec::new(),
            repeat_message: "You've already sorted this out.".to_string(),
            solved: false,
        }
    }

    /// Set the line announcing success.
    pub fn with_success_line(mut self, line: impl Into<String>) -> Self {
        self.success_line = line.into();
        self
    }

    /// Add a view update emitted on success.
    pub fn with_success_update(mut self, update: ViewUpdate) -> Self {
        self.success_updates.push(update);
        self
    }

    /// Set the message returned when the success option is chosen again
    /// after the puzzle is solved.
    pub fn with_repeat_message(mut self, message: impl Into<String>) -> Self {
        self.repeat_message = message.into();
        self
    }

    /// Puzzle id.
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// Human-readable title.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the success option has ever been chosen.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Index of the node being shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The node being shown.
    pub fn current_node(&self) -> Option<&DialogueNode> {
        self.nodes.get(self.current)
    }

    /// Options of the current node whose conditions hold right now.
    pub fn available_options(&self, inventory: &Inventory) -> Vec<&DialogueOption> {
        self.current_node()
            .map(|node| {
                node.options
                    .iter()
                    .filter(|option| option.condition.evaluate(inventory))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Go back to the opening line.
    pub fn reset_position(&mut self) {
        self.current = 0;
    }

    /// Apply an action.
    pub fn interact(&mut self, action: DialogueAction, inventory: &Inventory) -> PuzzleResponse {
        match action {
            DialogueAction::SelectOption(index) => self.select_option(index, inventory),
            DialogueAction::Close => {
                PuzzleResponse::closing(InteractionResult::message("Conversation ended."))
            }
        }
    }

    fn select_option(&mut self, index: usize, inventory: &Inventory) -> PuzzleResponse {
        let Some(option) = self.available_options(inventory).get(index).copied() else {
            return PuzzleResponse::open(InteractionResult::message("Invalid option."));
        };
        let (result, next) = (option.result, option.next);
        debug!(puzzle = %self.id, node = self.current, index, "dialogue option");

        if result == OptionResult::Success {
            if self.solved {
                return PuzzleResponse::closing(InteractionResult::message(self.repeat_message.clone()));
            }
            self.solved = true;
            let solved = InteractionResult::puzzle_solved(self.id).with_dialogue(self.success_line.clone());
            let solved = self
                .success_updates
                .iter()
                .cloned()
                .fold(solved, InteractionResult::with_view_update);
            return PuzzleResponse::closing(solved);
        }

        let Some(node) = self.nodes.get(next) else {
            return PuzzleResponse::open(InteractionResult::message("Conversation continues..."));
        };
        self.current = next;
        if node.terminal {
            let text = if node.npc_text.is_empty() {
                "Conversation ended.".to_string()
            } else {
                node.npc_text.clone()
            };
            PuzzleResponse::closing(InteractionResult::message(text))
        } else {
            PuzzleResponse::open(InteractionResult::dialogue([node.npc_text.clone()]))
        }
    }
}
