//! The interaction result protocol.
//!
//! Every room and puzzle operation returns an [`InteractionResult`]: a tagged
//! [`Outcome`] plus an ordered list of [`ViewUpdate`]s for the presentation
//! layer. The view updates ride along independently of the outcome tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{PuzzleId, RoomId};
use crate::item::Item;

/// What happened as a result of an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Text to show the player.
    Message(String),
    /// A puzzle should be opened.
    PuzzleTriggered {
        /// The puzzle to open.
        puzzle: PuzzleId,
    },
    /// A puzzle was just solved.
    PuzzleSolved {
        /// The solved puzzle.
        puzzle: PuzzleId,
        /// A reward for the player, if any.
        item: Option<Item>,
        /// Closing lines to show.
        dialogue: Vec<String>,
    },
    /// The player receives an item.
    ItemObtained {
        /// The item.
        item: Item,
    },
    /// A door opened. Unlocking never moves the player.
    DoorUnlocked {
        /// The room behind the door.
        next_room: RoomId,
    },
    /// Lines of dialogue to show.
    Dialogue {
        /// The lines, in order.
        lines: Vec<String>,
    },
    /// Nothing to report.
    None,
}

/// A declarative instruction for the presentation layer.
///
/// The textual form is `verb:target`, e.g. `enableHotspot:guard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewUpdate {
    /// Make a hotspot clickable.
    EnableHotspot(String),
    /// Make a hotspot inert.
    DisableHotspot(String),
    /// Play a named animation.
    PlayAnimation(String),
}

impl ViewUpdate {
    /// The hotspot or animation this update targets.
    pub fn target(&self) -> &str {
        match self {
            Self::EnableHotspot(id) | Self::DisableHotspot(id) | Self::PlayAnimation(id) => id,
        }
    }
}

impl fmt::Display for ViewUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnableHotspot(id) => write!(f, "enableHotspot:{id}"),
            Self::DisableHotspot(id) => write!(f, "disableHotspot:{id}"),
            Self::PlayAnimation(id) => write!(f, "playAnimation:{id}"),
        }
    }
}

impl FromStr for ViewUpdate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::MalformedViewUpdate(s.to_string());
        let (verb, target) = s.split_once(':').ok_or_else(malformed)?;
        if target.is_empty() {
            return Err(malformed());
        }
        let target = target.to_string();
        match verb {
            "enableHotspot" => Ok(Self::EnableHotspot(target)),
            "disableHotspot" => Ok(Self::DisableHotspot(target)),
            "playAnimation" => Ok(Self::PlayAnimation(target)),
            _ => Err(malformed()),
        }
    }
}

/// The outcome of an interaction plus the view updates it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// What happened.
    pub outcome: Outcome,
    /// Presentation instructions, in order.
    pub view_updates: Vec<ViewUpdate>,
}

impl InteractionResult {
    /// Wrap an outcome with no view updates.
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            view_updates: Vec::new(),
        }
    }

    /// A plain message.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(Outcome::Message(text.into()))
    }

    /// Ask the controller to open a puzzle.
    pub fn puzzle_triggered(puzzle: PuzzleId) -> Self {
        Self::new(Outcome::PuzzleTriggered { puzzle })
    }

    /// Report a solved puzzle.
    pub fn puzzle_solved(puzzle: PuzzleId) -> Self {
        Self::new(Outcome::PuzzleSolved {
            puzzle,
            item: None,
            dialogue: Vec::new(),
        })
    }

    /// Hand the player an item.
    pub fn item_obtained(item: Item) -> Self {
        Self::new(Outcome::ItemObtained { item })
    }

    /// Report an unlocked door.
    pub fn door_unlocked(next_room: RoomId) -> Self {
        Self::new(Outcome::DoorUnlocked { next_room })
    }

    /// Dialogue lines.
    pub fn dialogue(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(Outcome::Dialogue {
            lines: lines.into_iter().map(Into::into).collect(),
        })
    }

    /// Nothing happened.
    pub fn none() -> Self {
        Self::new(Outcome::None)
    }

    /// Append a view update.
    pub fn with_view_update(mut self, update: ViewUpdate) -> Self {
        self.view_updates.push(update);
        self
    }

    /// Append a dialogue line. Only `PuzzleSolved` and `Dialogue` outcomes
    /// carry lines; other outcomes are left untouched.
    pub fn with_dialogue(mut self, line: impl Into<String>) -> Self {
        match &mut self.outcome {
            Outcome::PuzzleSolved { dialogue, .. } => dialogue.push(line.into()),
            Outcome::Dialogue { lines } => lines.push(line.into()),
            _ => {}
        }
        self
    }

    /// Attach a reward to a `PuzzleSolved` outcome.
    pub fn with_item(mut self, reward: Item) -> Self {
        if let Outcome::PuzzleSolved { item, .. } = &mut self.outcome {
            *item = Some(reward);
        }
        self
    }

    /// The message text, if this is a `Message` outcome.
    pub fn message_text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Message(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this result reports a solved puzzle.
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::PuzzleSolved { .. })
    }

    /// Every line of text this result wants shown, in order.
    pub fn lines(&self) -> Vec<&str> {
        match &self.outcome {
            Outcome::Message(text) => vec![text.as_str()],
            Outcome::PuzzleSolved { dialogue, .. } => {
                dialogue.iter().map(String::as_str).collect()
            }
            Outcome::Dialogue { lines } => lines.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_update_text_form() {
        let update = ViewUpdate::EnableHotspot("nextRoom".into());
        assert_eq!(update.to_string(), "enableHotspot:nextRoom");
        assert_eq!("enableHotspot:nextRoom".parse::<ViewUpdate>(), Ok(update));
        assert_eq!(
            "playAnimation:guardWatching".parse::<ViewUpdate>(),
            Ok(ViewUpdate::PlayAnimation("guardWatching".into()))
        );
    }

    #[test]
    fn malformed_view_updates() {
        for bad in ["enableHotspot", "enableHotspot:", "explode:door", ""] {
            assert!(bad.parse::<ViewUpdate>().is_err(), "{bad} parsed");
        }
    }

    #[test]
    fn solved_builder_collects_payload() {
        let result = InteractionResult::puzzle_solved(PuzzleId::Ticket)
            .with_dialogue("You got ticket number 12!")
            .with_item(Item::new("ticketItem", ""))
            .with_view_update(ViewUpdate::DisableHotspot("ticketMachine".into()));

        assert!(result.is_solved());
        assert_eq!(result.lines(), ["You got ticket number 12!"]);
        assert_eq!(result.view_updates.len(), 1);
        match result.outcome {
            Outcome::PuzzleSolved { puzzle, item, .. } => {
                assert_eq!(puzzle, PuzzleId::Ticket);
                assert_eq!(item.unwrap().name(), "ticketItem");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn view_updates_ride_on_any_outcome() {
        let result = InteractionResult::message("Nothing happens.")
            .with_view_update(ViewUpdate::PlayAnimation("shrug".into()));
        assert_eq!(result.message_text(), Some("Nothing happens."));
        assert_eq!(result.view_updates[0].target(), "shrug");
    }

    #[test]
    fn with_item_ignored_for_messages() {
        let result = InteractionResult::message("hi").with_item(Item::new("x", ""));
        assert_eq!(result.outcome, Outcome::Message("hi".into()));
    }
}
