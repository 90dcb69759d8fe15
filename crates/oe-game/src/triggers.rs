//! Scripted side effects keyed by puzzle or by item movement.

use oe_core::{Inventory, PuzzleId, RoomId, catalog};

/// Which way an item moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMove {
    /// Room to player.
    Taken,
    /// Player to room.
    Dropped,
}

/// Fires when a particular item moves a particular way in a particular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMoveTrigger {
    /// Where the move must happen.
    pub room: RoomId,
    /// Which item.
    pub item: &'static str,
    /// Which way.
    pub movement: ItemMove,
    /// The trigger stays quiet while the player holds this.
    pub unless_holding: &'static str,
    /// Item handed to the player.
    pub grant: &'static str,
    /// What the player is told.
    pub message: &'static str,
}

/// Item-move triggers.
pub const ITEM_MOVE_TRIGGERS: &[ItemMoveTrigger] = &[ItemMoveTrigger {
    room: RoomId::Queue,
    item: catalog::BANANA_PEEL,
    movement: ItemMove::Dropped,
    unless_holding: catalog::STOLEN_DOCUMENT,
    grant: catalog::STOLEN_DOCUMENT,
    message: "Someone slipped on the banana peel!\nThey dropped a document.\nYou pick it up.",
}];

/// The trigger matching a move, if any.
pub fn item_move_trigger(
    room: RoomId,
    item: &str,
    movement: ItemMove,
    player: &Inventory,
) -> Option<&'static ItemMoveTrigger> {
    ITEM_MOVE_TRIGGERS.iter().find(|t| {
        t.room == room
            && t.item == item
            && t.movement == movement
            && !player.contains(t.unless_holding)
    })
}

/// Runs after a particular puzzle is solved, on top of the generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSolveEffect {
    /// The puzzle.
    pub puzzle: PuzzleId,
    /// Item taken from the player, if they hold it.
    pub consume: &'static str,
    /// Shown when the item is taken.
    pub message: &'static str,
}

/// Post-solve effects.
pub const POST_SOLVE_EFFECTS: &[PostSolveEffect] = &[PostSolveEffect {
    puzzle: PuzzleId::QueueGuard,
    consume: catalog::POPSICLE,
    message: "You gave the popsicle to the guard.",
}];

/// Effects for a solved puzzle.
pub fn post_solve_effects(puzzle: PuzzleId) -> impl Iterator<Item = &'static PostSolveEffect> {
    POST_SOLVE_EFFECTS.iter().filter(move |e| e.puzzle == puzzle)
}
