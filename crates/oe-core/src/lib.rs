//! Core types for Office Escape: items, inventories, identifiers, and the
//! interaction result protocol.
//!
//! This crate holds the data model shared by the puzzle engine and the game
//! controller. It knows nothing about rooms' contents or puzzle rules; it only
//! describes the values those layers pass around.

/// Item name constants and the name-to-description lookup table.
pub mod catalog;
/// Movement directions between rooms.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Stable room and puzzle identifiers.
pub mod ids;
/// The outcome of any interaction, plus declarative view updates.
pub mod interaction;
/// Keyed item collections.
pub mod inventory;
/// Items the player can carry.
pub mod item;
/// The player: a name, a location, and an inventory.
pub mod player;

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{PuzzleId, RoomId};
pub use interaction::{InteractionResult, Outcome, ViewUpdate};
pub use inventory::Inventory;
pub use item::Item;
pub use player::Player;
