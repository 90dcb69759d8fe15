//! Player state.

use crate::ids::RoomId;
use crate::inventory::Inventory;

/// The player: who they are, where they stand, and what they carry.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    location: RoomId,
    /// Items carried by the player.
    pub inventory: Inventory,
}

impl Player {
    /// Create a player standing in `location` with an empty inventory.
    pub fn new(name: impl Into<String>, location: RoomId) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Inventory::new(),
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room the player is standing in.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// Place the player in another room.
    pub fn move_to(&mut self, room: RoomId) {
        self.location = room;
    }

    /// Check if the player holds an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }
}
